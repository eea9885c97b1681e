//! Analyze command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::manuscript;
use crate::output::{AnalysisWriter, CsvFormatter, JsonFormatter, TableFormatter};
use crate::progress::ProgressReporter;
use crate::ChapterAnalysis;
use anyhow::{Context, Result};
use clap::Args;
use legible_core::Analyzer;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: table, or the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat inputs as marker-tagged manuscripts and split into chapters
    #[arg(short, long)]
    pub manuscript: bool,

    /// Append per-sense sensory columns
    #[arg(long)]
    pub senses: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table, one row per chapter
    Table,
    /// Flat CSV rows with the canonical header
    Csv,
    /// JSON array of labeled metric records
    Json,
}

impl OutputFormat {
    /// Parse a configured format name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "table" => Some(OutputFormat::Table),
            "csv" => Some(OutputFormat::Csv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let config = CliConfig::load(self.config.as_deref())?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format: {}",
                    config.output.default_format
                ))
            })?,
        };
        let include_senses = self.senses || config.output.include_senses;

        let files = resolve_patterns(&self.input)?;
        let analyzer = Analyzer::with_profile(config.scoring.clone());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut analyses = Vec::new();
        for path in &files {
            let stem = FileReader::label(path);
            let text = FileReader::read_text(path)?;

            let units = if self.manuscript {
                let parsed =
                    manuscript::parse(&path.display().to_string(), &text, &config.manuscript)?;
                parsed
                    .chapters
                    .iter()
                    .enumerate()
                    .map(|(index, chapter)| {
                        let label = if files.len() > 1 {
                            format!("{stem}: {}", chapter.label(index))
                        } else {
                            chapter.label(index)
                        };
                        (label, chapter.body.clone())
                    })
                    .collect()
            } else {
                if text.trim().is_empty() {
                    return Err(
                        CliError::EmptyManuscript(path.display().to_string()).into()
                    );
                }
                vec![(stem.clone(), text)]
            };

            log::info!("Analyzing {} unit(s) from {}", units.len(), path.display());
            let records: Vec<ChapterAnalysis> = units
                .par_iter()
                .map(|(label, body)| ChapterAnalysis {
                    label: label.clone(),
                    metrics: analyzer.analyze(body),
                })
                .collect();
            analyses.extend(records);

            progress.file_completed(&stem);
        }
        progress.finish();

        let writer = self.open_output()?;
        let mut formatter: Box<dyn AnalysisWriter> = match format {
            OutputFormat::Table => Box::new(TableFormatter::new(writer, include_senses)),
            OutputFormat::Csv => Box::new(CsvFormatter::new(writer, include_senses)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, include_senses)),
        };
        for analysis in &analyses {
            formatter.write_record(analysis)?;
        }
        formatter.finish()?;

        log::info!("Wrote {} record(s)", analyses.len());
        Ok(())
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output: {}", path.display()))?;
                Ok(Box::new(file))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names_round_trip() {
        assert_eq!(OutputFormat::from_name("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_name("csv"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }
}
