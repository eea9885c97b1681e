//! Report command implementation

use crate::config::CliConfig;
use crate::input::FileReader;
use crate::manuscript;
use crate::report::write_report;
use crate::ChapterAnalysis;
use anyhow::{Context, Result};
use clap::Args;
use legible_core::Analyzer;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the report command
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Manuscript file with ### START / ### END markers
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output markdown file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ReportArgs {
    /// Execute the report command
    pub fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);

        let config = CliConfig::load(self.config.as_deref())?;
        let text = FileReader::read_text(&self.input)?;
        let parsed = manuscript::parse(
            &self.input.display().to_string(),
            &text,
            &config.manuscript,
        )?;

        let analyzer = Analyzer::with_profile(config.scoring.clone());
        log::info!(
            "Analyzing {} chapter(s) from {}",
            parsed.chapters.len(),
            self.input.display()
        );
        let analyses: Vec<ChapterAnalysis> = parsed
            .chapters
            .par_iter()
            .enumerate()
            .map(|(index, chapter)| ChapterAnalysis {
                label: chapter.label(index),
                metrics: analyzer.analyze(&chapter.body),
            })
            .collect();

        let title = parsed
            .title
            .clone()
            .unwrap_or_else(|| FileReader::label(&self.input));

        match &self.output {
            Some(path) => {
                let mut file = File::create(path)
                    .with_context(|| format!("Failed to create output: {}", path.display()))?;
                write_report(&mut file, &title, parsed.author.as_deref(), &analyses)?;
                log::info!("Report written to {}", path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                write_report(&mut handle, &title, parsed.author.as_deref(), &analyses)?;
                handle.flush()?;
            }
        }

        Ok(())
    }
}
