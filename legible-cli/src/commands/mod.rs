//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use legible_core::{Metric, Sense};

pub mod analyze;
pub mod generate_config;
pub mod report;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze documents or manuscripts chapter by chapter
    Analyze(analyze::AnalyzeArgs),

    /// Generate a markdown validation report for a manuscript
    Report(report::ReportArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the reported metrics
    Metrics,

    /// List the sensory vocabularies
    Senses,

    /// List available output formats
    Formats,
}

/// Execute a list subcommand
pub fn run_list(subcommand: &ListCommands) -> Result<()> {
    match subcommand {
        ListCommands::Metrics => {
            for metric in Metric::ALL {
                let kind = if metric.is_count() { "count" } else { "float" };
                println!("{} ({kind})", metric.label());
            }
        }
        ListCommands::Senses => {
            for sense in Sense::ALL {
                println!("{}: {}", sense.label(), sense.vocabulary().join(", "));
            }
        }
        ListCommands::Formats => {
            println!("table - aligned text table, one row per chapter");
            println!("csv - flat rows with the canonical column header");
            println!("json - pretty array of labeled metric records");
        }
    }
    Ok(())
}

/// Initialize logging from the shared `--quiet`/`--verbose` flags
pub fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_list_variants() {
        assert!(run_list(&ListCommands::Metrics).is_ok());
        assert!(run_list(&ListCommands::Senses).is_ok());
        assert!(run_list(&ListCommands::Formats).is_ok());
    }
}
