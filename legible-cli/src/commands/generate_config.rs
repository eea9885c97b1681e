//! Generate-config command implementation

use crate::config::{CliConfig, DEFAULT_CONFIG_FILE};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Where to write the template
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists; pass --force to overwrite",
                self.output.display()
            );
        }

        fs::write(&self.output, CliConfig::template())
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        println!(
            "Configuration template generated successfully: {}",
            self.output.display()
        );
        Ok(())
    }
}
