//! Configuration module
//!
//! One TOML file (`legible.toml`) with `[output]`, `[manuscript]`, and
//! `[scoring]` sections. An explicit `--config` path wins; otherwise
//! `./legible.toml` is used when present, else defaults.

use crate::error::CliError;
use anyhow::{Context, Result};
use legible_core::AnalysisProfile;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "legible.toml";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Output configuration
    pub output: OutputConfig,

    /// Manuscript marker configuration
    pub manuscript: ManuscriptMarkers,

    /// Scoring profile (weights and pivots)
    pub scoring: AnalysisProfile,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (table, csv, json)
    pub default_format: String,

    /// Include per-sense columns by default
    pub include_senses: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "table".to_string(),
            include_senses: false,
        }
    }
}

/// Structural marker strings for manuscript parsing
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ManuscriptMarkers {
    /// Line that opens the analyzable body
    pub start: String,
    /// Line that closes the analyzable body
    pub end: String,
    /// Prefix of chapter heading lines
    pub chapter_prefix: String,
    /// Prefix of the title metadata line
    pub title_prefix: String,
    /// Prefix of the author metadata line
    pub author_prefix: String,
}

impl Default for ManuscriptMarkers {
    fn default() -> Self {
        Self {
            start: "### START".to_string(),
            end: "### END".to_string(),
            chapter_prefix: "### CHAPTER".to_string(),
            title_prefix: "### Title:".to_string(),
            author_prefix: "### Author:".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration: the explicit path if given, else
    /// [`DEFAULT_CONFIG_FILE`] when present, else defaults. The scoring
    /// section is validated on load.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    log::debug!("Using {DEFAULT_CONFIG_FILE} from working directory");
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config
            .scoring
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Parse a configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = toml::from_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }

    /// The commented template written by `legible generate-config`.
    pub fn template() -> &'static str {
        r####"# legible configuration

[output]
# Output format for `legible analyze`: table, csv, or json
default_format = "table"
# Append per-sense columns (sight, sound, touch, smell, taste)
include_senses = false

[manuscript]
# Structural markers recognized in --manuscript mode
start = "### START"
end = "### END"
chapter_prefix = "### CHAPTER"
title_prefix = "### Title:"
author_prefix = "### Author:"

# Scoring weights and pivots. The defaults reproduce the reference formula;
# weights must be non-negative and pivots positive.
[scoring.weights]
sentence_length = 30.0
word_length = 15.0
syllables = 15.0
passive = 10.0
sensory = 10.0
rare = 20.0

[scoring.pivots]
sentence_length = 20.0
word_length = 8.0
syllables = 3.0
"####
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.output.default_format, "table");
        assert!(!config.output.include_senses);
        assert_eq!(config.manuscript.start, "### START");
        assert_eq!(config.scoring, AnalysisProfile::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(
            &path,
            "[output]\ndefault_format = \"csv\"\n\n[manuscript]\nstart = \"-- BEGIN\"\n",
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output.default_format, "csv");
        assert_eq!(config.manuscript.start, "-- BEGIN");
        // Untouched sections keep defaults.
        assert_eq!(config.manuscript.end, "### END");
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let result = CliConfig::load(Some(Path::new("/nonexistent/legible.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_scoring_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[scoring.weights]\nsensory = -3.0\n").unwrap();

        let err = CliConfig::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let config: CliConfig = toml::from_str(CliConfig::template()).unwrap();
        assert_eq!(config.output.default_format, "table");
        assert_eq!(config.scoring, AnalysisProfile::default());
        assert_eq!(config.manuscript.chapter_prefix, "### CHAPTER");
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[output\ndefault_format = ").unwrap();

        let err = CliConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }
}
