//! Scoring profile: weights and pivots for the composite score
//!
//! The default profile reproduces the reference formula exactly. A custom
//! profile can be loaded from a TOML `[scoring]` table, e.g.:
//!
//! ```toml
//! [weights]
//! sentence_length = 30.0
//! sensory = 10.0
//!
//! [pivots]
//! sentence_length = 20.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a scoring profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    /// Profile file could not be read
    #[error("failed to read profile: {0}")]
    Io(#[from] std::io::Error),

    /// Profile file is not valid TOML
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// Profile values are out of range
    #[error("invalid scoring profile: {0}")]
    Invalid(String),
}

/// Weight of each scoring dimension. The weights sum to 100 in the default
/// profile, which is what keeps the intended score range at 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Weight of the sentence-length penalty
    pub sentence_length: f64,
    /// Weight of the word-length penalty
    pub word_length: f64,
    /// Weight of the syllables-per-word penalty
    pub syllables: f64,
    /// Weight of the passive-voice penalty
    pub passive: f64,
    /// Weight of the sensory-language bonus
    pub sensory: f64,
    /// Weight of the rare-word penalty
    pub rare: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            sentence_length: 30.0,
            word_length: 15.0,
            syllables: 15.0,
            passive: 10.0,
            sensory: 10.0,
            rare: 20.0,
        }
    }
}

/// Pivot denominators: the averages at which each length penalty saturates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorePivots {
    /// Words per sentence at which the sentence-length penalty saturates
    pub sentence_length: f64,
    /// Characters per word at which the word-length penalty saturates
    pub word_length: f64,
    /// Syllables per word at which the syllables penalty saturates
    pub syllables: f64,
}

impl Default for ScorePivots {
    fn default() -> Self {
        Self {
            sentence_length: 20.0,
            word_length: 8.0,
            syllables: 3.0,
        }
    }
}

/// Complete scoring profile for an [`Analyzer`](crate::Analyzer).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisProfile {
    /// Dimension weights
    pub weights: ScoreWeights,
    /// Penalty saturation pivots
    pub pivots: ScorePivots,
}

impl AnalysisProfile {
    /// Parse a profile from TOML text and validate it.
    pub fn from_toml_str(toml_text: &str) -> Result<Self, ProfileError> {
        let profile: AnalysisProfile = toml::from_str(toml_text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Load and validate a profile from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProfileError> {
        let toml_text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&toml_text)
    }

    /// Check that all weights are finite and non-negative and all pivots are
    /// finite and positive.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let weights = [
            ("weights.sentence_length", self.weights.sentence_length),
            ("weights.word_length", self.weights.word_length),
            ("weights.syllables", self.weights.syllables),
            ("weights.passive", self.weights.passive),
            ("weights.sensory", self.weights.sensory),
            ("weights.rare", self.weights.rare),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::Invalid(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        let pivots = [
            ("pivots.sentence_length", self.pivots.sentence_length),
            ("pivots.word_length", self.pivots.word_length),
            ("pivots.syllables", self.pivots.syllables),
        ];
        for (name, value) in pivots {
            if !value.is_finite() || value <= 0.0 {
                return Err(ProfileError::Invalid(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        Ok(())
    }
}
