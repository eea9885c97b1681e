//! Prose readability metrics behind the Dyslexia-Friendly Score
//!
//! This crate turns a unit of prose (a chapter, a whole document) into a
//! fixed record of readability metrics and a composite 0-100-ish score. The
//! pipeline is pure and total: sentence segmentation, word tokenization,
//! per-word statistics, ratio derivation, and a weighted score. Every call
//! returns a complete record; empty input yields zero counts and ratios,
//! never an error.
//!
//! All of the linguistics here is deliberately heuristic. The segmenter
//! mis-splits abbreviations, the syllable counter is a vowel-group estimate,
//! and the passive detector false-positives on participial adjectives. Those
//! limitations are part of the numeric contract, not bugs to fix with a
//! heavier parser.
//!
//! ```
//! use legible_core::analyze;
//!
//! let record = analyze("The ball was thrown. It was kicked.");
//! assert_eq!(record.sentence_count(), 2);
//! assert_eq!(record.passive_count(), 2);
//! ```

#![warn(missing_docs)]

pub mod passive;
pub mod profile;
pub mod record;
pub mod score;
pub mod segmenter;
pub mod sensory;
pub mod tokens;

use std::collections::HashSet;

pub use profile::{AnalysisProfile, ProfileError, ScorePivots, ScoreWeights};
pub use record::{Metric, MetricValue, MetricsRecord};
pub use score::ScoreInputs;
pub use segmenter::{HeuristicSegmenter, Segmenter};
pub use sensory::{Sense, SensoryCounts};

/// The text metrics engine.
///
/// Stateless between calls and `Send + Sync`, so chapter batches can be
/// analyzed in parallel against one shared instance. The segmentation
/// strategy is injected at construction; the default is the regex heuristic.
pub struct Analyzer {
    segmenter: Box<dyn Segmenter>,
    profile: AnalysisProfile,
}

impl Analyzer {
    /// Create an analyzer with the default segmenter and scoring profile.
    pub fn new() -> Self {
        Self::with_profile(AnalysisProfile::default())
    }

    /// Create an analyzer with a custom scoring profile.
    pub fn with_profile(profile: AnalysisProfile) -> Self {
        Self {
            segmenter: Box::new(HeuristicSegmenter::new()),
            profile,
        }
    }

    /// Create an analyzer with a custom segmentation strategy.
    pub fn with_segmenter(segmenter: Box<dyn Segmenter>) -> Self {
        Self {
            segmenter,
            profile: AnalysisProfile::default(),
        }
    }

    /// The scoring profile in use.
    pub fn profile(&self) -> &AnalysisProfile {
        &self.profile
    }

    /// Analyze one unit of text.
    ///
    /// Pure and total: no side effects, no panics, a complete record for any
    /// input including the empty string.
    pub fn analyze(&self, text: &str) -> MetricsRecord {
        let sentence_count = self.segmenter.segment(text).len();

        let mut word_count = 0usize;
        let mut char_total = 0usize;
        let mut syllable_total = 0usize;
        let mut rare_word_count = 0usize;
        let mut seen = HashSet::new();
        for word in tokens::words(text) {
            word_count += 1;
            char_total += word.chars().count();
            syllable_total += tokens::syllable_estimate(word);
            if tokens::is_rare(word) {
                rare_word_count += 1;
            }
            seen.insert(word.to_lowercase());
        }
        let unique_word_count = seen.len();

        let avg_word_length = mean(char_total, word_count);
        let avg_syllables_per_word = mean(syllable_total, word_count);
        let avg_sentence_length = word_count as f64 / sentence_count.max(1) as f64;

        let passive_count = passive::count_passive(text);
        let sensory = sensory::count_sensory(text);
        let sensory_count = sensory.total();

        let inputs = ScoreInputs {
            avg_sentence_length,
            avg_word_length,
            avg_syllables_per_word,
            passive_ratio: passive_count as f64 / sentence_count.max(1) as f64,
            sensory_ratio: sensory_count as f64 / word_count.max(1) as f64,
            rare_word_ratio: rare_word_count as f64 / word_count.max(1) as f64,
        };
        let score = score::composite(&self.profile, &inputs);

        MetricsRecord {
            sentence_count,
            word_count,
            unique_word_count,
            avg_sentence_length,
            avg_word_length,
            avg_syllables_per_word,
            passive_count,
            rare_word_count,
            sensory_count,
            score,
            sensory,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Average of a total over a count, 0 when the count is 0.
fn mean(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Analyze text with the default analyzer.
pub fn analyze(text: &str) -> MetricsRecord {
    Analyzer::new().analyze(text)
}

/// Analyze text under a custom scoring profile.
pub fn analyze_with_profile(text: &str, profile: AnalysisProfile) -> MetricsRecord {
    Analyzer::with_profile(profile).analyze(text)
}
