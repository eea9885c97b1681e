//! Sentence segmentation strategies
//!
//! Segmentation is injected into the [`Analyzer`](crate::Analyzer) at
//! construction time so a higher-quality boundary detector can be swapped in
//! without touching the metrics contract.

use regex::Regex;
use std::sync::OnceLock;

/// Strategy for splitting text into sentences.
///
/// Contract: whitespace-only input yields no sentences; any other input
/// yields at least one. Returned slices borrow from the input and keep their
/// terminal punctuation.
pub trait Segmenter: Send + Sync {
    /// Split `text` into ordered sentence slices.
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

/// Default heuristic segmenter.
///
/// Splits after a terminal mark (`.`, `!`, `?`) that is immediately followed
/// by whitespace. Abbreviations, decimals, and quoted dialogue mis-split;
/// that is an accepted limitation of the heuristic, not a bug.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicSegmenter;

impl HeuristicSegmenter {
    /// Create the default segmenter.
    pub fn new() -> Self {
        Self
    }
}

fn boundary_pattern() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| Regex::new(r"[.!?]\s+").expect("boundary pattern is valid"))
}

impl Segmenter for HeuristicSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let mut sentences = Vec::new();
        let mut start = 0;
        for boundary in boundary_pattern().find_iter(trimmed) {
            // Terminal marks are single-byte, so the sentence ends one byte
            // into the match.
            let end = boundary.start() + 1;
            sentences.push(&trimmed[start..end]);
            start = boundary.end();
        }
        if start < trimmed.len() {
            sentences.push(&trimmed[start..]);
        }

        sentences
    }
}
