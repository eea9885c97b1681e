//! Passive-voice heuristic

use regex::Regex;
use std::sync::OnceLock;

fn passive_pattern() -> &'static Regex {
    static PASSIVE: OnceLock<Regex> = OnceLock::new();
    PASSIVE.get_or_init(|| {
        Regex::new(r"\b(?:is|was|were|been|being|are|am|be)\b\s+\w+ed\b")
            .expect("passive pattern is valid")
    })
}

/// Count passive constructions in `text`: a be-verb token immediately
/// followed by whitespace and a token ending in `ed`.
///
/// Matching is case-sensitive and runs over the whole text, not
/// per-sentence. Past-participle adjectives ("was excited") false-positive;
/// documented limitation.
pub fn count_passive(text: &str) -> usize {
    passive_pattern().find_iter(text).count()
}
