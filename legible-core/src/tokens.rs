//! Word tokenization and per-word lexical heuristics

use regex::Regex;
use std::sync::OnceLock;

/// Suffixes that mark a word as rare/abstract regardless of length.
pub const RARE_SUFFIXES: [&str; 3] = ["ion", "ity", "ment"];

/// Character length above which a word counts as rare/abstract.
pub const RARE_LENGTH: usize = 10;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\w+").expect("word pattern is valid"))
}

/// Iterate over the words of `text`: maximal runs of Unicode word characters.
/// Punctuation-only tokens never appear.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    word_pattern().find_iter(text).map(|m| m.as_str())
}

/// Estimate the syllable count of a word as the number of maximal vowel-group
/// runs (`a`, `e`, `i`, `o`, `u`, `y`) in its lowercased form.
///
/// A crude, English-specific heuristic; "queue" counts 2, "rhythm" counts 1.
pub fn syllable_estimate(word: &str) -> usize {
    let mut runs = 0;
    let mut in_run = false;
    for ch in word.chars() {
        let vowel = matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_run {
            runs += 1;
        }
        in_run = vowel;
    }
    runs
}

/// Whether a word counts as rare/abstract: lowercased length over
/// [`RARE_LENGTH`] characters, or one of the [`RARE_SUFFIXES`].
pub fn is_rare(word: &str) -> bool {
    let lowered = word.to_lowercase();
    lowered.chars().count() > RARE_LENGTH
        || RARE_SUFFIXES.iter().any(|suffix| lowered.ends_with(suffix))
}
