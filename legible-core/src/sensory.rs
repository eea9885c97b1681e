//! Sensory vocabulary tables and density counting

use serde::{Deserialize, Serialize};

/// The five senses tracked by the sensory-language tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sense {
    /// Visual vocabulary
    Sight,
    /// Auditory vocabulary
    Sound,
    /// Tactile vocabulary
    Touch,
    /// Olfactory vocabulary
    Smell,
    /// Gustatory vocabulary
    Taste,
}

const SIGHT_WORDS: [&str; 7] = ["look", "see", "glance", "watch", "glow", "color", "shine"];
const SOUND_WORDS: [&str; 6] = ["hear", "sound", "ring", "roar", "echo", "clang"];
const TOUCH_WORDS: [&str; 6] = ["feel", "touch", "warm", "cold", "rough", "smooth"];
const SMELL_WORDS: [&str; 4] = ["smell", "scent", "odor", "fragrance"];
const TASTE_WORDS: [&str; 4] = ["taste", "flavor", "bitter", "sweet"];

impl Sense {
    /// All senses, in reporting order.
    pub const ALL: [Sense; 5] = [
        Sense::Sight,
        Sense::Sound,
        Sense::Touch,
        Sense::Smell,
        Sense::Taste,
    ];

    /// Human-readable label used in tables and reports.
    pub fn label(self) -> &'static str {
        match self {
            Sense::Sight => "Sight",
            Sense::Sound => "Sound",
            Sense::Touch => "Touch",
            Sense::Smell => "Smell",
            Sense::Taste => "Taste",
        }
    }

    /// The closed vocabulary for this sense.
    pub fn vocabulary(self) -> &'static [&'static str] {
        match self {
            Sense::Sight => &SIGHT_WORDS,
            Sense::Sound => &SOUND_WORDS,
            Sense::Touch => &TOUCH_WORDS,
            Sense::Smell => &SMELL_WORDS,
            Sense::Taste => &TASTE_WORDS,
        }
    }
}

/// Per-sense occurrence counts for one unit of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensoryCounts {
    /// Occurrences of sight vocabulary
    pub sight: usize,
    /// Occurrences of sound vocabulary
    pub sound: usize,
    /// Occurrences of touch vocabulary
    pub touch: usize,
    /// Occurrences of smell vocabulary
    pub smell: usize,
    /// Occurrences of taste vocabulary
    pub taste: usize,
}

impl SensoryCounts {
    /// Count for one sense.
    pub fn get(&self, sense: Sense) -> usize {
        match sense {
            Sense::Sight => self.sight,
            Sense::Sound => self.sound,
            Sense::Touch => self.touch,
            Sense::Smell => self.smell,
            Sense::Taste => self.taste,
        }
    }

    /// Sum across all senses.
    pub fn total(&self) -> usize {
        Sense::ALL.iter().map(|&sense| self.get(sense)).sum()
    }

    /// Iterate `(sense, count)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Sense, usize)> + '_ {
        Sense::ALL.iter().map(move |&sense| (sense, self.get(sense)))
    }
}

/// Count case-insensitive sensory-vocabulary occurrences in `text`.
///
/// Occurrences are substring matches, not token matches: "cold" matches
/// inside "scold". This mirrors the reference behavior and is part of the
/// numeric contract; switching to token matching would change every
/// downstream score.
pub fn count_sensory(text: &str) -> SensoryCounts {
    let lowered = text.to_lowercase();
    let count_for = |sense: Sense| {
        sense
            .vocabulary()
            .iter()
            .map(|word| lowered.matches(word).count())
            .sum()
    };

    SensoryCounts {
        sight: count_for(Sense::Sight),
        sound: count_for(Sense::Sound),
        touch: count_for(Sense::Touch),
        smell: count_for(Sense::Smell),
        taste: count_for(Sense::Taste),
    }
}
