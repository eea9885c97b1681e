//! The metrics record: the engine's sole output type
//!
//! A [`MetricsRecord`] is an ordered mapping from a fixed metric set to
//! numeric values. Every key is always present, even for empty input; ratio
//! denominators are guarded so degenerate text yields zeros, never NaN.
//!
//! The canonical schema is the ten keys of [`Metric::ALL`]. The per-sense
//! breakdown ([`SensoryCounts`]) rides along as a structured extension and is
//! not part of the canonical column set.

use crate::sensory::SensoryCounts;
use serde::Serialize;
use std::fmt;

/// The fixed metric set, in canonical reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Number of sentences
    SentenceCount,
    /// Number of words
    WordCount,
    /// Number of distinct lowercased word forms
    UniqueWordCount,
    /// Words per sentence
    AvgSentenceLength,
    /// Characters per word
    AvgWordLength,
    /// Estimated syllables per word
    AvgSyllablesPerWord,
    /// Passive constructions detected
    PassiveSentences,
    /// Rare/abstract words detected
    RareWords,
    /// Sensory vocabulary occurrences
    SensoryWords,
    /// The composite readability score
    Score,
}

impl Metric {
    /// All metrics, in canonical reporting order.
    pub const ALL: [Metric; 10] = [
        Metric::SentenceCount,
        Metric::WordCount,
        Metric::UniqueWordCount,
        Metric::AvgSentenceLength,
        Metric::AvgWordLength,
        Metric::AvgSyllablesPerWord,
        Metric::PassiveSentences,
        Metric::RareWords,
        Metric::SensoryWords,
        Metric::Score,
    ];

    /// Column label used in tables, CSV headers, and reports.
    pub fn label(self) -> &'static str {
        match self {
            Metric::SentenceCount => "Sentence Count",
            Metric::WordCount => "Word Count",
            Metric::UniqueWordCount => "Unique Word Count",
            Metric::AvgSentenceLength => "Avg Sentence Length",
            Metric::AvgWordLength => "Avg Word Length",
            Metric::AvgSyllablesPerWord => "Avg Syllables per Word",
            Metric::PassiveSentences => "Passive Sentences",
            Metric::RareWords => "Rare/Abstract Words",
            Metric::SensoryWords => "Sensory Words",
            Metric::Score => "Dyslexia-Friendly Score",
        }
    }

    /// Whether this metric carries an integer count.
    pub fn is_count(self) -> bool {
        matches!(
            self,
            Metric::SentenceCount
                | Metric::WordCount
                | Metric::UniqueWordCount
                | Metric::PassiveSentences
                | Metric::RareWords
                | Metric::SensoryWords
        )
    }
}

/// A single metric value: an integer count or a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Integer-valued metric
    Count(usize),
    /// Float-valued metric
    Value(f64),
}

impl MetricValue {
    /// The value as a float, for statistics over mixed columns.
    pub fn as_f64(self) -> f64 {
        match self {
            MetricValue::Count(n) => n as f64,
            MetricValue::Value(v) => v,
        }
    }
}

impl fmt::Display for MetricValue {
    /// Counts render as integers; floats render to two decimal places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Value(v) => write!(f, "{v:.2}"),
        }
    }
}

/// Readability metrics for one unit of text.
///
/// Constructed fresh per [`Analyzer::analyze`](crate::Analyzer::analyze)
/// call, immutable afterwards, owns no resources. Serializes to the canonical
/// ten-key mapping in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRecord {
    #[serde(rename = "Sentence Count")]
    pub(crate) sentence_count: usize,
    #[serde(rename = "Word Count")]
    pub(crate) word_count: usize,
    #[serde(rename = "Unique Word Count")]
    pub(crate) unique_word_count: usize,
    #[serde(rename = "Avg Sentence Length")]
    pub(crate) avg_sentence_length: f64,
    #[serde(rename = "Avg Word Length")]
    pub(crate) avg_word_length: f64,
    #[serde(rename = "Avg Syllables per Word")]
    pub(crate) avg_syllables_per_word: f64,
    #[serde(rename = "Passive Sentences")]
    pub(crate) passive_count: usize,
    #[serde(rename = "Rare/Abstract Words")]
    pub(crate) rare_word_count: usize,
    #[serde(rename = "Sensory Words")]
    pub(crate) sensory_count: usize,
    #[serde(rename = "Dyslexia-Friendly Score")]
    pub(crate) score: f64,
    #[serde(skip)]
    pub(crate) sensory: SensoryCounts,
}

impl MetricsRecord {
    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of distinct lowercased word forms. Reported, not scored.
    pub fn unique_word_count(&self) -> usize {
        self.unique_word_count
    }

    /// Mean words per sentence.
    pub fn avg_sentence_length(&self) -> f64 {
        self.avg_sentence_length
    }

    /// Mean characters per word.
    pub fn avg_word_length(&self) -> f64 {
        self.avg_word_length
    }

    /// Mean estimated syllables per word.
    pub fn avg_syllables_per_word(&self) -> f64 {
        self.avg_syllables_per_word
    }

    /// Passive constructions detected in the whole text.
    pub fn passive_count(&self) -> usize {
        self.passive_count
    }

    /// Rare/abstract words detected.
    pub fn rare_word_count(&self) -> usize {
        self.rare_word_count
    }

    /// Total sensory vocabulary occurrences.
    pub fn sensory_count(&self) -> usize {
        self.sensory_count
    }

    /// The composite score, rounded to two decimal places.
    ///
    /// Intended range is 0-100 but the value is not clamped: each penalty
    /// term is capped at its weight, while the sensory bonus is unbounded, so
    /// pathological sensory density can push the score above 100.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Per-sense breakdown of the sensory count.
    pub fn sensory(&self) -> &SensoryCounts {
        &self.sensory
    }

    /// Passive constructions per sentence (0 when there are no sentences).
    pub fn passive_ratio(&self) -> f64 {
        self.passive_count as f64 / self.sentence_count.max(1) as f64
    }

    /// Sensory occurrences per word (0 when there are no words).
    pub fn sensory_ratio(&self) -> f64 {
        self.sensory_count as f64 / self.word_count.max(1) as f64
    }

    /// Rare words per word (0 when there are no words).
    pub fn rare_word_ratio(&self) -> f64 {
        self.rare_word_count as f64 / self.word_count.max(1) as f64
    }

    /// The value for one metric. Every metric always has a value.
    pub fn get(&self, metric: Metric) -> MetricValue {
        match metric {
            Metric::SentenceCount => MetricValue::Count(self.sentence_count),
            Metric::WordCount => MetricValue::Count(self.word_count),
            Metric::UniqueWordCount => MetricValue::Count(self.unique_word_count),
            Metric::AvgSentenceLength => MetricValue::Value(self.avg_sentence_length),
            Metric::AvgWordLength => MetricValue::Value(self.avg_word_length),
            Metric::AvgSyllablesPerWord => MetricValue::Value(self.avg_syllables_per_word),
            Metric::PassiveSentences => MetricValue::Count(self.passive_count),
            Metric::RareWords => MetricValue::Count(self.rare_word_count),
            Metric::SensoryWords => MetricValue::Count(self.sensory_count),
            Metric::Score => MetricValue::Value(self.score),
        }
    }

    /// Iterate `(metric, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, MetricValue)> + '_ {
        Metric::ALL.iter().map(move |&metric| (metric, self.get(metric)))
    }
}
