//! Composite score computation
//!
//! One canonical formula: a weighted blend of three saturating length
//! penalties, two ratio penalties, and one ratio bonus, rounded to two
//! decimal places. Each penalty term is capped at its weight by the
//! `min(x / pivot, 1)` clamp, but the ratio inputs themselves are not
//! pre-clamped to [0, 1], and the final score is deliberately left
//! unclamped: a pathological sensory ratio can push it above 100.

use crate::profile::AnalysisProfile;

/// The derived ratios and averages the composite score is computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs {
    /// Mean words per sentence
    pub avg_sentence_length: f64,
    /// Mean characters per word
    pub avg_word_length: f64,
    /// Mean estimated syllables per word
    pub avg_syllables_per_word: f64,
    /// Passive constructions per sentence
    pub passive_ratio: f64,
    /// Sensory occurrences per word
    pub sensory_ratio: f64,
    /// Rare words per word
    pub rare_word_ratio: f64,
}

/// `1 - min(value / pivot, 1)`: full credit at zero, none at the pivot.
fn saturating_penalty(value: f64, pivot: f64) -> f64 {
    1.0 - (value / pivot).min(1.0)
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute the composite score for `inputs` under `profile`.
pub fn composite(profile: &AnalysisProfile, inputs: &ScoreInputs) -> f64 {
    let weights = &profile.weights;
    let pivots = &profile.pivots;

    let score = weights.sentence_length
        * saturating_penalty(inputs.avg_sentence_length, pivots.sentence_length)
        + weights.word_length * saturating_penalty(inputs.avg_word_length, pivots.word_length)
        + weights.syllables * saturating_penalty(inputs.avg_syllables_per_word, pivots.syllables)
        + weights.passive * (1.0 - inputs.passive_ratio)
        + weights.sensory * inputs.sensory_ratio
        + weights.rare * (1.0 - inputs.rare_word_ratio);

    round2(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> ScoreInputs {
        ScoreInputs {
            avg_sentence_length: 0.0,
            avg_word_length: 0.0,
            avg_syllables_per_word: 0.0,
            passive_ratio: 0.0,
            sensory_ratio: 0.0,
            rare_word_ratio: 0.0,
        }
    }

    #[test]
    fn test_zero_inputs_score_ninety() {
        // All penalties at full credit, no sensory bonus: 30+15+15+10+0+20.
        let score = composite(&AnalysisProfile::default(), &inputs());
        assert_eq!(score, 90.0);
    }

    #[test]
    fn test_sentence_length_term_saturates_at_pivot() {
        let profile = AnalysisProfile::default();
        let at_pivot = composite(
            &profile,
            &ScoreInputs {
                avg_sentence_length: 20.0,
                ..inputs()
            },
        );
        let far_past_pivot = composite(
            &profile,
            &ScoreInputs {
                avg_sentence_length: 1000.0,
                ..inputs()
            },
        );
        // The term is exactly zero at and beyond the pivot, never negative.
        assert_eq!(at_pivot, 60.0);
        assert_eq!(far_past_pivot, 60.0);
    }

    #[test]
    fn test_sentence_length_term_is_strictly_monotonic_below_pivot() {
        let profile = AnalysisProfile::default();
        let mut previous = f64::INFINITY;
        for words_per_sentence in [1.0, 5.0, 10.0, 15.0, 19.5] {
            let score = composite(
                &profile,
                &ScoreInputs {
                    avg_sentence_length: words_per_sentence,
                    ..inputs()
                },
            );
            assert!(score < previous, "score did not decrease at {words_per_sentence}");
            previous = score;
        }
    }

    #[test]
    fn test_sensory_bonus_is_unbounded() {
        // A sensory ratio over 1 is not pre-clamped; score can exceed 100.
        let score = composite(
            &AnalysisProfile::default(),
            &ScoreInputs {
                sensory_ratio: 2.0,
                ..inputs()
            },
        );
        assert_eq!(score, 110.0);
    }

    #[test]
    fn test_passive_ratio_above_one_goes_negative_for_its_term() {
        // passive_ratio is not pre-clamped either; 2.0 costs twice the weight.
        let score = composite(
            &AnalysisProfile::default(),
            &ScoreInputs {
                passive_ratio: 2.0,
                ..inputs()
            },
        );
        assert_eq!(score, 70.0);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let score = composite(
            &AnalysisProfile::default(),
            &ScoreInputs {
                rare_word_ratio: 1.0 / 3.0,
                ..inputs()
            },
        );
        // 90 - 20/3 = 83.333... rounds to 83.33.
        assert_eq!(score, 83.33);
    }

    #[test]
    fn test_custom_weights_shift_the_blend() {
        let mut profile = AnalysisProfile::default();
        profile.weights.sensory = 0.0;
        let score = composite(
            &profile,
            &ScoreInputs {
                sensory_ratio: 5.0,
                ..inputs()
            },
        );
        assert_eq!(score, 90.0);
    }
}
