//! Engine contract tests: totality, fixed schema, heuristic scenarios, and
//! the recorded regression score.

use legible_core::{analyze, analyze_with_profile, AnalysisProfile, Analyzer, Metric, Sense};
use proptest::prelude::*;

#[test]
fn test_all_keys_present_and_numeric_for_any_text() {
    for text in [
        "Plain sentence.",
        "no terminal punctuation",
        "Multi. Sentence! Text? Here.",
        "数字 und naïve café",
    ] {
        let record = analyze(text);
        for metric in Metric::ALL {
            assert!(
                record.get(metric).as_f64().is_finite(),
                "{} not finite for {text:?}",
                metric.label()
            );
        }
    }
}

#[test]
fn test_empty_and_whitespace_input_do_not_fail() {
    for text in ["", "   "] {
        let record = analyze(text);
        assert_eq!(record.sentence_count(), 0);
        assert_eq!(record.word_count(), 0);
        assert_eq!(record.passive_ratio(), 0.0);
        assert_eq!(record.sensory_ratio(), 0.0);
        assert_eq!(record.rare_word_ratio(), 0.0);
        for metric in Metric::ALL {
            assert!(!record.get(metric).as_f64().is_nan());
        }
    }
}

#[test]
fn test_sentence_length_clamp_yields_exactly_zero_term() {
    // One sentence of n one-letter words; every term except sentence length
    // is identical across the three texts.
    let one_sentence = |n: usize| format!("{}.", vec!["a"; n].join(" "));

    let at_pivot = analyze(&one_sentence(20));
    let extreme = analyze(&one_sentence(1000));
    assert_eq!(extreme.sentence_count(), 1);
    assert_eq!(extreme.avg_sentence_length(), 1000.0);

    // At 1000 words per sentence the term is exactly 0, same as at the
    // 20-word pivot; it never goes negative.
    assert_eq!(extreme.score(), at_pivot.score());

    let below_pivot = analyze(&one_sentence(19));
    assert!(below_pivot.score() > extreme.score());
}

#[test]
fn test_passive_detector_scenario() {
    let record = analyze("The ball was thrown. It was kicked.");
    assert_eq!(record.passive_count(), 2);
    assert_eq!(record.sentence_count(), 2);
    assert_eq!(record.passive_ratio(), 1.0);
}

#[test]
fn test_sensory_scenario_contributes_positively() {
    let text = "I could see the bright light and feel the cold touch.";
    let record = analyze(text);
    assert!(record.sensory().get(Sense::Sight) > 0);
    assert!(record.sensory().get(Sense::Touch) > 0);
    assert!(record.sensory_ratio() > 0.0);

    // Strip the sensory words; the score must drop.
    let flat = "I could note the bright item and notice the hard part.";
    let flat_record = analyze(flat);
    assert!(record.sensory_ratio() > flat_record.sensory_ratio());
}

#[test]
fn test_rare_word_scenario_lowers_score() {
    let record = analyze("This demonstrates determination and commitment.");
    // determination (ion), commitment (ment), demonstrates (12 chars).
    assert_eq!(record.rare_word_count(), 3);
    assert!(record.rare_word_ratio() > 0.0);

    let plain = analyze("This shows great effort and care.");
    assert_eq!(plain.rare_word_count(), 0);
    assert!(plain.score() > record.score());
}

#[test]
fn test_regression_fixture_score() {
    // Recorded reference: 3 sentences, 14 words, 47 chars, 15 syllable
    // groups, 1 passive ("was scared"), 1 sensory ("cold"), 0 rare.
    // Exact score 23093/336 = 68.7291666... -> 68.73.
    let text = "The cat sat on the mat. The dog was scared. The night was cold.";
    let record = analyze(text);

    assert_eq!(record.sentence_count(), 3);
    assert_eq!(record.word_count(), 14);
    assert_eq!(record.unique_word_count(), 10);
    assert_eq!(record.passive_count(), 1);
    assert_eq!(record.rare_word_count(), 0);
    assert_eq!(record.sensory_count(), 1);
    assert_eq!(record.score(), 68.73);
}

#[test]
fn test_custom_profile_changes_only_the_score() {
    let text = "The cat sat on the mat. The dog was scared. The night was cold.";
    let mut profile = AnalysisProfile::default();
    profile.weights.sensory = 0.0;

    let default_record = analyze(text);
    let custom_record = analyze_with_profile(text, profile);

    // Counts and averages are profile-independent.
    assert_eq!(custom_record.word_count(), default_record.word_count());
    assert_eq!(custom_record.sensory_count(), default_record.sensory_count());
    // Dropping the sensory bonus leaves 22853/336 = 68.0148... -> 68.01.
    assert_eq!(custom_record.score(), 68.01);
}

proptest! {
    #[test]
    fn prop_analyze_is_total(text in ".*") {
        let record = analyze(&text);
        for metric in Metric::ALL {
            prop_assert!(record.get(metric).as_f64().is_finite());
        }
    }

    #[test]
    fn prop_analyze_is_idempotent(text in ".{0,400}") {
        let analyzer = Analyzer::new();
        let first = analyzer.analyze(&text);
        let second = analyzer.analyze(&text);
        // Bit-identical output, floats included.
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_nonempty_text_has_at_least_one_sentence(text in "[a-zA-Z ]*[a-zA-Z][a-zA-Z ]*") {
        let record = analyze(&text);
        prop_assert!(record.sentence_count() >= 1);
    }

    #[test]
    fn prop_unique_words_never_exceed_words(text in ".{0,400}") {
        let record = analyze(&text);
        prop_assert!(record.unique_word_count() <= record.word_count());
        prop_assert!(record.rare_word_count() <= record.word_count());
    }
}
