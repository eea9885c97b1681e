//! Markdown validation report
//!
//! Assembles the chapter-level analysis into a reviewer-facing document:
//! scoring legend, overall summary with best/worst chapter callouts, a score
//! trend, a z-score outlier table, and a fixed appendix defining each
//! feature. Z-scores use the sample standard deviation (n - 1); with fewer
//! than two chapters, or a constant column, every z is 0 and no outliers are
//! reported.

use crate::ChapterAnalysis;
use anyhow::Result;
use legible_core::Metric;
use std::io::Write;

/// |z| above which a chapter counts as an outlier for a feature
const OUTLIER_THRESHOLD: f64 = 2.0;

/// Score above which an outlier is read as helping rather than hurting
const FRIENDLY_SCORE: f64 = 55.0;

/// Width of the trend bar column, in characters
const TREND_BAR_WIDTH: usize = 40;

/// Interpretation bands for the composite score
const SCORE_GUIDE: [&str; 5] = [
    "< 40 : Highly Challenging",
    "40-50 : Challenging",
    "50-55 : Dyslexia-Friendly",
    "55-60 : Highly Dyslexia-Friendly",
    "> 60 : Extremely Dyslexia-Friendly",
];

/// Fixed appendix describing each reported feature
const APPENDIX: [&str; 10] = [
    "Sentence Count - Total number of sentences in the chapter.",
    "Word Count - Total number of words.",
    "Unique Word Count - Distinct word forms; a variety indicator.",
    "Avg Sentence Length - Longer sentences often reduce readability.",
    "Avg Word Length - Longer words are harder to decode.",
    "Avg Syllables per Word - Higher syllable counts increase complexity.",
    "Passive Sentences - Indirect grammar is harder to follow.",
    "Rare/Abstract Words - Difficult to visualize or decode.",
    "Sensory Words - Support mental imagery and comprehension.",
    "Dyslexia-Friendly Score - Overall accessibility estimate (0-100).",
];

/// Write the full markdown report for one manuscript.
pub fn write_report<W: Write>(
    writer: &mut W,
    title: &str,
    author: Option<&str>,
    analyses: &[ChapterAnalysis],
) -> Result<()> {
    writeln!(writer, "# Readability Validation Report: {title}")?;
    writeln!(writer)?;
    if let Some(author) = author {
        writeln!(writer, "Author: {author}")?;
        writeln!(writer)?;
    }
    writeln!(writer, "*{} chapter(s) analyzed*", analyses.len())?;

    write_legend(writer)?;
    write_summary(writer, analyses)?;
    write_trend(writer, analyses)?;
    write_outliers(writer, analyses)?;
    write_appendix(writer)?;
    writer.flush()?;
    Ok(())
}

fn write_legend<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "## Dyslexia-Friendly Scoring Guide")?;
    writeln!(writer)?;
    for band in SCORE_GUIDE {
        writeln!(writer, "- {band}")?;
    }
    Ok(())
}

fn write_summary<W: Write>(writer: &mut W, analyses: &[ChapterAnalysis]) -> Result<()> {
    let scores: Vec<f64> = analyses.iter().map(|a| a.metrics.score()).collect();
    let average = mean(&scores);

    writeln!(writer)?;
    writeln!(writer, "## Summary")?;
    writeln!(writer)?;
    writeln!(writer, "**Overall Dyslexia-Friendly Score: {average:.2}**")?;
    writeln!(writer)?;

    // Most extreme non-score feature (by |z|) explains each callout.
    let z_by_metric = z_score_table(analyses);
    let lowest = position_of_min(&scores);
    let highest = position_of_max(&scores);

    writeln!(
        writer,
        "Lowest scoring chapter: {} with a score of {:.2}.{}",
        analyses[lowest].label,
        scores[lowest],
        driving_feature_clause(&z_by_metric, lowest, " contributed to difficulty")
    )?;
    writeln!(
        writer,
        "Highest scoring chapter: {} with a score of {:.2}.{}",
        analyses[highest].label,
        scores[highest],
        driving_feature_clause(&z_by_metric, highest, " helped readability")
    )?;
    Ok(())
}

fn write_trend<W: Write>(writer: &mut W, analyses: &[ChapterAnalysis]) -> Result<()> {
    let label_width = analyses
        .iter()
        .map(|a| a.label.chars().count())
        .max()
        .unwrap_or(0);
    let top = analyses
        .iter()
        .map(|a| a.metrics.score())
        .fold(0.0_f64, f64::max);

    writeln!(writer)?;
    writeln!(writer, "## Score Trend")?;
    writeln!(writer)?;
    writeln!(writer, "```text")?;
    for analysis in analyses {
        let score = analysis.metrics.score();
        let filled = if top > 0.0 {
            ((score / top) * TREND_BAR_WIDTH as f64).round().max(0.0) as usize
        } else {
            0
        };
        let filled = filled.min(TREND_BAR_WIDTH);
        writeln!(
            writer,
            "{:<label_width$}  |{}{}| {score:.2}",
            analysis.label,
            "#".repeat(filled),
            " ".repeat(TREND_BAR_WIDTH - filled),
        )?;
    }
    writeln!(writer, "```")?;
    Ok(())
}

fn write_outliers<W: Write>(writer: &mut W, analyses: &[ChapterAnalysis]) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "## Chapter Outlier Analysis")?;
    writeln!(writer)?;

    let z_by_metric = z_score_table(analyses);
    let mut any = false;
    for (index, analysis) in analyses.iter().enumerate() {
        let mut deviations = Vec::new();
        for (metric_index, metric) in Metric::ALL.iter().enumerate() {
            let z = z_by_metric[metric_index][index];
            if z.abs() > OUTLIER_THRESHOLD {
                let direction = if z > 0.0 { "high" } else { "low" };
                deviations.push(format!("{direction} {}", metric.label()));
            }
        }
        if !deviations.is_empty() {
            any = true;
            let impact = if analysis.metrics.score() > FRIENDLY_SCORE {
                "improve"
            } else {
                "reduce"
            };
            writeln!(
                writer,
                "- {} has outliers in: {}. These may {impact} the score.",
                analysis.label,
                deviations.join(", ")
            )?;
        }
    }
    if !any {
        writeln!(
            writer,
            "No chapter deviates more than {OUTLIER_THRESHOLD} standard deviations on any feature."
        )?;
    }
    Ok(())
}

fn write_appendix<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer)?;
    writeln!(writer, "## Appendix: Feature Definitions")?;
    writeln!(writer)?;
    for line in APPENDIX {
        writeln!(writer, "- {line}")?;
    }
    Ok(())
}

/// Z-scores per metric column: `table[metric_index][chapter_index]`.
fn z_score_table(analyses: &[ChapterAnalysis]) -> Vec<Vec<f64>> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let values: Vec<f64> = analyses
                .iter()
                .map(|a| a.metrics.get(metric).as_f64())
                .collect();
            z_scores(&values)
        })
        .collect()
}

/// The "High X"/"low X" clause naming the most deviant non-score feature of
/// one chapter, or an empty string when every feature sits at the mean.
fn driving_feature_clause(
    z_by_metric: &[Vec<f64>],
    chapter_index: usize,
    effect: &str,
) -> String {
    let mut best: Option<(Metric, f64)> = None;
    for (metric_index, &metric) in Metric::ALL.iter().enumerate() {
        if metric == Metric::Score {
            continue;
        }
        let z = z_by_metric[metric_index][chapter_index];
        if best.map_or(true, |(_, best_z)| z.abs() > best_z.abs()) {
            best = Some((metric, z));
        }
    }
    match best {
        Some((metric, z)) if z.abs() > f64::EPSILON => {
            let direction = if z > 0.0 { "High" } else { "Low" };
            format!(" {direction} {}{effect}.", metric.label())
        }
        _ => String::new(),
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1); 0 when fewer than two values.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Z-scores against the sample standard deviation; all zeros for constant or
/// single-value columns.
fn z_scores(values: &[f64]) -> Vec<f64> {
    let mean = mean(values);
    let std = sample_std(values, mean);
    if std == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - mean) / std).collect()
}

fn position_of_min(values: &[f64]) -> usize {
    let mut index = 0;
    for (i, value) in values.iter().enumerate() {
        if *value < values[index] {
            index = i;
        }
    }
    index
}

fn position_of_max(values: &[f64]) -> usize {
    let mut index = 0;
    for (i, value) in values.iter().enumerate() {
        if *value > values[index] {
            index = i;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use legible_core::analyze;

    fn chapter(label: &str, text: &str) -> ChapterAnalysis {
        ChapterAnalysis {
            label: label.to_string(),
            metrics: analyze(text),
        }
    }

    fn render(analyses: &[ChapterAnalysis]) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, "Test Book", Some("A. Author"), analyses).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_report_has_all_sections() {
        let out = render(&[
            chapter("Chapter 1", "Short words here. More short words."),
            chapter("Chapter 2", "The cold touch of the sweet sound."),
        ]);
        assert!(out.contains("# Readability Validation Report: Test Book"));
        assert!(out.contains("Author: A. Author"));
        assert!(out.contains("## Dyslexia-Friendly Scoring Guide"));
        assert!(out.contains("Overall Dyslexia-Friendly Score:"));
        assert!(out.contains("## Score Trend"));
        assert!(out.contains("## Chapter Outlier Analysis"));
        assert!(out.contains("## Appendix: Feature Definitions"));
    }

    #[test]
    fn test_single_chapter_has_no_outliers() {
        let out = render(&[chapter("Chapter 1", "Only one chapter of text.")]);
        assert!(out.contains("No chapter deviates"));
    }

    #[test]
    fn test_lowest_and_highest_callouts() {
        let easy = "The cat sat. The dog ran. It was fun.";
        let hard = "Institutional experimentation necessitates comprehensive \
                    organizational transformation and administration.";
        let out = render(&[chapter("Chapter 1", easy), chapter("Chapter 2", hard)]);
        assert!(out.contains("Lowest scoring chapter: Chapter 2"));
        assert!(out.contains("Highest scoring chapter: Chapter 1"));
    }

    #[test]
    fn test_mean_and_sample_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values);
        assert_eq!(m, 5.0);
        // Sample variance of this classic set is 32/7.
        let std = sample_std(&values, m);
        assert!((std - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_z_scores_of_constant_column_are_zero() {
        assert_eq!(z_scores(&[3.0, 3.0, 3.0]), vec![0.0, 0.0, 0.0]);
        assert_eq!(z_scores(&[3.0]), vec![0.0]);
    }

    #[test]
    fn test_trend_bars_scale_with_score() {
        let out = render(&[
            chapter("A", "Short and sweet. Very fun."),
            chapter("B", "Interminable administrative deliberation necessitates unquestionable comprehensiveness."),
        ]);
        let trend: Vec<&str> = out
            .lines()
            .skip_while(|line| !line.starts_with("```"))
            .take_while(|line| !line.ends_with("```") || line.starts_with("```text"))
            .collect();
        let bars_a = trend.iter().find(|l| l.starts_with("A")).unwrap();
        let bars_b = trend.iter().find(|l| l.starts_with("B")).unwrap();
        let count = |line: &str| line.chars().filter(|&c| c == '#').count();
        assert!(count(bars_a) > count(bars_b));
    }
}
