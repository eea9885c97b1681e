//! Aligned text table formatter

use super::{sense_header, AnalysisWriter};
use crate::ChapterAnalysis;
use anyhow::Result;
use legible_core::{Metric, Sense};
use std::io::Write;

/// Table formatter - one aligned row per analyzed unit
///
/// Rows are buffered until [`finish`](AnalysisWriter::finish) so column
/// widths can be computed over the whole batch.
pub struct TableFormatter<W: Write> {
    writer: W,
    include_senses: bool,
    rows: Vec<Vec<String>>,
}

impl<W: Write> TableFormatter<W> {
    /// Create a new table formatter
    pub fn new(writer: W, include_senses: bool) -> Self {
        Self {
            writer,
            include_senses,
            rows: Vec::new(),
        }
    }

    fn headers(&self) -> Vec<String> {
        let mut headers = vec!["Chapter".to_string()];
        headers.extend(Metric::ALL.iter().map(|metric| metric.label().to_string()));
        if self.include_senses {
            headers.extend(Sense::ALL.iter().map(|&sense| sense_header(sense)));
        }
        headers
    }
}

impl<W: Write> AnalysisWriter for TableFormatter<W> {
    fn write_record(&mut self, analysis: &ChapterAnalysis) -> Result<()> {
        let mut row = vec![analysis.label.clone()];
        row.extend(analysis.metrics.iter().map(|(_, value)| value.to_string()));
        if self.include_senses {
            row.extend(
                analysis
                    .metrics
                    .sensory()
                    .iter()
                    .map(|(_, count)| count.to_string()),
            );
        }
        self.rows.push(row);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let headers = self.headers();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(&mut self.writer, &headers, &widths, true)?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        write_row(&mut self.writer, &rule, &widths, true)?;
        for row in &self.rows {
            write_row(&mut self.writer, row, &widths, false)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Write one row; the label column is left-aligned, values right-aligned.
fn write_row<W: Write>(
    writer: &mut W,
    cells: &[String],
    widths: &[usize],
    left_align_all: bool,
) -> Result<()> {
    let mut parts = Vec::with_capacity(cells.len());
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        let pad = width.saturating_sub(cell.chars().count());
        if left_align_all || i == 0 {
            parts.push(format!("{cell}{}", " ".repeat(pad)));
        } else {
            parts.push(format!("{}{cell}", " ".repeat(pad)));
        }
    }
    writeln!(writer, "{}", parts.join("  ").trim_end())?;
    Ok(())
}
