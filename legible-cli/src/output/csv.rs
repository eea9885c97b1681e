//! CSV output formatter

use super::{sense_header, AnalysisWriter};
use crate::ChapterAnalysis;
use anyhow::Result;
use legible_core::{Metric, Sense};
use std::io::Write;

/// CSV formatter - one flat row per analyzed unit
///
/// Columns are `Chapter` plus the canonical metric labels, with per-sense
/// columns appended on request. Floats render to two decimal places.
pub struct CsvFormatter<W: Write> {
    writer: W,
    include_senses: bool,
    header_written: bool,
}

impl<W: Write> CsvFormatter<W> {
    /// Create a new CSV formatter
    pub fn new(writer: W, include_senses: bool) -> Self {
        Self {
            writer,
            include_senses,
            header_written: false,
        }
    }

    fn write_header(&mut self) -> Result<()> {
        let mut fields = vec!["Chapter".to_string()];
        fields.extend(Metric::ALL.iter().map(|metric| metric.label().to_string()));
        if self.include_senses {
            fields.extend(Sense::ALL.iter().map(|&sense| sense_header(sense)));
        }
        write_csv_row(&mut self.writer, &fields)?;
        self.header_written = true;
        Ok(())
    }
}

impl<W: Write> AnalysisWriter for CsvFormatter<W> {
    fn write_record(&mut self, analysis: &ChapterAnalysis) -> Result<()> {
        if !self.header_written {
            self.write_header()?;
        }

        let mut fields = vec![analysis.label.clone()];
        fields.extend(analysis.metrics.iter().map(|(_, value)| value.to_string()));
        if self.include_senses {
            fields.extend(
                analysis
                    .metrics
                    .sensory()
                    .iter()
                    .map(|(_, count)| count.to_string()),
            );
        }
        write_csv_row(&mut self.writer, &fields)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if !self.header_written {
            self.write_header()?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Quote a field when it contains a comma, quote, or newline.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_csv_row<W: Write>(writer: &mut W, fields: &[String]) -> Result<()> {
    let row: Vec<String> = fields.iter().map(|field| escape_field(field)).collect();
    writeln!(writer, "{}", row.join(","))?;
    Ok(())
}
