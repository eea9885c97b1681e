//! JSON output formatter

use super::AnalysisWriter;
use crate::ChapterAnalysis;
use anyhow::Result;
use legible_core::{MetricsRecord, SensoryCounts};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs a pretty array of labeled records
pub struct JsonFormatter<W: Write> {
    writer: W,
    include_senses: bool,
    analyses: Vec<ChapterAnalysis>,
}

/// Serialized shape of one analyzed unit
#[derive(Serialize)]
struct JsonRecord<'a> {
    label: &'a str,
    metrics: &'a MetricsRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    senses: Option<&'a SensoryCounts>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, include_senses: bool) -> Self {
        Self {
            writer,
            include_senses,
            analyses: Vec::new(),
        }
    }
}

impl<W: Write> AnalysisWriter for JsonFormatter<W> {
    fn write_record(&mut self, analysis: &ChapterAnalysis) -> Result<()> {
        self.analyses.push(analysis.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let records: Vec<JsonRecord<'_>> = self
            .analyses
            .iter()
            .map(|analysis| JsonRecord {
                label: &analysis.label,
                metrics: &analysis.metrics,
                senses: self.include_senses.then(|| analysis.metrics.sensory()),
            })
            .collect();
        serde_json::to_writer_pretty(&mut self.writer, &records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
