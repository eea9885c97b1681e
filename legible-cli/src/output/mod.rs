//! Output formatting module

use crate::ChapterAnalysis;
use anyhow::Result;

/// Trait for analysis output formatters
pub trait AnalysisWriter {
    /// Format one analyzed unit
    fn write_record(&mut self, analysis: &ChapterAnalysis) -> Result<()>;

    /// Finalize output (flush, close the JSON array, render the table)
    fn finish(&mut self) -> Result<()>;
}

pub mod csv;
pub mod json;
pub mod table;

pub use csv::CsvFormatter;
pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Column header for one sense ("Sight Words")
pub(crate) fn sense_header(sense: legible_core::Sense) -> String {
    format!("{} Words", sense.label())
}
