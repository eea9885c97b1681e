//! Legible CLI library
//!
//! This library provides the command-line interface for the legible
//! chapter-by-chapter prose readability analyzer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod manuscript;
pub mod output;
pub mod progress;
pub mod report;

pub use error::{CliError, CliResult};

use legible_core::MetricsRecord;
use serde::Serialize;

/// One analyzed unit of text: a label plus its metrics record.
///
/// The engine is chapter-agnostic; labels are attached here.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterAnalysis {
    /// Display label ("Chapter 3", a chapter title, or a file stem)
    pub label: String,
    /// Metrics for the unit
    pub metrics: MetricsRecord,
}
