//! Marker-tagged manuscript parsing
//!
//! Manuscripts carry `### Title:` / `### Author:` metadata lines, a body
//! delimited by `### START` and `### END`, and chapters introduced by
//! `### CHAPTER` lines. Both body markers are required; a missing marker is
//! a user-facing validation error that halts the document, never a partial
//! result. The marker strings themselves come from configuration.

use crate::config::ManuscriptMarkers;
use crate::error::CliError;
use anyhow::Result;

/// A parsed manuscript: metadata plus ordered chapters.
#[derive(Debug, Clone)]
pub struct Manuscript {
    /// Title from the `### Title:` metadata line
    pub title: Option<String>,
    /// Author from the `### Author:` metadata line
    pub author: Option<String>,
    /// Ordered chapters, each non-empty after trimming
    pub chapters: Vec<Chapter>,
}

/// One chapter of a manuscript.
#[derive(Debug, Clone)]
pub struct Chapter {
    /// Text following the chapter marker, if any ("1: The Harbor")
    pub title: Option<String>,
    /// Chapter body, marker line excluded
    pub body: String,
}

impl Chapter {
    /// Display label: the marker title, or "Chapter N" by position.
    pub fn label(&self, index: usize) -> String {
        match &self.title {
            Some(title) => format!("Chapter {title}"),
            None => format!("Chapter {}", index + 1),
        }
    }
}

/// Parse a marker-tagged manuscript.
///
/// `source` names the document in error messages (usually the file path).
pub fn parse(source: &str, text: &str, markers: &ManuscriptMarkers) -> Result<Manuscript> {
    let lines: Vec<&str> = text.lines().collect();

    let mut title = None;
    let mut author = None;
    for line in &lines {
        if let Some(rest) = line.strip_prefix(markers.title_prefix.as_str()) {
            title = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(markers.author_prefix.as_str()) {
            author = Some(rest.trim().to_string());
        }
    }

    let start = lines
        .iter()
        .position(|line| line.trim() == markers.start)
        .ok_or_else(|| CliError::MissingMarker(markers.start.clone()))?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| line.trim() == markers.end)
        .map(|offset| start + 1 + offset)
        .ok_or_else(|| CliError::MissingMarker(markers.end.clone()))?;

    let chapters = split_chapters(&lines[start + 1..end], markers);
    if chapters.is_empty() {
        return Err(CliError::EmptyManuscript(source.to_string()).into());
    }

    Ok(Manuscript {
        title,
        author,
        chapters,
    })
}

/// Split body lines on chapter markers. Text before the first marker becomes
/// an untitled leading chapter; chapters empty after trimming are dropped.
fn split_chapters(body: &[&str], markers: &ManuscriptMarkers) -> Vec<Chapter> {
    fn flush(title: Option<String>, lines: &mut Vec<&str>, out: &mut Vec<Chapter>) {
        let body = lines.join("\n");
        if !body.trim().is_empty() {
            out.push(Chapter {
                title,
                body: body.trim().to_string(),
            });
        }
        lines.clear();
    }

    let mut chapters = Vec::new();
    let mut current_title: Option<String> = None;
    let mut current_lines: Vec<&str> = Vec::new();

    for line in body {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix(markers.chapter_prefix.as_str()) {
            flush(current_title.take(), &mut current_lines, &mut chapters);
            let marker_title = rest.trim();
            current_title = (!marker_title.is_empty()).then(|| marker_title.to_string());
        } else {
            current_lines.push(line);
        }
    }
    flush(current_title, &mut current_lines, &mut chapters);

    chapters
}
