use std::io::Read;

use super::error::{Error, SelectError};
use super::segment::Segment;

/// Structural lines at the top of the file (file header + batch header).
const HEADER_LINES: usize = 2;
/// Structural lines at the bottom of the file (batch trailer + file trailer).
const TRAILER_LINES: usize = 2;

/// How a single row is picked out of the data lines.
#[derive(Debug, Clone)]
pub enum Selector {
    /// Fixed row index derived from the segment code (P=0, Q=1, R=2).
    Segment(Segment),
    /// First row containing this substring, case-sensitive.
    CompanyName(String),
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Segment(segment) => write!(f, "segment {segment}"),
            Selector::CompanyName(name) => write!(f, "company name {name:?}"),
        }
    }
}

/// A CNAB file loaded into memory with header and trailer lines removed.
///
/// The whole file is read up front; these remittance files are small and the
/// tool inspects a single row per invocation.
#[derive(Debug)]
pub struct CnabDocument {
    rows: Vec<String>,
}

impl CnabDocument {
    /// Primary API: Load a document from any source (File, `Cursor`, etc.)
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::from_content(&content))
    }

    /// Build a document from in-memory content, dropping the first two and
    /// last two lines. Content with fewer than five lines has no data rows.
    pub fn from_content(content: &str) -> Self {
        let lines: Vec<&str> = content.split('\n').collect();
        let end = lines.len().saturating_sub(TRAILER_LINES);
        let rows: Vec<String> = lines
            .get(HEADER_LINES..end)
            .unwrap_or(&[])
            .iter()
            .map(ToString::to_string)
            .collect();

        log::info!(
            "Loaded CNAB content: {} lines, {} data rows",
            lines.len(),
            rows.len()
        );
        Self { rows }
    }

    /// Returns the number of data rows (structural lines excluded).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Select one data row, or report which selector found nothing.
    pub fn select(&self, selector: &Selector) -> Result<&str, SelectError> {
        log::trace!("Selecting row by {selector}");
        match selector {
            Selector::Segment(segment) => self
                .rows
                .get(segment.row_index())
                .map(String::as_str)
                .ok_or(SelectError::SegmentRowMissing { segment: *segment }),
            Selector::CompanyName(name) => self
                .rows
                .iter()
                .find(|row| row.contains(name.as_str()))
                .map(String::as_str)
                .ok_or_else(|| SelectError::CompanyNotFound { name: name.clone() }),
        }
    }
}
