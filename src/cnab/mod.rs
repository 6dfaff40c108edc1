//! CNAB row inspection module.
//!
//! This module contains the core CNAB handling logic including:
//! - `CnabDocument` - The in-memory file with structural lines trimmed
//! - `Segment` / `Selector` - Row selection by segment code or company name
//! - `RecordFields` - Field extraction from a selected row
//! - `Report` / `OutputDocument` - Console report and persisted JSON
//! - `Error` types - Selection and I/O errors

mod document;
mod error;
mod record;
mod report;
mod segment;

pub use document::{CnabDocument, Selector};
pub use error::{Error, ParseSegmentError, SelectError};
pub use record::RecordFields;
pub use report::{OutputDocument, Report};
pub use segment::Segment;
