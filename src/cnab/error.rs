use crate::cnab::segment::Segment;

/// Top-level error type for CNAB inspection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Selection error: {0}")]
    Select(#[from] SelectError),
}

/// Row lookup failures. A missing row is reported, never a panic downstream.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("No data row at index {} for segment {segment}", .segment.row_index())]
    SegmentRowMissing { segment: Segment },

    #[error("No data row contains company name {name:?}")]
    CompanyNotFound { name: String },
}

/// Invalid segment code supplied on the command line.
#[derive(Debug, thiserror::Error)]
#[error("Invalid segment {0:?}, expected P, Q or R")]
pub struct ParseSegmentError(pub(crate) String);
