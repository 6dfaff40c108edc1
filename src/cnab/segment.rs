use crate::cnab::error::ParseSegmentError;
use std::str::FromStr;

/// Record-type tag identifying which fields a fixed-width CNAB line carries.
///
/// Detail rows come in a fixed order within a batch, so each segment maps to a
/// fixed index into the trimmed data lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    P,
    Q,
    R,
}

impl Segment {
    /// Index of this segment's row within the data lines (header/trailer removed).
    pub fn row_index(self) -> usize {
        match self {
            Segment::P => 0,
            Segment::Q => 1,
            Segment::R => 2,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Segment::P => 'P',
            Segment::Q => 'Q',
            Segment::R => 'R',
        }
    }
}

impl FromStr for Segment {
    type Err = ParseSegmentError;

    /// Parses a one-letter segment code, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" | "p" => Ok(Segment::P),
            "Q" | "q" => Ok(Segment::Q),
            "R" | "r" => Ok(Segment::R),
            other => Err(ParseSegmentError(other.to_string())),
        }
    }
}

impl std::fmt::Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
