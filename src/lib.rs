//! CNAB row inspector library.
//!
//! Reads a fixed-width CNAB remittance file, selects a single record line by
//! segment code or company-name substring, extracts a character range plus the
//! fixed company fields, and renders a report / JSON output document.

mod cnab;

pub use cnab::{
    CnabDocument, Error, OutputDocument, ParseSegmentError, RecordFields, Report, SelectError,
    Segment, Selector,
};
