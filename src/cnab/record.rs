/// 0-based position of the segment code within a detail row.
const SEGMENT_CHAR_POS: usize = 13;
/// Company name field on segment Q rows, 0-based `[start, end)`.
const COMPANY_NAME_START: usize = 33;
const COMPANY_NAME_END: usize = 73;
/// Company address field on segment Q rows, 0-based `[start, end)`.
const COMPANY_ADDRESS_START: usize = 73;
const COMPANY_ADDRESS_END: usize = 151;

/// Placeholder for company fields on rows that are not segment Q.
pub(super) const UNIDENTIFIED: &str = "Não identificado";

/// Clamped substring by character position, `[start, end)`.
///
/// Bounds past the end of the line degrade to empty or partial strings and
/// `end <= start` yields an empty string. Never panics.
pub(super) fn substring(line: &str, start: usize, end: usize) -> String {
    if end <= start {
        return String::new();
    }
    line.chars().skip(start).take(end - start).collect()
}

/// Fields derived from one CNAB data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    segment_char: Option<char>,
    slice: String,
    company_name: String,
    company_address: String,
}

impl RecordFields {
    /// Extract fields from a row.
    ///
    /// `from` is 1-based and inclusive, `to` is the exclusive upper bound after
    /// the shift to 0-based indexing, so the slice is `row[from-1 .. to)`.
    /// Company fields come from fixed positions and ignore `from`/`to`; rows
    /// whose segment code is not literally 'Q' get the placeholder text.
    pub fn extract(row: &str, from: usize, to: usize) -> Self {
        let segment_char = row.chars().nth(SEGMENT_CHAR_POS);
        let slice = substring(row, from.saturating_sub(1), to);

        let (company_name, company_address) = if segment_char == Some('Q') {
            (
                substring(row, COMPANY_NAME_START, COMPANY_NAME_END),
                substring(row, COMPANY_ADDRESS_START, COMPANY_ADDRESS_END),
            )
        } else {
            (UNIDENTIFIED.to_string(), UNIDENTIFIED.to_string())
        };

        log::trace!(
            "Extracted fields: segment={:?} slice={:?} from={} to={}",
            segment_char,
            slice,
            from,
            to
        );
        Self {
            segment_char,
            slice,
            company_name,
            company_address,
        }
    }

    /// Segment code at position 14, absent on rows shorter than that.
    pub fn segment_char(&self) -> Option<char> {
        self.segment_char
    }

    /// The `[from-1, to)` slice of the row.
    pub fn slice(&self) -> &str {
        &self.slice
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn company_address(&self) -> &str {
        &self.company_address
    }
}
