//! Integration tests for the CNAB row inspector.
//!
//! These tests exercise the full E2E flow: raw file content → row selection →
//! field extraction → rendered report and JSON output.
use cnab_rows::{CnabDocument, OutputDocument, Report, SelectError, Segment, Selector};

const COMPANY_NAME: &str = "ACME CORP LTDA";
const COMPANY_ADDRESS: &str = "RUA DAS FLORES 123 CENTRO SAO PAULO SP";

/// Build one 240-character detail row with the segment code at 0-based
/// position 13, the company name at 33..73 and the address at 73..151.
fn data_row(segment: char, name: &str, address: &str) -> String {
    let mut row = String::with_capacity(240);
    row.push_str("0770000130001");
    row.push(segment);
    while row.len() < 33 {
        row.push('0');
    }
    row.push_str(&format!("{name:<40}"));
    row.push_str(&format!("{address:<78}"));
    while row.len() < 240 {
        row.push('0');
    }
    row
}

/// Full file content: two header lines, P/Q/R rows, two trailer lines.
fn sample_content() -> String {
    [
        "FILE HEADER".to_string(),
        "BATCH HEADER".to_string(),
        data_row('P', "", ""),
        data_row('Q', COMPANY_NAME, COMPANY_ADDRESS),
        data_row('R', "", ""),
        "BATCH TRAILER".to_string(),
        "FILE TRAILER".to_string(),
    ]
    .join("\n")
}

/// Helper to select a row and render its report without colors.
fn run_report(selector: &Selector, from: usize, to: usize) -> (String, OutputDocument) {
    colored::control::set_override(false);

    let content = sample_content();
    let document = CnabDocument::from_content(&content);
    let row = document.select(selector).unwrap();

    let report = Report::new(row, from, to);
    let mut buffer = Vec::new();
    report.render(&mut buffer).unwrap();

    (
        String::from_utf8(buffer).unwrap(),
        OutputDocument::from_fields(report.fields()),
    )
}

#[test]
fn test_segment_selection_maps_to_fixed_rows() {
    let content = sample_content();
    let document = CnabDocument::from_content(&content);

    for (code, expected) in [("p", 'P'), ("Q", 'Q'), ("r", 'R')] {
        let segment: Segment = code.parse().unwrap();
        let row = document.select(&Selector::Segment(segment)).unwrap();
        assert_eq!(row.chars().nth(13), Some(expected), "code: {code}");
    }
}

#[test]
fn test_company_name_selection_finds_the_q_row() {
    let content = sample_content();
    let document = CnabDocument::from_content(&content);

    let row = document
        .select(&Selector::CompanyName("ACME".to_string()))
        .unwrap();
    assert_eq!(row.chars().nth(13), Some('Q'));
}

#[test]
fn test_unknown_company_name_is_a_not_found_error() {
    let content = sample_content();
    let document = CnabDocument::from_content(&content);

    let err = document
        .select(&Selector::CompanyName("NO SUCH COMPANY".to_string()))
        .unwrap_err();
    assert!(matches!(err, SelectError::CompanyNotFound { .. }));
}

#[test]
fn test_segment_beyond_row_count_is_a_not_found_error() {
    // Only one data row; Q and R indices fall off the end
    let content = [
        "FILE HEADER",
        "BATCH HEADER",
        &data_row('P', "", ""),
        "BATCH TRAILER",
        "FILE TRAILER",
    ]
    .join("\n");
    let document = CnabDocument::from_content(&content);

    let err = document.select(&Selector::Segment(Segment::Q)).unwrap_err();
    assert!(matches!(
        err,
        SelectError::SegmentRowMissing {
            segment: Segment::Q
        }
    ));
}

#[test]
fn test_q_report_carries_company_fields() {
    let (rendered, output) = run_report(&Selector::Segment(Segment::Q), 21, 34);

    assert!(rendered.contains("----- CNAB linha do segmento Q -----"));
    assert!(rendered.contains(&format!("Nome da empresa: {:<40}", COMPANY_NAME)));
    assert!(rendered.contains(&format!("Endereço da empresa: {:<78}", COMPANY_ADDRESS)));

    assert_eq!(output.company_name, format!("{COMPANY_NAME:<40}"));
    assert_eq!(output.company_address, format!("{COMPANY_ADDRESS:<78}"));
}

#[test]
fn test_non_q_report_uses_placeholder_company_fields() {
    let (rendered, output) = run_report(&Selector::Segment(Segment::P), 21, 34);

    assert!(rendered.contains("----- CNAB linha do segmento P -----"));
    assert_eq!(output.company_name, "Não identificado");
    assert_eq!(output.company_address, "Não identificado");
}

#[test]
fn test_slice_matches_manual_substring() {
    let (rendered, _) = run_report(&Selector::Segment(Segment::Q), 21, 34);

    let row = data_row('Q', COMPANY_NAME, COMPANY_ADDRESS);
    let expected: String = row.chars().skip(20).take(14).collect();
    assert!(rendered.contains(&format!("Item isolado: {expected}")));
}

#[test]
fn test_slice_over_the_company_name_field() {
    // Positions 34..=73 are the 40-character company name field on Q rows
    let (rendered, output) = run_report(&Selector::Segment(Segment::Q), 34, 73);

    assert!(rendered.contains(&format!("Item isolado: {:<40}", COMPANY_NAME)));
    assert_eq!(output.company_name, format!("{COMPANY_NAME:<40}"));
}

#[test]
fn test_out_of_range_positions_degrade_gracefully() {
    let (rendered, _) = run_report(&Selector::Segment(Segment::P), 239, 512);
    assert!(rendered.contains("Posição final: 512"));

    let (rendered, _) = run_report(&Selector::Segment(Segment::P), 34, 21);
    assert!(rendered.contains("Item isolado: \n"));
}

#[test]
fn test_output_json_shape_and_idempotency() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.json");

    let (_, output) = run_report(&Selector::Segment(Segment::Q), 21, 34);

    output.save(&path).unwrap();
    let first = std::fs::read(&path).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&first).unwrap();
    assert_eq!(
        json["companyName"].as_str().unwrap().trim_end(),
        COMPANY_NAME
    );
    assert_eq!(
        json["companyAddress"].as_str().unwrap().trim_end(),
        COMPANY_ADDRESS
    );

    // Identical inputs must produce byte-identical output
    output.save(&path).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_company_fields_are_independent_of_from_and_to() {
    let (_, narrow) = run_report(&Selector::Segment(Segment::Q), 1, 2);
    let (_, wide) = run_report(&Selector::Segment(Segment::Q), 1, 240);

    assert_eq!(narrow, wide);
}

#[test]
fn test_bundled_sample_file_round_trip() {
    let content = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/cnabExample.rem"
    ))
    .unwrap();
    let document = CnabDocument::from_content(&content);
    assert_eq!(document.row_count(), 3);

    let row = document.select(&Selector::Segment(Segment::Q)).unwrap();
    let report = Report::new(row, 34, 73);
    assert_eq!(report.fields().segment_char(), Some('Q'));
    assert_eq!(report.fields().company_name().trim_end(), "ACME CORP LTDA");
}
