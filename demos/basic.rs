//! Basic example of inspecting a CNAB row as a library.
//!
//! Run with: `cargo run --example basic`

use cnab_rows::{CnabDocument, Report, Segment, Selector};

fn main() {
    // Initialize logger (optional, but shows what's happening)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // A miniature remittance: two header lines, P/Q/R detail rows, two trailers
    let mut content = String::new();
    content.push_str("FILE HEADER\n");
    content.push_str("BATCH HEADER\n");
    for (segment, tail) in [
        ('P', format!("{:0<226}", "")),
        ('Q', format!("{:0<19}{:<40}{:<78}{:<89}", "", "ACME CORP LTDA", "RUA DAS FLORES 123 SAO PAULO SP", "")),
        ('R', format!("{:0<226}", "")),
    ] {
        content.push_str(&format!("0770000130001{segment}{tail}\n"));
    }
    content.push_str("BATCH TRAILER\n");
    content.push_str("FILE TRAILER");

    let document = CnabDocument::from_content(&content);

    // Select the Q row and slice positions 34..=73 (the company name field)
    let row = document
        .select(&Selector::Segment(Segment::Q))
        .expect("Q row present");

    let report = Report::new(row, 34, 73);
    report
        .render(std::io::stdout())
        .expect("Failed to print the report");
}
