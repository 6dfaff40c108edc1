mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use cnab_rows::{CnabDocument, OutputDocument, Report, Selector};
use commands::Args;

fn main() -> Result<()> {
    // Parse the CLI arguments; clap rejects invocations without a selector
    // before any file is touched
    let args = Args::parse();

    // Initialize logger with default level of info (can be overridden with RUST_LOG)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The selector group is required; the company name wins if clap ever lets
    // both through
    let selector = match (args.segment, args.company_name) {
        (_, Some(name)) => Selector::CompanyName(name),
        (Some(segment), None) => Selector::Segment(segment),
        (None, None) => anyhow::bail!("Either --segment or --company-name is required"),
    };

    // 1. Load the CNAB file into memory
    log::info!("Reading CNAB file {}", args.input_file.display());
    let started = std::time::Instant::now();
    let file = std::fs::File::open(&args.input_file)
        .with_context(|| format!("Failed to open input file: {}", args.input_file.display()))?;
    let document = CnabDocument::from_reader(file).context("Failed to read CNAB file")?;
    log::debug!(
        "Read {} data rows in {:?}",
        document.row_count(),
        started.elapsed()
    );

    // 2. Select the requested row
    let row = document
        .select(&selector)
        .context("Failed to locate the requested row")?;

    // 3. Print the report to stdout
    let report = Report::new(row, args.from, args.to);
    report
        .render(std::io::stdout())
        .context("Failed to print the report")?;

    // 4. Persist the company fields, waiting for the write to land
    let output = OutputDocument::from_fields(report.fields());
    output
        .save(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}
