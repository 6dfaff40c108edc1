pub(crate) use clap::Parser;
use cnab_rows::Segment;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cnab-rows",
    author,
    version,
    about = "Inspect rows and field ranges of CNAB remittance files",
    long_about = None,
    group = clap::ArgGroup::new("selector").required(true).args(["segment", "company_name"]),
    after_help = "EXAMPLES:\n    cnab-rows -f 21 -t 34 -s p\n    cnab-rows -f 21 -t 34 -n \"ACME CORP\" -a remessa.rem\n\nOUTPUT:\n    The report is printed to stdout and the company fields are\n    written as pretty JSON to the --output path (default output.json)."
)]
pub struct Args {
    /// Path to the CNAB input file
    #[arg(
        short = 'a',
        long,
        value_name = "FILE",
        default_value = "cnabExample.rem"
    )]
    pub input_file: PathBuf,

    /// Start position of the field within the row, 1-based
    #[arg(short = 'f', long, value_name = "POS")]
    pub from: usize,

    /// End position of the field within the row, exclusive
    #[arg(short = 't', long, value_name = "POS")]
    pub to: usize,

    /// Segment code of the row to inspect (P, Q or R, any case)
    #[arg(short = 's', long, value_name = "CODE")]
    pub segment: Option<Segment>,

    /// Select the first row containing this company name (case-sensitive)
    #[arg(short = 'n', long, value_name = "NAME")]
    pub company_name: Option<String>,

    /// Path of the JSON output file, overwritten on every run
    #[arg(short = 'o', long, value_name = "FILE", default_value = "output.json")]
    pub output: PathBuf,
}
