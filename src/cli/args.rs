use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Compute per-seller sales statistics from purchase records
#[derive(Parser, Debug)]
#[command(name = "sales-analytics")]
#[command(about = "Compute per-seller revenue, profit, bonus and top products", long_about = None)]
pub struct CliArgs {
    /// Input JSON file with sellers, products and purchase_records
    #[arg(value_name = "INPUT", help = "Path to the input JSON dataset")]
    pub input_file: PathBuf,

    /// Output format for the report
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "json",
        help = "Report format: 'json' for a JSON array or 'csv' for a CSV table"
    )]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long = "pretty", help = "Pretty-print JSON output (ignored for csv)")]
    pub pretty: bool,
}

/// Available report formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Csv,
}
