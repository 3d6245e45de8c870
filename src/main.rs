//! Sales Analytics CLI
//!
//! Command-line interface for computing seller statistics from a JSON dataset.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- sales.json > report.json
//! cargo run -- --pretty sales.json
//! cargo run -- --format csv sales.json > report.csv
//! SALES_ANALYTICS_LOG=debug cargo run -- sales.json
//! ```
//!
//! The report goes to stdout; log output goes to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid JSON, invalid dataset, etc.)

use sales_analytics::cli;
use sales_analytics::report;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing from the SALES_ANALYTICS_LOG environment variable
///
/// Defaults to "warn" so that normal runs only print the report.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("SALES_ANALYTICS_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let args = cli::parse_args();
    init_tracing();

    let mut output = std::io::stdout().lock();
    if let Err(e) = report::generate_report(&args.input_file, args.format, args.pretty, &mut output)
    {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
