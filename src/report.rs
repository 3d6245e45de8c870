//! End-to-end report generation
//!
//! Orchestrates one run of the command-line tool, delegating:
//! - dataset loading to `io::json_format`
//! - the analysis to `core::engine::analyze_value` with default strategies
//! - output to `io::json_format` or `io::csv_format`

use crate::cli::OutputFormat;
use crate::core::analyze_value;
use crate::io::{load_json_file, write_reports_csv, write_reports_json};
use crate::strategy::AnalysisOptions;
use crate::types::AnalysisError;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Load a dataset file, analyze it and write the report
///
/// # Errors
///
/// Any failure is fatal: missing or unreadable file, invalid JSON, invalid
/// dataset, or an output write error. Nothing is written to `output` unless
/// the analysis succeeded.
///
/// # Examples
///
/// ```no_run
/// use sales_analytics::cli::OutputFormat;
/// use sales_analytics::report::generate_report;
/// use std::path::Path;
///
/// let mut output = std::io::stdout();
/// generate_report(Path::new("sales.json"), OutputFormat::Csv, false, &mut output)
///     .expect("Report failed");
/// ```
pub fn generate_report(
    input_path: &Path,
    format: OutputFormat,
    pretty: bool,
    output: &mut dyn Write,
) -> Result<(), AnalysisError> {
    let data = load_json_file(input_path)?;
    let options = AnalysisOptions::default();

    let reports = analyze_value(Some(&data), Some(&options))?;
    info!(sellers = reports.len(), path = %input_path.display(), "analysis finished");

    match format {
        OutputFormat::Json => write_reports_json(&reports, output, pretty),
        OutputFormat::Csv => write_reports_csv(&reports, output),
    }
}
