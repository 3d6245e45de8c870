//! JSON dataset loading and report output
//!
//! The input file is a single JSON object with `sellers`, `products` and
//! `purchase_records` arrays. It is parsed into an untyped `Value` first so
//! the raw shape can be validated before deserialization (see
//! [`crate::core::validator::validate_raw`]).

use crate::types::{AnalysisError, SellerReport};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

/// Parse a JSON document from a reader
pub fn read_json<R: Read>(reader: R) -> Result<Value, AnalysisError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Open and parse a JSON dataset file
///
/// # Errors
///
/// - `FileNotFound` if the path does not exist
/// - `IoError` if the file cannot be read
/// - `ParseError` if the content is not valid JSON
pub fn load_json_file(path: &Path) -> Result<Value, AnalysisError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AnalysisError::file_not_found(&path.display().to_string()),
        _ => AnalysisError::from(e),
    })?;

    read_json(BufReader::new(file))
}

/// Write reports as a JSON array followed by a newline
pub fn write_reports_json(
    reports: &[SellerReport],
    output: &mut dyn Write,
    pretty: bool,
) -> Result<(), AnalysisError> {
    let written = if pretty {
        serde_json::to_writer_pretty(&mut *output, reports)
    } else {
        serde_json::to_writer(&mut *output, reports)
    };
    written.map_err(|e| AnalysisError::output_error(&e.to_string()))?;

    writeln!(output).map_err(|e| AnalysisError::output_error(&e.to_string()))?;
    output
        .flush()
        .map_err(|e| AnalysisError::output_error(&e.to_string()))?;

    Ok(())
}
