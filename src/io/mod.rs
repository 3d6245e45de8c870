//! I/O module
//!
//! Handles dataset loading and report output.
//!
//! # Components
//!
//! - `json_format` - JSON dataset parsing and JSON report serialization
//! - `csv_format` - CSV report serialization

pub mod csv_format;
pub mod json_format;

pub use csv_format::write_reports_csv;
pub use json_format::{load_json_file, read_json, write_reports_json};
