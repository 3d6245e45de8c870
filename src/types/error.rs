//! Error types for sales analytics
//!
//! This module defines all error types that can occur while loading a
//! dataset, running the analysis and writing the report.
//!
//! # Error Categories
//!
//! - **Validation Errors**: the dataset or the analysis options are unusable.
//!   These abort the run before any aggregation starts.
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **Parse Errors**: the input file is not valid JSON.
//! - **Output Errors**: the report could not be serialized or written.
//! - **Arithmetic Errors**: a running total or item profit overflows
//!   `Decimal`.
//!
//! Purchase records that reference an unknown seller and items that
//! reference an unknown SKU are not errors; they are skipped.

use thiserror::Error;

/// Main error type for the sales analytics pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// The dataset is absent, malformed or has an empty collection
    ///
    /// Fatal: no partial result is produced.
    #[error("Invalid input data: {reason}")]
    InvalidInput {
        /// What was wrong with the dataset
        reason: String,
    },

    /// The analysis options are absent or lack a required strategy
    ///
    /// Fatal: no partial result is produced.
    #[error("Invalid analysis options: {reason}")]
    InvalidConfig {
        /// What was wrong with the options
        reason: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// The input is not well-formed JSON
    #[error("JSON parse error at line {line}, column {column}: {message}")]
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },

    /// A money or quantity total does not fit in a `Decimal`
    ///
    /// Fatal: no partial result is produced.
    #[error("Arithmetic overflow in {operation} for seller {seller_id}")]
    ArithmeticOverflow {
        /// Computation that overflowed
        operation: String,
        /// Seller whose totals were being updated
        seller_id: String,
    },

    /// The report could not be written
    #[error("Failed to write report: {message}")]
    OutputError {
        /// Description of the failure
        message: String,
    },
}

// Conversion from io::Error to AnalysisError
impl From<std::io::Error> for AnalysisError {
    fn from(error: std::io::Error) -> Self {
        AnalysisError::IoError {
            message: error.to_string(),
        }
    }
}

// Syntax and EOF errors are parse errors. Data errors mean the JSON was
// well-formed but did not have the dataset's shape.
impl From<serde_json::Error> for AnalysisError {
    fn from(error: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match error.classify() {
            Category::Io => AnalysisError::IoError {
                message: error.to_string(),
            },
            Category::Syntax | Category::Eof => AnalysisError::ParseError {
                line: error.line(),
                column: error.column(),
                message: error.to_string(),
            },
            Category::Data => AnalysisError::InvalidInput {
                reason: error.to_string(),
            },
        }
    }
}

// Conversion from csv::Error to AnalysisError
impl From<csv::Error> for AnalysisError {
    fn from(error: csv::Error) -> Self {
        AnalysisError::OutputError {
            message: error.to_string(),
        }
    }
}

impl AnalysisError {
    /// Create an InvalidInput error
    pub fn invalid_input(reason: &str) -> Self {
        AnalysisError::InvalidInput {
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(reason: &str) -> Self {
        AnalysisError::InvalidConfig {
            reason: reason.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AnalysisError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, seller_id: &str) -> Self {
        AnalysisError::ArithmeticOverflow {
            operation: operation.to_string(),
            seller_id: seller_id.to_string(),
        }
    }

    /// Create an OutputError error
    pub fn output_error(message: &str) -> Self {
        AnalysisError::OutputError {
            message: message.to_string(),
        }
    }
}
