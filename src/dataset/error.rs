//! Dataset error types
//!
//! All of these are load-time failures. Once the table is in memory the
//! filter/aggregate operations are total and never return an error.

use thiserror::Error;

/// Errors that can occur while loading the launch dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// I/O operation failed (file missing, unreadable)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level parse failure (malformed quoting, ragged rows)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A field failed to parse into its expected type
    #[error("Line {line}: invalid value for {column}: {value:?}")]
    InvalidField {
        line: usize,
        column: &'static str,
        value: String,
    },

    /// The file parsed but contained no data rows
    #[error("Dataset contains no records")]
    Empty,
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
