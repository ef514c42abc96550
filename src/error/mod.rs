//! Error handling for the TSV dataset reader.

use std::io;

pub mod util;

/// Specialized error type for TSV dataset operations
#[derive(Debug, thiserror::Error)]
pub enum TsvReaderError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// Error surfaced by the line scanner
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// Error surfaced by the batch reader
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Error from the SQLite store
    #[error("SQLite error: {0}")]
    SqliteError(#[from] rusqlite::Error),

    /// A field value that is neither the missing-value sentinel nor valid data
    #[error("Format error: {0}")]
    FormatError(String),

    /// Error evaluating a filter expression
    #[error("Filter error: {0}")]
    FilterError(String),

    /// Error with a dataset schema
    #[error("Schema error: {0}")]
    SchemaError(String),
}

/// Result type for TSV dataset operations
pub type Result<T> = std::result::Result<T, TsvReaderError>;
