//! Error types for the candidates crate.

use thiserror::Error;

/// Errors that can occur while reading or normalizing candidate records.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Snapshot file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document is not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record couldn't be turned into a candidate
    ///
    /// `record` is the zero-based position in the input array.
    #[error("Parse error at record {record}: {reason}")]
    ParseError { record: usize, reason: String },

    /// A field had a value of the wrong shape
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
