//! Error types for the Tarnish library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Tarnish operations.
#[derive(Debug, Error)]
pub enum TarnishError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no header to read.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A probability parameter outside `[0, 1]` (or NaN).
    #[error("Invalid probability for '{parameter}': {value} (expected a value in [0, 1])")]
    InvalidProbability { parameter: String, value: f64 },

    /// Columns of unequal length handed to a dataset constructor.
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        found: usize,
    },

    /// A path that should be a directory is not one.
    #[error("Not a directory: '{0}'")]
    NotADirectory(PathBuf),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Tarnish operations.
pub type Result<T> = std::result::Result<T, TarnishError>;
