//! Error types for the datadesc library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for datadesc operations.
#[derive(Debug, Error)]
pub enum DatadescError {
    /// The input file could not be opened or read.
    #[error("Failed to load '{path}': {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record that cannot be placed into the table.
    #[error("Parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    /// Empty file or no header to describe.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// The report could not be written to its destination.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DatadescError {
    /// Returns true if the error happened while loading the input table.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            DatadescError::Load { .. }
                | DatadescError::Csv(_)
                | DatadescError::Parse { .. }
                | DatadescError::EmptyData(_)
        )
    }
}

/// Result type alias for datadesc operations.
pub type Result<T> = std::result::Result<T, DatadescError>;
