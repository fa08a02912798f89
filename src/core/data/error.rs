//! Data Error Types
//!
//! Failures while fetching or decoding the two static documents.

use thiserror::Error;

/// Document load errors
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch {path}: {message}")]
    Fetch { path: String, message: String },

    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected shape of {document}: {source}")]
    Schema {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for data operations
pub type Result<T> = std::result::Result<T, DataError>;
