//! Error types for spec-validator.
//!
//! Analysis itself never fails; these cover reading documents, JSON
//! encoding and configuration checks.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for spec-validator operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The document could not be read from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
