//! Error types for vigil_core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using vigil_core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during baseline and check operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error occurred during file operations.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A snapshot artifact is missing; a baseline must be created first.
    #[error("Baseline not found at {path}: create a baseline first")]
    MissingBaseline { path: PathBuf },

    /// A snapshot artifact could not be serialized or parsed.
    #[error("Snapshot codec error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Invalid digest format or encoding.
    #[error("Invalid digest: {reason}")]
    InvalidDigest { reason: String },

    /// The monitored root is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },
}

impl Error {
    /// Create a MissingBaseline error.
    pub fn missing_baseline(path: impl Into<PathBuf>) -> Self {
        Error::MissingBaseline { path: path.into() }
    }

    /// Create an InvalidDigest error.
    pub fn invalid_digest(reason: impl Into<String>) -> Self {
        Error::InvalidDigest {
            reason: reason.into(),
        }
    }

    /// Create a NotADirectory error.
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Error::NotADirectory { path: path.into() }
    }
}

impl From<ignore::Error> for Error {
    fn from(err: ignore::Error) -> Self {
        // ignore::Error can wrap an io::Error or be a path error
        match err.io_error() {
            Some(io_err) => Error::Io {
                source: std::io::Error::new(io_err.kind(), io_err.to_string()),
            },
            None => Error::Io {
                source: std::io::Error::other(err.to_string()),
            },
        }
    }
}

impl From<tempfile::PersistError> for Error {
    fn from(err: tempfile::PersistError) -> Self {
        Error::Io { source: err.error }
    }
}
