//! Error types for loading questionnaires, configuration and reports.
//!
//! The assessment itself is total and never fails; everything here belongs to
//! the edges that read answers and write results.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for nitrosamine-risk operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Answer file could not be decoded
    #[error("Parse error in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Decoded payload is not a mapping of answers
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unrecognised output format name
    #[error("Unknown output format '{0}' (expected terminal, json, markdown or html)")]
    UnknownFormat(String),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error with path context
    pub fn parse(path: impl Into<PathBuf>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
