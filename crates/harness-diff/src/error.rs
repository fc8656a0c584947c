//! Error types for harness-diff

use std::fmt;
use std::path::PathBuf;

/// Result type for harness-diff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a comparison a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Gold,
    Actual,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Gold => f.write_str("gold"),
            Side::Actual => f.write_str("actual"),
        }
    }
}

/// Errors that can occur while diffing against a gold file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Gold file not found: {url}")]
    GoldMissing { url: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {side} JSON: {source}")]
    Parse {
        side: Side,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}\n{diff}")]
    Mismatch { message: String, diff: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(side: Side, source: serde_json::Error) -> Self {
        Self::Parse { side, source }
    }

    /// Returns the failure message of a mismatch, if this is one.
    pub fn mismatch_message(&self) -> Option<&str> {
        match self {
            Self::Mismatch { message, .. } => Some(message),
            _ => None,
        }
    }
}
