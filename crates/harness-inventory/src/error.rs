//! Error types for harness-inventory

use std::path::PathBuf;

/// Result type for harness-inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up discovery
///
/// Failures of individual classes during discovery are not errors: such
/// classes are left out of the inventory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Class {class} is not registered under any module root")]
    UnknownModule { class: String },

    #[error("Unknown test category: {0}")]
    UnknownCategory(String),

    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to parse filter config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
