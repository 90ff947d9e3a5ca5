//! Conversion error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the graph document
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConvertError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
