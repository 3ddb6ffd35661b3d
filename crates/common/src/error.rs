//! Error types shared across Fixate crates.

use std::path::PathBuf;

/// Top-level error type for Fixate operations.
#[derive(Debug, thiserror::Error)]
pub enum FixateError {
    #[error("Ingestion error: {message}")]
    Ingest { message: String },

    #[error("Analysis error: {message}")]
    Analysis { message: String },

    #[error("Report error: {message}")]
    Report { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using FixateError.
pub type FixateResult<T> = Result<T, FixateError>;

impl FixateError {
    pub fn ingest(msg: impl Into<String>) -> Self {
        Self::Ingest {
            message: msg.into(),
        }
    }

    pub fn analysis(msg: impl Into<String>) -> Self {
        Self::Analysis {
            message: msg.into(),
        }
    }

    pub fn report(msg: impl Into<String>) -> Self {
        Self::Report {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
