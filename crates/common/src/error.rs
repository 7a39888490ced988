//! Error types shared across SubBurn crates.

use std::path::PathBuf;

/// Top-level error type for SubBurn operations.
#[derive(Debug, thiserror::Error)]
pub enum SubburnError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Not valid UTF-8: {path}")]
    Encoding { path: PathBuf },

    #[error("Transcoder error: {message}")]
    Transcoder { message: String },

    #[error("Transcription error: {message}")]
    Transcription { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using SubburnError.
pub type SubburnResult<T> = Result<T, SubburnError>;

impl SubburnError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    pub fn transcoder(msg: impl Into<String>) -> Self {
        Self::Transcoder {
            message: msg.into(),
        }
    }

    pub fn transcription(msg: impl Into<String>) -> Self {
        Self::Transcription {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
