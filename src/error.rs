//! # Centralized Error Handling
//!
//! Unified error types for the entire crate using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Bloodline operations
#[derive(Error, Debug)]
pub enum BloodlineError {
    /// A pedigree slot outside `[0, 15]`
    #[error("slot index {value} is out of range (expected 0..=15)")]
    OutOfRange { value: usize },

    /// A roster or profile lookup found no entry
    #[error("unknown {kind}: \"{key}\"")]
    UnknownKey { kind: &'static str, key: String },

    /// A cross query for an ancestor that was never recorded as a cross
    #[error("no cross recorded for ancestor {id}")]
    NotFound { id: u32 },

    /// I/O errors (file missing, permission denied, read/write failures)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a dataset file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed JSON carrying values we cannot decode
    #[error("Parse error in {file}: {message}")]
    Parse { file: String, message: String },

    /// Configuration errors (invalid CLI arguments)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// File not found errors
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },
}

/// Type alias for Results using BloodlineError
pub type Result<T> = std::result::Result<T, BloodlineError>;

impl BloodlineError {
    /// Create an unknown-key error for a lookup by name
    pub fn unknown_key(kind: &'static str, key: impl Into<String>) -> Self {
        Self::UnknownKey {
            kind,
            key: key.into(),
        }
    }

    /// Create a parse error
    pub fn parse(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
