//! Error types for the normalizer
//!
//! This module defines custom error types using thiserror for better error handling
//! throughout the tool.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for normalizer operations
#[derive(Error, Debug)]
pub enum NormalizerError {
    /// IO errors (file operations, directory access, etc.)
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Target path does not exist or is neither a file nor a directory
    #[error("Target path not found: {path:?}")]
    TargetNotFound { path: PathBuf },

    /// Tree-sitter parsing errors
    #[error("Parse error in file {file:?}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Text decoding errors (invalid UTF-8/UTF-16 payload)
    #[error("Failed to decode {file:?}: {message}")]
    Decode { file: PathBuf, message: String },

    /// Tree-sitter language setup errors
    #[error("Failed to set up tree-sitter language: {message}")]
    TreeSitterLanguage { message: String },

    /// Reporter failed to produce its artifact
    #[error("Failed to write report: {message}")]
    Report {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for normalizer operations
pub type NormalizerResult<T> = Result<T, NormalizerError>;

// Implement From traits for automatic error conversion
impl From<std::io::Error> for NormalizerError {
    fn from(err: std::io::Error) -> Self {
        NormalizerError::Io {
            source: err,
            message: "IO operation failed".to_string(),
        }
    }
}

impl From<serde_json::Error> for NormalizerError {
    fn from(err: serde_json::Error) -> Self {
        NormalizerError::Json {
            source: err,
            message: "JSON operation failed".to_string(),
        }
    }
}

/// Helper trait for converting IO errors with context
pub trait IoContext<T> {
    fn with_io_context(self, message: &str) -> NormalizerResult<T>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn with_io_context(self, message: &str) -> NormalizerResult<T> {
        self.map_err(|e| NormalizerError::Io {
            message: message.to_string(),
            source: e,
        })
    }
}
