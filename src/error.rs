//! Error types for the build utilities.

use crate::interpreter::Platform;
use thiserror::Error;

/// Errors surfaced by the build utilities.
///
/// Filesystem and transport failures are passed through untouched so callers
/// see the same error the underlying primitive raised.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    HttpError(#[from] reqwest::Error),

    #[error("Hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("No legacy interpreter known for platform: {0}")]
    NoLegacyInterpreter(Platform),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output formatting failed: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for BuildError {
    fn from(err: config::ConfigError) -> Self {
        BuildError::ConfigError(err.to_string())
    }
}
