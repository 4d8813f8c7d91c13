//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::BuildError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &BuildError) -> String {
    match e {
        BuildError::IoError(_) | BuildError::HttpError(_) => format!("error: {}", e),
        _ => e.to_string(),
    }
}
