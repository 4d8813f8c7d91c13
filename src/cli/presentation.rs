//! CLI presentation: text and json formatters per command.

use crate::cli::parse::OutputFormat;
use crate::config::BuildUtilConfig;
use crate::error::BuildError;
use crate::fetch::FetchOutcome;
use std::path::{Path, PathBuf};

fn to_json(value: &serde_json::Value) -> Result<String, BuildError> {
    serde_json::to_string_pretty(value).map_err(|e| BuildError::OutputError(e.to_string()))
}

pub fn format_root(root: &Path) -> String {
    format!("Project root path: {}", root.display())
}

pub fn format_file_list(files: &[PathBuf], format: OutputFormat) -> Result<String, BuildError> {
    match format {
        OutputFormat::Json => {
            let paths: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
            to_json(&serde_json::json!(paths))
        }
        OutputFormat::Text => Ok(files
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn format_hash(path: &Path, hash: &str, format: OutputFormat) -> Result<String, BuildError> {
    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "path": path.display().to_string(),
            "sha1": hash,
        })),
        OutputFormat::Text => Ok(hash.to_string()),
    }
}

/// Text for a successful fetch. Mismatches are reported as errors by the route.
pub fn format_fetch_outcome(target: &Path, outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::AlreadyPresent => format!("up to date: {}", target.display()),
        FetchOutcome::Verified => format!("verified: {}", target.display()),
        FetchOutcome::Discovered { hash } => format!("sha1 of {}: {}", target.display(), hash),
        FetchOutcome::Mismatch { expected, actual } => format!(
            "mismatch: {} (expected {}, got {})",
            target.display(),
            expected,
            actual
        ),
    }
}

pub fn format_config_toml(config: &BuildUtilConfig) -> Result<String, BuildError> {
    toml::to_string_pretty(config).map_err(|e| BuildError::OutputError(e.to_string()))
}
