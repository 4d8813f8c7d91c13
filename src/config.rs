//! Configuration System
//!
//! Layered configuration for the build utilities: merge-policy defaults, the
//! user's global config file, project config files, then `BUILDUTIL__*`
//! environment variables. Tests included.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildUtilConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Legacy interpreter lookup
    #[serde(default)]
    pub interpreter: InterpreterConfig,
}

/// Legacy interpreter lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Program probed to find the running interpreter
    #[serde(default = "default_program")]
    pub program: String,

    /// Install path overrides per platform
    #[serde(default)]
    pub linux: Option<PathBuf>,
    #[serde(default)]
    pub macos: Option<PathBuf>,
    #[serde(default)]
    pub windows: Option<PathBuf>,
}

fn default_program() -> String {
    "python".to_string()
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            linux: None,
            macos: None,
            windows: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Logging(String),
    Interpreter(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
            ValidationError::Interpreter(msg) => write!(f, "Interpreter: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl InterpreterConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("Probe program cannot be empty".to_string());
        }
        for (platform, path) in [
            ("linux", &self.linux),
            ("macos", &self.macos),
            ("windows", &self.windows),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(format!("Path override for {} cannot be empty", platform));
            }
        }
        Ok(())
    }
}

impl BuildUtilConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }
        if let Err(e) = self.interpreter.validate() {
            errors.push(ValidationError::Interpreter(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
