//! CLI route: single route table and run context. Dispatches to library operations and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_config_toml, format_fetch_outcome, format_file_list, format_hash, format_root,
};
use crate::config::{BuildUtilConfig, ConfigLoader};
use crate::digest::hash_of_file;
use crate::error::BuildError;
use crate::fetch::{fetch_if_needed, FetchOutcome, HttpTransport, Transport};
use crate::files::list_files_by_extension;
use crate::interpreter::{InterpreterTable, RuntimeEnv};
use crate::project::project_root;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: loaded configuration and project root.
pub struct RunContext {
    config: BuildUtilConfig,
    project_root: PathBuf,
}

impl RunContext {
    /// Create run context, loading config from `config_path` or the project's layered sources.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, BuildError> {
        let project_root = project_root();
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&project_root)?,
        };
        Self::with_config(config, project_root)
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(config: BuildUtilConfig, project_root: PathBuf) -> Result<Self, BuildError> {
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            BuildError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(Self {
            config,
            project_root,
        })
    }

    /// Run a command; `None` behaves like `root`.
    pub fn execute(&self, command: Option<&Commands>) -> Result<String, BuildError> {
        match command {
            None | Some(Commands::Root) => Ok(format_root(&self.project_root)),
            Some(Commands::List { dir, ext, format }) => {
                let files = list_files_by_extension(dir, ext)?;
                format_file_list(&files, *format)
            }
            Some(Commands::Hash { file, format }) => {
                let hash = hash_of_file(file)?;
                format_hash(file, &hash, *format)
            }
            Some(Commands::Fetch { url, target, sha1 }) => {
                let transport = HttpTransport::new()?;
                self.fetch(&transport, url, target, sha1.as_deref())
            }
            Some(Commands::Interpreter { program }) => {
                let program = program.as_deref().unwrap_or(&self.config.interpreter.program);
                self.interpreter(&RuntimeEnv::detect(program))
            }
            Some(Commands::Config) => format_config_toml(&self.config),
        }
    }

    /// Fetch through `transport`, turning a hash mismatch into an error.
    pub fn fetch<T: Transport + ?Sized>(
        &self,
        transport: &T,
        url: &str,
        target: &Path,
        sha1: Option<&str>,
    ) -> Result<String, BuildError> {
        match fetch_if_needed(transport, url, target, sha1)? {
            FetchOutcome::Mismatch { expected, actual } => {
                Err(BuildError::HashMismatch { expected, actual })
            }
            outcome => Ok(format_fetch_outcome(target, &outcome)),
        }
    }

    /// Resolve the legacy interpreter for `env` with configured overrides applied.
    pub fn interpreter(&self, env: &RuntimeEnv) -> Result<String, BuildError> {
        debug!(platform = %env.platform, runtime = ?env.runtime, "Locating legacy interpreter");
        InterpreterTable::with_overrides(&self.config.interpreter)
            .locate(env)
            .map(|path| path.display().to_string())
            .ok_or(BuildError::NoLegacyInterpreter(env.platform))
    }
}
