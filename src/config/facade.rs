//! Config loading facade: assembles sources in precedence order.

use super::merge::merge_policy;
use super::sources::{global_file, project_file};
use super::BuildUtilConfig;
use crate::error::BuildError;
use config::{Environment, File};
use std::path::Path;

/// Loads [`BuildUtilConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a project.
    ///
    /// Precedence (highest last): defaults, global file, project files,
    /// `BUILDUTIL__<SECTION>__<KEY>` environment variables.
    pub fn load(project_root: &Path) -> Result<BuildUtilConfig, BuildError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = project_file::add_to_builder(builder, project_root)?;
        let config = builder
            .add_source(environment())
            .build()?
            .try_deserialize::<BuildUtilConfig>()?;
        Ok(config)
    }

    /// Load configuration from a single file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<BuildUtilConfig, BuildError> {
        let config = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize::<BuildUtilConfig>()?;
        Ok(config)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("BUILDUTIL")
        .prefix_separator("__")
        .separator("__")
}
