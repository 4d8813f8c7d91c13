//! buildutil: build-support helpers
//!
//! Small, independent operations used by project build scripts: locating the
//! project root, listing files by extension, hashing file contents,
//! downloading assets only when their hash is stale, and finding the legacy
//! interpreter some build steps still need.

pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod fetch;
pub mod files;
pub mod interpreter;
pub mod logging;
pub mod project;

pub use digest::{hash_of_file, NO_HASH};
pub use error::BuildError;
pub use fetch::{fetch_if_needed, FetchOutcome, HttpTransport, Transport};
pub use files::list_files_by_extension;
pub use interpreter::{locate_legacy_interpreter, Platform, RuntimeEnv};
pub use project::project_root;
