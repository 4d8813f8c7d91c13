//! Configuration sources, lowest precedence first.

pub mod global_file;
pub mod project_file;
