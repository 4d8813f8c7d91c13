//! CLI domain: parse, route, output, and presentation only.
//! No domain logic; the route table dispatches to the library operations.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_config_toml, format_fetch_outcome, format_file_list, format_hash, format_root,
};
pub use route::RunContext;
