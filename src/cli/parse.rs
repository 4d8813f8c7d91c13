//! CLI parse: clap types for buildutil. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// buildutil - helpers for project build scripts
#[derive(Parser)]
#[command(name = "buildutil")]
#[command(about = "Build-support helpers: project root, file listing, hashing, verified downloads")]
pub struct Cli {
    /// Command to run (defaults to `root`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the project root path
    Root,
    /// List files in a directory with the given extension (not recursive)
    List {
        /// Directory to scan
        dir: PathBuf,
        /// Extension without the leading dot
        ext: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the SHA-1 of a file (empty when the file does not exist)
    Hash {
        /// File to hash
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Download a file unless the local copy already has the expected SHA-1
    Fetch {
        /// Source URL
        url: String,
        /// Local target path
        target: PathBuf,
        /// Expected SHA-1; omit to download and report the hash
        #[arg(long)]
        sha1: Option<String>,
    },
    /// Print the path of the legacy (2.7) interpreter
    Interpreter {
        /// Interpreter to probe (overrides config)
        #[arg(long)]
        program: Option<String>,
    },
    /// Print the effective configuration
    Config,
}
