//! Legacy interpreter lookup
//!
//! Some build steps need a Python 2.7 runtime. The lookup takes an explicit
//! [`RuntimeEnv`] so it can be exercised without touching the real process
//! environment; [`RuntimeEnv::detect`] builds one from the running system.

use crate::config::InterpreterConfig;
use semver::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Major and minor version of the legacy runtime.
pub const LEGACY_VERSION: (u64, u64) = (2, 7);

const UNIX_LEGACY_PATH: &str = "/usr/local/bin/python2.7";
const WINDOWS_LEGACY_PATH: &str = r"C:\Python27\python.exe";

/// Prints the executable path and `major.minor.micro`; valid under 2.x and 3.x.
const PROBE_SCRIPT: &str =
    "import sys; print(sys.executable); print('%d.%d.%d' % tuple(sys.version_info[:3]))";

/// Host operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    Unknown,
}

impl Platform {
    /// Platform of the current build target.
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    /// Map an OS identifier to a platform.
    ///
    /// Accepts Rust target names (`linux`, `macos`, `windows`) as well as
    /// interpreter-style names (`linux2`, `darwin`, `win32`).
    pub fn from_identifier(id: &str) -> Self {
        if id.starts_with("linux") {
            Platform::Linux
        } else if id == "macos" || id == "darwin" {
            Platform::MacOs
        } else if id == "windows" || id == "win32" {
            Platform::Windows
        } else {
            Platform::Unknown
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Linux => "linux",
            Platform::MacOs => "macos",
            Platform::Windows => "windows",
            Platform::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// An interpreter found running on this system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningRuntime {
    pub version: Version,
    pub executable: PathBuf,
}

impl RunningRuntime {
    pub fn is_legacy(&self) -> bool {
        (self.version.major, self.version.minor) == LEGACY_VERSION
    }
}

/// The parts of the process environment the interpreter lookup depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeEnv {
    pub platform: Platform,
    pub runtime: Option<RunningRuntime>,
}

impl RuntimeEnv {
    pub fn new(platform: Platform, runtime: Option<RunningRuntime>) -> Self {
        Self { platform, runtime }
    }

    /// Describe the current system, probing `program` for the running runtime.
    pub fn detect(program: &str) -> Self {
        Self::new(Platform::current(), probe_runtime(program))
    }
}

/// Run `program` and read back its executable path and version.
///
/// Returns `None` when the program cannot be started, exits unsuccessfully,
/// or prints something unexpected.
pub fn probe_runtime(program: &str) -> Option<RunningRuntime> {
    let output = match Command::new(program).args(["-c", PROBE_SCRIPT]).output() {
        Ok(output) => output,
        Err(e) => {
            debug!(program, error = %e, "Interpreter probe could not start");
            return None;
        }
    };
    if !output.status.success() {
        debug!(program, status = %output.status, "Interpreter probe failed");
        return None;
    }

    let runtime = parse_probe_output(&String::from_utf8_lossy(&output.stdout));
    if runtime.is_none() {
        debug!(program, "Interpreter probe output not understood");
    }
    runtime
}

fn parse_probe_output(stdout: &str) -> Option<RunningRuntime> {
    let mut lines = stdout.lines().map(str::trim).filter(|l| !l.is_empty());
    let executable = lines.next()?;
    let version = Version::parse(lines.next()?).ok()?;
    Some(RunningRuntime {
        version,
        executable: PathBuf::from(executable),
    })
}

/// Well-known legacy interpreter install paths per platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterTable {
    linux: Option<PathBuf>,
    macos: Option<PathBuf>,
    windows: Option<PathBuf>,
}

impl Default for InterpreterTable {
    fn default() -> Self {
        Self {
            linux: Some(PathBuf::from(UNIX_LEGACY_PATH)),
            macos: Some(PathBuf::from(UNIX_LEGACY_PATH)),
            windows: Some(PathBuf::from(WINDOWS_LEGACY_PATH)),
        }
    }
}

impl InterpreterTable {
    /// Default table with any configured paths taking precedence.
    pub fn with_overrides(config: &InterpreterConfig) -> Self {
        let defaults = Self::default();
        Self {
            linux: config.linux.clone().or(defaults.linux),
            macos: config.macos.clone().or(defaults.macos),
            windows: config.windows.clone().or(defaults.windows),
        }
    }

    /// Install path for `platform`, if one is known.
    pub fn path_for(&self, platform: Platform) -> Option<&Path> {
        match platform {
            Platform::Linux => self.linux.as_deref(),
            Platform::MacOs => self.macos.as_deref(),
            Platform::Windows => self.windows.as_deref(),
            Platform::Unknown => None,
        }
    }

    /// Resolve the legacy interpreter for `env`.
    ///
    /// A running legacy runtime wins; otherwise the platform entry is
    /// returned without checking that it exists.
    pub fn locate(&self, env: &RuntimeEnv) -> Option<PathBuf> {
        if let Some(runtime) = env.runtime.as_ref().filter(|r| r.is_legacy()) {
            return Some(runtime.executable.clone());
        }
        self.path_for(env.platform).map(Path::to_path_buf)
    }
}

/// Resolve the legacy interpreter for `env` using the default install paths.
pub fn locate_legacy_interpreter(env: &RuntimeEnv) -> Option<PathBuf> {
    InterpreterTable::default().locate(env)
}
