//! Project root resolution
//!
//! The crate lives two directory levels below the project it serves
//! (e.g. `<root>/tools/buildutil`), so the project root is the grandparent
//! of the crate's own directory.

use std::path::{Component, Path, PathBuf};

/// Directory this crate was built from.
pub fn module_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Absolute path of the project root.
///
/// Depends only on where the crate is installed, never on the current
/// working directory.
pub fn project_root() -> PathBuf {
    root_from_module_dir(module_dir())
}

/// Compute the project root for a module living in `dir`.
pub fn root_from_module_dir(dir: &Path) -> PathBuf {
    let absolute = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(dir))
            .unwrap_or_else(|_| dir.to_path_buf())
    };
    normalize_lexically(&absolute.join("..").join(".."))
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` of a relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::ParentDir) | Some(Component::CurDir) | None => {
                    normalized.push(component);
                }
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component);
            }
        }
    }
    normalized
}
