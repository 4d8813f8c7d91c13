//! Directory listing filtered by file extension

use std::path::{Path, PathBuf};
use tracing::debug;

/// List the immediate entries of `root` whose name ends in `.{ext}`.
///
/// The scan is not recursive and the returned paths are `root` joined with
/// each matching name, in whatever order the directory listing yields them.
/// A missing `root`, or one that is not a directory, is an I/O error.
pub fn list_files_by_extension(root: &Path, ext: &str) -> std::io::Result<Vec<PathBuf>> {
    let suffix = format!(".{}", ext);
    let mut matches = Vec::new();

    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(&suffix) {
            matches.push(root.join(name));
        }
    }

    debug!(
        root = %root.display(),
        ext,
        count = matches.len(),
        "Listed files by extension"
    );
    Ok(matches)
}
