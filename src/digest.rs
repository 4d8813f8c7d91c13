//! Content hashing for build assets using SHA-1

use sha1::{Digest, Sha1};
use std::path::Path;
use tracing::debug;

/// Returned by [`hash_of_file`] when the file does not exist.
pub const NO_HASH: &str = "";

/// Compute the lowercase hex SHA-1 digest of a byte buffer.
pub fn hash_bytes(content: &[u8]) -> String {
    hex::encode(Sha1::digest(content))
}

/// Compute the content hash of a file.
///
/// A missing file yields [`NO_HASH`] rather than an error. Any other failure
/// to read the file (permissions, path is a directory) is returned as-is.
pub fn hash_of_file(path: &Path) -> std::io::Result<String> {
    if !path.exists() {
        debug!(path = %path.display(), "No file to hash");
        return Ok(NO_HASH.to_string());
    }

    let content = std::fs::read(path)?;
    let hash = hash_bytes(&content);
    debug!(path = %path.display(), bytes = content.len(), sha1 = %hash, "Hashed file");
    Ok(hash)
}
