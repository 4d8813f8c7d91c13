//! Conditional asset download
//!
//! Downloads a remote file only when the local copy does not already carry
//! the expected SHA-1, so repeated builds skip the network entirely once an
//! asset is in place. With no expected hash the download runs in discovery
//! mode and reports the digest of whatever arrived.

use crate::digest::hash_of_file;
use crate::error::BuildError;
use std::path::Path;
use tracing::{info, warn};

pub mod http;

pub use http::HttpTransport;

/// Retrieves the contents of a URL into a local file
pub trait Transport {
    /// Write the body at `url` to `target`, replacing any existing file.
    fn retrieve(&self, url: &str, target: &Path) -> Result<(), BuildError>;
}

/// Result of [`fetch_if_needed`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The target already had the expected hash; nothing was downloaded.
    AlreadyPresent,
    /// Downloaded and the content matched the expected hash.
    Verified,
    /// Downloaded without an expected hash; carries the digest of the result.
    Discovered { hash: String },
    /// Downloaded content did not match; the target has been removed.
    Mismatch { expected: String, actual: String },
}

impl FetchOutcome {
    pub fn succeeded(&self) -> bool {
        !matches!(self, FetchOutcome::Mismatch { .. })
    }
}

/// Download `url` into `target` unless it already has the `expected` hash.
///
/// Transport and filesystem errors are returned unchanged and leave no
/// cleanup behind. A hash mismatch is not an error: the downloaded file is
/// deleted and [`FetchOutcome::Mismatch`] is returned.
pub fn fetch_if_needed<T: Transport + ?Sized>(
    transport: &T,
    url: &str,
    target: &Path,
    expected: Option<&str>,
) -> Result<FetchOutcome, BuildError> {
    let current = hash_of_file(target)?;
    if expected == Some(current.as_str()) {
        info!(path = %target.display(), "Asset already up to date");
        return Ok(FetchOutcome::AlreadyPresent);
    }

    info!(url, path = %target.display(), "Downloading asset");
    transport.retrieve(url, target)?;
    let actual = hash_of_file(target)?;

    let Some(expected) = expected else {
        info!(path = %target.display(), sha1 = %actual, "Discovered asset hash");
        return Ok(FetchOutcome::Discovered { hash: actual });
    };

    if actual != expected {
        warn!(
            url,
            path = %target.display(),
            expected,
            actual = %actual,
            "Downloaded asset hash mismatch, removing"
        );
        if target.exists() {
            std::fs::remove_file(target)?;
        }
        return Ok(FetchOutcome::Mismatch {
            expected: expected.to_string(),
            actual,
        });
    }

    Ok(FetchOutcome::Verified)
}
