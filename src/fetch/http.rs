//! HTTP transport backed by the blocking reqwest client

use crate::error::BuildError;
use crate::fetch::Transport;
use reqwest::blocking::Client;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Plain GET retrieval with the client's default redirect policy.
///
/// Non-success statuses are errors. No retries and no timeout.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, BuildError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn retrieve(&self, url: &str, target: &Path) -> Result<(), BuildError> {
        let mut response = self.client.get(url).send()?.error_for_status()?;
        let mut file = File::create(target)?;
        let bytes = response.copy_to(&mut file)?;
        debug!(url, path = %target.display(), bytes, "Retrieved asset");
        Ok(())
    }
}
