use crate::domain::ports::Fetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Plain GET with the client's default timeout and redirect policy.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Ok(None);
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);
        Ok(Some(body.to_vec()))
    }
}
