use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait Fetcher: Send + Sync {
    /// `Ok(None)` means the server answered but had nothing for us; errors are
    /// reserved for transport failures.
    async fn fetch(&self, url: &str) -> Result<Option<Vec<u8>>>;
}

pub trait Extractor: Send + Sync {
    /// Unpacks `payload` under `destination` and returns the number of files written.
    fn extract(&self, payload: &[u8], destination: &Path) -> Result<usize>;
}
