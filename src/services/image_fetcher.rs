use crate::error::FetchError;
use async_trait::async_trait;
use std::time::Duration;

/// Fetches arbitrary binary resources by URL.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Fetch the raw bytes at `url`. Non-2xx upstream responses are errors.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// HTTP(S) image fetcher backed by a shared reqwest client.
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        tracing::debug!(url = %url, bytes = bytes.len(), "Fetched image");
        Ok(bytes.to_vec())
    }
}
