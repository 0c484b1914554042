//! RSS feed client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::parser::parse_feed;
use crate::domain::entities::Feed;
use crate::domain::ports::FeedSource;
use crate::error::FetchError;

/// Total time allowed for the request, including reading the body
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Default cap on the response body size (10 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Fetches an RSS document over HTTP and decodes it.
///
/// The response status is not inspected: whatever body comes back is
/// decoded, so a 404 page carrying valid RSS succeeds and a 200 carrying
/// garbage fails. There are no retries.
pub struct RssClient {
    http: Client,
    max_body_bytes: usize,
}

impl RssClient {
    pub fn new(max_body_bytes: usize) -> Result<Self, FetchError> {
        Self::with_timeout(max_body_bytes, FETCH_TIMEOUT)
    }

    pub(crate) fn with_timeout(
        max_body_bytes: usize,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            max_body_bytes,
        })
    }

    /// Read the whole body, failing once it grows past the cap
    async fn read_body(&self, mut response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let limit = self.max_body_bytes;

        if let Some(length) = response.content_length() {
            if length > limit as u64 {
                return Err(FetchError::BodyTooLarge { limit });
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > limit {
                return Err(FetchError::BodyTooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

#[async_trait]
impl FeedSource for RssClient {
    async fn fetch(&self, url: &str) -> Result<Feed, FetchError> {
        tracing::info!("Fetching data from: {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = self.read_body(response).await?;
        tracing::debug!(status = %status, bytes = body.len(), "Feed response received");

        let feed = parse_feed(&body)?;
        tracing::info!(
            title = %feed.channel.title,
            items = feed.item_count(),
            "Feed decoded"
        );

        Ok(feed)
    }
}
