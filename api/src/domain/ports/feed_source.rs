//! Feed source port trait
//!
//! Defines how the startup sequence obtains the feed snapshot.

use async_trait::async_trait;

use crate::domain::entities::Feed;
use crate::error::FetchError;

/// Retrieves and decodes a feed from a URL
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the document at `url` and decode it.
    ///
    /// Called exactly once per process. Implementations must not retry.
    async fn fetch(&self, url: &str) -> Result<Feed, FetchError>;
}
