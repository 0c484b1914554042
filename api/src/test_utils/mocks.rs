//! Mock implementations of port traits

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::Feed;
use crate::domain::ports::FeedSource;
use crate::error::{FetchError, ParseError};

// ============================================================================
// Static Feed Source
// ============================================================================

/// Returns a fixed feed (or a parse failure) and records every call
#[derive(Default)]
pub struct StaticFeedSource {
    feed: Option<Feed>,
    calls: Arc<AtomicUsize>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl StaticFeedSource {
    pub fn new(feed: Feed) -> Self {
        Self {
            feed: Some(feed),
            ..Self::default()
        }
    }

    /// A source whose every fetch fails to parse
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch(&self, url: &str) -> Result<Feed, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.to_string());
        self.feed
            .clone()
            .ok_or(FetchError::Parse(ParseError::Empty))
    }
}
