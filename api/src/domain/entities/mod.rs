//! Domain entities
//!
//! Pure data mirroring the RSS documents served by the API.

pub mod feed;

pub use feed::{Channel, Feed, FeedItem};
