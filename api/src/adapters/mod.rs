//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod rss;

pub use rss::{RssClient, DEFAULT_MAX_BODY_BYTES};
