//! RSS adapter
//!
//! HTTP retrieval and XML decoding of the upstream feed.

mod client;
mod parser;

pub use client::{RssClient, DEFAULT_MAX_BODY_BYTES};
