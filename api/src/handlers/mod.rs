//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod feeds;

pub use feeds::get_feeds;
