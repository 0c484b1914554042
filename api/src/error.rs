//! Unified error types for the feeds API
//!
//! This module defines error types for each phase:
//! - `ConfigError`: Environment configuration errors
//! - `ParseError`: XML decoding errors
//! - `FetchError`: Upstream feed retrieval errors
//! - `StartupError`: Fatal errors before the server accepts connections
//! - `AppError`: Request-time errors (rendered as HTTP responses)

use std::net::SocketAddr;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Environment configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT is not found in the environment")]
    MissingPort,

    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),

    #[error("FEED_MAX_BODY_BYTES is not a valid byte count: {0}")]
    InvalidMaxBodyBytes(String),
}

/// XML decoding errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document has no root element")]
    Empty,

    #[error("malformed XML: {0}")]
    Xml(String),

    #[error("encoding {0:?} declared but only UTF-8 is supported")]
    UnsupportedEncoding(String),
}

/// Upstream feed retrieval errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Fatal startup errors - any of these terminates the process
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Missing feed URL argument (usage: feeds-api <feed-url>)")]
    MissingFeedUrl,

    #[error("Failed to fetch feed: {0}")]
    Fetch(FetchError),

    #[error("Failed to parse feed: {0}")]
    Parse(ParseError),

    #[error("Failed to listen on {addr}: {source}")]
    Listen {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

impl From<FetchError> for StartupError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Parse(parse) => StartupError::Parse(parse),
            other => StartupError::Fetch(other),
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Serialization(e) => {
                tracing::error!("Failed to marshal JSON response: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
