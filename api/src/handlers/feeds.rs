//! Feed handlers
//!
//! Serves the snapshot fetched at startup.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::domain::entities::Feed;
use crate::error::AppError;
use crate::AppState;

pub const GREETING: &str = "Hello there";

/// Envelope returned by `GET /feeds`
#[derive(Serialize)]
pub struct FeedsResponse<'a> {
    pub greeting: &'static str,
    pub response: &'a Feed,
}

/// GET /feeds
///
/// Returns the startup snapshot wrapped in the greeting envelope.
/// Query string, headers and body are ignored.
pub async fn get_feeds(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = serde_json::to_vec(&FeedsResponse {
        greeting: GREETING,
        response: state.snapshot.as_ref(),
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
