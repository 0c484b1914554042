//! Feeds API Server
//!
//! Fetches one RSS feed at startup and serves the decoded snapshot as JSON.
//! Laid out as ports & adapters: `domain` holds the model and the `FeedSource` port,
//! `adapters` the HTTP/XML implementation, `handlers` the single route.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::RssClient;
use config::Config;
use domain::entities::Feed;
use domain::ports::FeedSource;
use error::StartupError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Feed fetched once at startup, never mutated afterwards
    pub snapshot: Arc<Feed>,
}

/// Origins are accepted when they match `http://*` or `https://*`.
fn is_allowed_origin(origin: &HeaderValue) -> bool {
    origin
        .to_str()
        .map(|o| o.starts_with("http://") || o.starts_with("https://"))
        .unwrap_or(false)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin, _| is_allowed_origin(origin)))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(false)
        .expose_headers([header::LINK])
        .max_age(Duration::from_secs(300))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/feeds", get(handlers::get_feeds))
        // Middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fetch the snapshot exactly once. Any failure is fatal.
async fn load_snapshot<S: FeedSource>(source: &S, url: &str) -> Result<Arc<Feed>, StartupError> {
    let feed = source.fetch(url).await?;
    Ok(Arc::new(feed))
}

async fn run() -> Result<(), StartupError> {
    // PORT is checked before the argument is read and before any network call
    let config = Config::from_env()?;
    let url = config::feed_url_from_args(std::env::args()).ok_or(StartupError::MissingFeedUrl)?;

    let client = RssClient::new(config.max_body_bytes).map_err(StartupError::Fetch)?;
    let snapshot = load_snapshot(&client, &url).await?;

    let app = build_router(AppState { snapshot });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Listen { addr, source })?;
    tracing::info!("Server starting on port {}", config.port);

    axum::serve(listener, app)
        .await
        .map_err(|source| StartupError::Listen { addr, source })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,feeds_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
