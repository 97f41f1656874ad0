use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alumnet_common::Config;
use alumnet_feed::HttpSheetFetcher;

mod rest;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("alumnet_api=info".parse()?)
                .add_directive("alumnet_feed=info".parse()?),
        )
        .init();

    let config = Config::from_env();

    let state = Arc::new(AppState::new(Box::new(HttpSheetFetcher::new(
        &config.feed_url,
    ))));

    // Initial load. The server still starts when the feed is down; the
    // recorded error is served until a refresh succeeds.
    if let Err(e) = state.refresh().await {
        warn!(error = %e, "Initial directory load failed");
    }

    let app = Router::new()
        // Health check
        .route("/", get(|| async { "ok" }))
        // Directory API
        .route("/api/status", get(rest::api_status))
        .route("/api/profiles", get(rest::api_profiles))
        .route("/api/profiles/{id}", get(rest::api_profile_detail))
        .route("/api/facets", get(rest::api_facets))
        .route("/api/graph", get(rest::api_graph))
        .route("/api/search", get(rest::api_search))
        .route("/api/refresh", post(rest::api_refresh))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // The collection is replaced wholesale on refresh; never cache it.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    info!(addr = %addr, "Starting alumnet API");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
