//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{HttpImageFetcher, ImageFetcher, PaletteExtractor, VibrantExtractor};

/// Application state shared across all handlers.
///
/// Both collaborators sit behind traits so tests can substitute fakes.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn ImageFetcher>,
    pub extractor: Arc<dyn PaletteExtractor>,
}

/// Create application state from the resolved configuration.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let fetcher = Arc::new(HttpImageFetcher::new(config.fetch_timeout)?);
    let extractor = Arc::new(VibrantExtractor::new());

    Ok(AppState { fetcher, extractor })
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/dominant-color", post(api::handle_dominant_color))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
