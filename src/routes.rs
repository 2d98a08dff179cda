//! Top-level router configuration combining API, health and static routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Landing page (`views/index.html`)
//! - `GET  /health`      - Storage health check
//! - `/api/*`            - Shortener API (rate limited)
//! - `/public/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, any origin may call the API
//! - **Rate limiting** - Per-IP token bucket on `/api`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/public`
/// - `views_dir` - directory holding `index.html`
pub fn app_router(state: AppState, static_dir: &str, views_dir: &str) -> NormalizePath<Router> {
    let api_router = api::routes::routes().layer(rate_limit::layer());

    let index = Path::new(views_dir).join("index.html");

    let router = Router::new()
        .route_service("/", ServeFile::new(index))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest_service("/public", ServeDir::new(static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
