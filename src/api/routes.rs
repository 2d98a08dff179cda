//! API route configuration.
//!
//! Mounted under `/api` by [`crate::routes::app_router`].

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /shorturl`              - Register a URL (JSON or form body)
/// - `GET  /shorturl/{short_url}`  - 301 redirect to the registered URL
/// - `GET  /hello`                 - Greeting
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
        .route("/hello", get(hello_handler))
}
