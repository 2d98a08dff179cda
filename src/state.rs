//! Shared application state injected into handlers.

use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::services::{ShortenerRegistry, UrlValidator};

/// Shared state for all request handlers.
///
/// Cloned per request; the registry and validator are shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ShortenerRegistry>,
    pub validator: Arc<UrlValidator>,
    /// Status code sent with `{"error": "invalid url"}`.
    pub invalid_url_status: StatusCode,
}

impl AppState {
    pub fn new(
        registry: Arc<ShortenerRegistry>,
        validator: Arc<UrlValidator>,
        invalid_url_status: StatusCode,
    ) -> Self {
        Self {
            registry,
            validator,
            invalid_url_status,
        }
    }
}
