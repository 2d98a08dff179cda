//! Handler for URL registration.

use axum::{Json, extract::State};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenBody, ShortenResponse};
use crate::application::services::Verdict;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a URL and returns its short id.
///
/// # Endpoint
///
/// `POST /api/shorturl`
///
/// # Request Body
///
/// `application/json` or `application/x-www-form-urlencoded` with a single
/// `url` field.
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// Registering the same URL again returns the same `short_url`.
///
/// # Errors
///
/// - `{"error": "invalid url"}` with the configured status (200 or 400) when
///   the URL fails the active validation policy
/// - 503 when storage is unavailable
pub async fn shorten_handler(
    State(state): State<AppState>,
    ShortenBody(payload): ShortenBody,
) -> Result<Json<ShortenResponse>, AppError> {
    if let Err(e) = payload.validate() {
        debug!("Rejected shorten request: {}", e);
        return Err(AppError::invalid_input(state.invalid_url_status));
    }

    if let Verdict::Rejected(reason) = state.validator.validate(&payload.url).await {
        debug!(url = %payload.url, %reason, "URL rejected by {} policy", state.validator.policy());
        return Err(AppError::invalid_input(state.invalid_url_status));
    }

    let entry = state.registry.register_or_get(&payload.url).await?;

    Ok(Json(entry.into()))
}
