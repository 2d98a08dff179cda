//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{short_url}`
///
/// # Responses
///
/// - **301 Moved Permanently** with `Location` set to the original URL
/// - **404 Not Found** with `{"error": "Not Found"}` when the id is unknown,
///   non-numeric, zero or negative
///
/// The original URL is written to `Location` exactly as it was registered.
pub async fn redirect_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.registry.resolve_raw(&short_url).await?;

    debug!("Redirecting {} -> {}", entry.short_id, entry.original);

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, entry.original)],
    ))
}
