//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Storage answered
/// - **503 Service Unavailable**: Storage ping failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "postgres, 42 entries" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage_check = check_storage(&state).await;

    let healthy = storage_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage: storage_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Pings the storage backend and reports its entry count.
///
/// Failure details are logged; the response only names the backend.
async fn check_storage(state: &AppState) -> CheckStatus {
    let backend = state.registry.backend();

    let count = match state.registry.ping().await {
        Ok(()) => state.registry.count().await,
        Err(e) => Err(e),
    };

    match count {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{backend}, {count} entries")),
        },
        Err(e) => {
            tracing::error!("Health check failed for {} storage: {}", backend, e);
            CheckStatus {
                status: "error".to_string(),
                message: Some(format!("{backend}: unavailable")),
            }
        }
    }
}
