//! Application error type shared by repositories, services and handlers.
//!
//! Every variant renders as a flat `{"error": "..."}` JSON body.
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | [`AppError::InvalidInput`] | configured (200 or 400) | `invalid url` |
//! | [`AppError::NotFound`] | 404 | `Not Found` |
//! | [`AppError::Unavailable`] | 503 | `Service Unavailable` |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Submitted URL is malformed or unreachable.
    ///
    /// `status` is decided by the request layer configuration.
    #[error("invalid url")]
    InvalidInput { status: StatusCode },

    /// Unknown short id.
    #[error("Not Found")]
    NotFound,

    /// Storage or network dependency is down or timed out.
    ///
    /// `message` is logged, never returned to the client.
    #[error("service unavailable: {message}")]
    Unavailable { message: String },
}

impl AppError {
    pub fn invalid_input(status: StatusCode) -> Self {
        Self::InvalidInput { status }
    }
    pub fn not_found() -> Self {
        Self::NotFound
    }
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Client-facing error string.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "invalid url",
            AppError::NotFound => "Not Found",
            AppError::Unavailable { .. } => "Service Unavailable",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { status } => *status,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Unavailable { message } = &self {
            tracing::error!("Storage unavailable: {}", message);
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::unavailable(format!("database error: {e}"))
    }
}
