//! DTOs for the short URL endpoints.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header,
};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use tracing::debug;
use validator::Validate;

use crate::domain::entities::Entry;

/// Request to shorten one URL.
///
/// A missing `url` field deserializes to an empty string, which fails
/// validation like any other invalid URL.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 2048))]
    pub url: String,
}

/// Successful shorten response.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_url: i64,
}

impl From<Entry> for ShortenResponse {
    fn from(entry: Entry) -> Self {
        Self {
            original_url: entry.original,
            short_url: entry.short_id,
        }
    }
}

/// Body extractor accepting JSON or URL-encoded forms.
///
/// `application/json` bodies are decoded as JSON, everything else as a form.
/// Undecodable bodies yield an empty [`ShortenRequest`] instead of a rejection,
/// so the handler answers with the usual `invalid url` payload.
#[derive(Debug)]
pub struct ShortenBody(pub ShortenRequest);

impl<S> FromRequest<S> for ShortenBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        let parsed = if is_json {
            Json::<ShortenRequest>::from_request(req, state)
                .await
                .map(|Json(body)| body)
                .map_err(|e| e.body_text())
        } else {
            Form::<ShortenRequest>::from_request(req, state)
                .await
                .map(|Form(body)| body)
                .map_err(|e| e.body_text())
        };

        let request = parsed.unwrap_or_else(|reason| {
            debug!(%reason, "Undecodable shorten request body");
            ShortenRequest::default()
        });

        Ok(Self(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::url_shape::MAX_URL_LENGTH;

    #[test]
    fn test_request_validation() {
        let ok = ShortenRequest {
            url: "https://example.com".to_string(),
        };
        assert!(ok.validate().is_ok());

        assert!(ShortenRequest::default().validate().is_err());

        let too_long = ShortenRequest {
            url: "a".repeat(MAX_URL_LENGTH + 1),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_missing_url_field_defaults_to_empty() {
        let request: ShortenRequest = serde_json::from_str("{}").unwrap();
        assert!(request.url.is_empty());
    }

    #[test]
    fn test_response_from_entry() {
        let response = ShortenResponse::from(Entry::new(1, "https://example.com"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "original_url": "https://example.com", "short_url": 1 })
        );
    }
}
