#![allow(dead_code)]

use axum::Router;
use axum::http::StatusCode;
use axum_test::TestServer;
use shorturl::api;
use shorturl::application::services::{ShortenerRegistry, UrlValidator};
use shorturl::domain::repositories::EntryRepository;
use shorturl::infrastructure::persistence::{InMemoryEntryRepository, PgEntryRepository};
use shorturl::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state() -> AppState {
    create_test_state_with_status(StatusCode::OK)
}

pub fn create_test_state_with_status(invalid_url_status: StatusCode) -> AppState {
    state_for(Arc::new(InMemoryEntryRepository::new()), invalid_url_status)
}

pub fn create_pg_state(pool: PgPool) -> AppState {
    state_for(
        Arc::new(PgEntryRepository::new(Arc::new(pool))),
        StatusCode::OK,
    )
}

fn state_for(repository: Arc<dyn EntryRepository>, invalid_url_status: StatusCode) -> AppState {
    AppState::new(
        Arc::new(ShortenerRegistry::new(repository)),
        Arc::new(UrlValidator::syntax_only()),
        invalid_url_status,
    )
}

/// `/api` routes without the peer-IP rate limiter.
pub fn api_server(state: AppState) -> TestServer {
    let app = Router::new()
        .nest("/api", api::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}
