//! HTTP server initialization and runtime setup.
//!
//! Handles storage selection, database migrations and the Axum server lifecycle.

use crate::application::services::{ShortenerRegistry, UrlValidator};
use crate::config::Config;
use crate::domain::repositories::EntryRepository;
use crate::infrastructure::persistence::{InMemoryEntryRepository, PgEntryRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Connection attempts before startup gives up on the database.
const DB_CONNECT_ATTEMPTS: usize = 5;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Entry storage (PostgreSQL with migrations, or in-memory)
/// - URL validator for the configured policy
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;

    let registry = Arc::new(ShortenerRegistry::new(repository));
    let validator = Arc::new(UrlValidator::new(
        config.validation_policy,
        config.validation_timeout(),
    ));

    let state = AppState::new(registry, validator, config.invalid_url_status_code());

    let app = app_router(state, &config.static_dir, &config.views_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address: {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Selects the storage backend from configuration.
///
/// With a database URL the pool is connected (with retries) and migrations
/// are applied; otherwise entries live in process memory.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn EntryRepository>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::info!("Storage: in-memory");
        return Ok(Arc::new(InMemoryEntryRepository::new()));
    };

    let pool = connect_pool(config, database_url).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to apply migrations")?;
    tracing::info!("Migrations applied");

    Ok(Arc::new(PgEntryRepository::new(Arc::new(pool))))
}

/// Connects the PostgreSQL pool, retrying with jittered exponential backoff.
pub async fn connect_pool(config: &Config, database_url: &str) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout));

    let strategy = ExponentialBackoff::from_millis(10)
        .factor(20)
        .max_delay(Duration::from_secs(5))
        .map(jitter)
        .take(DB_CONNECT_ATTEMPTS - 1);

    Retry::start(strategy, || {
        let options = options.clone();
        async move {
            options.connect(database_url).await.inspect_err(|e| {
                tracing::warn!("Database connection attempt failed: {}", e);
            })
        }
    })
    .await
    .with_context(|| format!("Failed to connect to database after {DB_CONNECT_ATTEMPTS} attempts"))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
