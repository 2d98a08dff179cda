//! PostgreSQL implementation of the entry repository.
//!
//! Layout (see `migrations/`):
//!
//! - `urls(short_url BIGINT PRIMARY KEY, original_url TEXT NOT NULL UNIQUE)`
//! - `url_counter(id = 1, next_value BIGINT)`

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

/// PostgreSQL repository for entry storage and retrieval.
///
/// New ids are allocated from the `url_counter` row inside the same
/// transaction that inserts the entry, so a crash can neither reuse an id nor
/// leave a counter value without its entry.
pub struct PgEntryRepository {
    pool: Arc<PgPool>,
}

impl PgEntryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryRepository for PgEntryRepository {
    async fn insert_if_absent(&self, original: &str) -> Result<Entry, AppError> {
        let mut tx = self.pool.begin().await?;

        // Row lock on the counter serializes allocations across connections.
        let next_value: i64 =
            sqlx::query_scalar("SELECT next_value FROM url_counter WHERE id = 1 FOR UPDATE")
                .fetch_one(&mut *tx)
                .await?;

        // Re-check under the lock; a concurrent registration may have committed first.
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT short_url FROM urls WHERE original_url = $1")
                .bind(original)
                .fetch_optional(&mut *tx)
                .await?;

        if let Some(short_id) = existing {
            tx.commit().await?;
            return Ok(Entry::new(short_id, original));
        }

        sqlx::query("INSERT INTO urls (short_url, original_url) VALUES ($1, $2)")
            .bind(next_value)
            .bind(original)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE url_counter SET next_value = $1 WHERE id = 1")
            .bind(next_value + 1)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Entry::new(next_value, original))
    }

    async fn find_by_original(&self, original: &str) -> Result<Option<Entry>, AppError> {
        let short_id: Option<i64> =
            sqlx::query_scalar("SELECT short_url FROM urls WHERE original_url = $1")
                .bind(original)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(short_id.map(|short_id| Entry::new(short_id, original)))
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<Entry>, AppError> {
        let original: Option<String> =
            sqlx::query_scalar("SELECT original_url FROM urls WHERE short_url = $1")
                .bind(short_id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        Ok(original.map(|original| Entry::new(short_id, original)))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}
