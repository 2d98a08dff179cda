//! Short id allocation and lookup service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

/// Owns all entries through its repository and resolves short ids.
///
/// Registration is idempotent: re-submitting a known URL returns its existing
/// entry without advancing the counter. The caller validates URLs first; the
/// registry never re-validates.
pub struct ShortenerRegistry {
    repository: Arc<dyn EntryRepository>,
}

impl ShortenerRegistry {
    /// Creates a new registry over `repository`.
    pub fn new(repository: Arc<dyn EntryRepository>) -> Self {
        Self { repository }
    }

    /// Returns the entry for `original`, creating it on first registration.
    ///
    /// # Deduplication
    ///
    /// A plain lookup runs first so known URLs never enter the repository's
    /// critical section. Misses go through
    /// [`EntryRepository::insert_if_absent`], which re-checks under its lock.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached. The
    /// call is safe to retry.
    pub async fn register_or_get(&self, original: &str) -> Result<Entry, AppError> {
        if let Some(existing) = self.repository.find_by_original(original).await? {
            debug!(short_id = existing.short_id, "URL already registered");
            return Ok(existing);
        }

        let entry = self.repository.insert_if_absent(original).await?;
        info!(short_id = entry.short_id, original = %entry.original, "Registered URL");

        Ok(entry)
    }

    /// Resolves a short id to its entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has this id.
    /// Returns [`AppError::Unavailable`] on storage errors.
    pub async fn resolve(&self, short_id: i64) -> Result<Entry, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(AppError::not_found)
    }

    /// Resolves a raw path segment.
    ///
    /// Anything that is not a positive integer is [`AppError::NotFound`]
    /// without touching the store.
    pub async fn resolve_raw(&self, raw: &str) -> Result<Entry, AppError> {
        match raw.parse::<i64>() {
            Ok(short_id) if short_id > 0 => self.resolve(short_id).await,
            _ => {
                debug!(raw, "Short id is not a positive integer");
                Err(AppError::not_found())
            }
        }
    }

    /// Number of registered entries.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks that the backing store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    pub fn backend(&self) -> &'static str {
        self.repository.backend()
    }
}
