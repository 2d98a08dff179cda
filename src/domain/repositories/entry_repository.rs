//! Repository trait for short URL entries.

use crate::domain::entities::Entry;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface owning all entries and the short id counter.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryEntryRepository`] - process-local maps
/// - [`crate::infrastructure::persistence::PgEntryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Returns the entry registered for `original`, or allocates the next short id
    /// and stores a new one.
    ///
    /// Check, allocation and insert happen atomically: concurrent calls for the
    /// same unseen URL produce exactly one entry and advance the counter once.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    async fn insert_if_absent(&self, original: &str) -> Result<Entry, AppError>;

    /// Finds an entry by its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    async fn find_by_original(&self, original: &str) -> Result<Option<Entry>, AppError>;

    /// Finds an entry by its short id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Entry))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the store cannot be reached.
    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<Entry>, AppError>;

    /// Counts registered entries.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the backing store is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Short backend name used in health output and logs.
    fn backend(&self) -> &'static str;
}
