//! In-memory implementation of the entry repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::Entry;
use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

/// Both lookup directions and the counter, always updated together.
#[derive(Debug)]
struct Mappings {
    by_original: HashMap<String, i64>,
    by_short_id: HashMap<i64, String>,
    next_short_id: i64,
}

/// Process-local entry storage.
///
/// A single `RwLock` covers the two maps and the counter, so a reader never
/// sees an entry in one direction but not the other. State is lost on restart.
#[derive(Debug)]
pub struct InMemoryEntryRepository {
    inner: RwLock<Mappings>,
}

impl InMemoryEntryRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Mappings {
                by_original: HashMap::new(),
                by_short_id: HashMap::new(),
                next_short_id: 1,
            }),
        }
    }

    /// The id the next new URL will receive.
    pub async fn next_short_id(&self) -> i64 {
        self.inner.read().await.next_short_id
    }
}

impl Default for InMemoryEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EntryRepository for InMemoryEntryRepository {
    async fn insert_if_absent(&self, original: &str) -> Result<Entry, AppError> {
        let mut map = self.inner.write().await;

        if let Some(&short_id) = map.by_original.get(original) {
            return Ok(Entry::new(short_id, original));
        }

        let short_id = map.next_short_id;
        map.next_short_id += 1;
        map.by_original.insert(original.to_string(), short_id);
        map.by_short_id.insert(short_id, original.to_string());

        Ok(Entry::new(short_id, original))
    }

    async fn find_by_original(&self, original: &str) -> Result<Option<Entry>, AppError> {
        let map = self.inner.read().await;
        Ok(map
            .by_original
            .get(original)
            .map(|&short_id| Entry::new(short_id, original)))
    }

    async fn find_by_short_id(&self, short_id: i64) -> Result<Option<Entry>, AppError> {
        let map = self.inner.read().await;
        Ok(map
            .by_short_id
            .get(&short_id)
            .map(|original| Entry::new(short_id, original.clone())))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let map = self.inner.read().await;
        Ok(map.by_short_id.len() as i64)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_ids_start_at_one_and_increase() {
        let repo = InMemoryEntryRepository::new();

        let a = repo.insert_if_absent("https://a.example.com").await.unwrap();
        let b = repo.insert_if_absent("https://b.example.com").await.unwrap();
        let c = repo.insert_if_absent("https://c.example.com").await.unwrap();

        assert_eq!(a.short_id, 1);
        assert_eq!(b.short_id, 2);
        assert_eq!(c.short_id, 3);
        assert_eq!(repo.next_short_id().await, 4);
    }

    #[tokio::test]
    async fn test_insert_is_idempotent() {
        let repo = InMemoryEntryRepository::new();

        let first = repo.insert_if_absent("https://example.com").await.unwrap();
        let second = repo.insert_if_absent("https://example.com").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.next_short_id().await, 2);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_lookups_agree() {
        let repo = InMemoryEntryRepository::new();
        let urls = [
            "https://example.com",
            "https://example.com/",
            "https://www.freecodecamp.org",
        ];

        let mut entries = Vec::new();
        for url in urls {
            entries.push(repo.insert_if_absent(url).await.unwrap());
        }

        for entry in &entries {
            let by_id = repo.find_by_short_id(entry.short_id).await.unwrap();
            assert_eq!(by_id.as_ref(), Some(entry));

            let by_original = repo.find_by_original(&entry.original).await.unwrap();
            assert_eq!(by_original.as_ref(), Some(entry));
        }

        let ids: HashSet<i64> = entries.iter().map(|e| e.short_id).collect();
        assert_eq!(ids.len(), urls.len());
    }

    #[tokio::test]
    async fn test_unknown_lookups_return_none() {
        let repo = InMemoryEntryRepository::new();

        assert!(repo.find_by_short_id(1).await.unwrap().is_none());
        assert!(
            repo.find_by_original("https://example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registration_allocates_once() {
        let repo = Arc::new(InMemoryEntryRepository::new());

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert_if_absent("https://concurrent.example.com")
                        .await
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().short_id, 1);
        }

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.next_short_id().await, 2);
    }
}
