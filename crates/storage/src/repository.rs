use async_trait::async_trait;
use sensei_core::model::{ProgressValidationError, TopicId, TopicProgress};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Name of the local database holding course progress.
pub const DATABASE_NAME: &str = "quality-sensei";

/// Name of the key-value store (table) inside [`DATABASE_NAME`].
pub const PROGRESS_STORE: &str = "progress";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Validation(#[from] ProgressValidationError),
}

/// Key-value store of topic completion records, keyed by topic id.
///
/// Writes are last-write-wins; there is no conflict detection between
/// concurrent writers.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the record stored under `topic`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or holds a malformed value.
    async fn get_progress(&self, topic: TopicId) -> Result<Option<TopicProgress>, StorageError>;

    /// Create or overwrite the record under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Validation` if `key` differs from the record id,
    /// in which case nothing is written.
    async fn put_progress(&self, key: TopicId, progress: &TopicProgress)
    -> Result<(), StorageError>;

    /// Every stored record, in topic catalog order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or holds a malformed value.
    async fn list_progress(&self) -> Result<Vec<TopicProgress>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    progress: Arc<Mutex<BTreeMap<TopicId, TopicProgress>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn get_progress(&self, topic: TopicId) -> Result<Option<TopicProgress>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&topic).cloned())
    }

    async fn put_progress(
        &self,
        key: TopicId,
        progress: &TopicProgress,
    ) -> Result<(), StorageError> {
        progress.check_key(key)?;
        let mut guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key, progress.clone());
        Ok(())
    }

    async fn list_progress(&self) -> Result<Vec<TopicProgress>, StorageError> {
        let guard = self
            .progress
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.values().cloned().collect())
    }
}

/// Bundles repositories behind trait objects so backends can be swapped.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let progress: Arc<dyn ProgressRepository> = Arc::new(InMemoryRepository::new());
        Self { progress }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensei_core::time::fixed_now;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_progress(TopicId::Hover).await.unwrap().is_none());

        let record = TopicProgress::completed_at(TopicId::Hover, fixed_now());
        repo.put_progress(TopicId::Hover, &record).await.unwrap();

        assert_eq!(repo.get_progress(TopicId::Hover).await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn mismatched_key_is_rejected_and_not_stored() {
        let repo = InMemoryRepository::new();
        let record = TopicProgress::completed_at(TopicId::Alerts, fixed_now());

        let err = repo.put_progress(TopicId::Waits, &record).await.unwrap_err();
        assert!(matches!(err, StorageError::Validation(_)));
        assert!(repo.list_progress().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_follows_catalog_order_and_overwrites() {
        let repo = InMemoryRepository::new();
        let later = fixed_now() + chrono::Duration::minutes(3);
        for topic in [TopicId::Waits, TopicId::Locators, TopicId::Waits] {
            repo.put_progress(topic, &TopicProgress::completed_at(topic, later))
                .await
                .unwrap();
        }
        repo.put_progress(
            TopicId::Locators,
            &TopicProgress::completed_at(TopicId::Locators, fixed_now()),
        )
        .await
        .unwrap();

        let all = repo.list_progress().await.unwrap();
        let ids: Vec<_> = all.iter().map(TopicProgress::id).collect();
        assert_eq!(ids, [TopicId::Locators, TopicId::Waits]);
        assert_eq!(all[0].last_attempt(), Some(fixed_now()));
    }
}
