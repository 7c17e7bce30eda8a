use async_trait::async_trait;
use sensei_core::model::{TopicId, TopicProgress};

use crate::repository::{ProgressRepository, StorageError};

use super::SqliteRepository;
use super::mapping::{encode_progress, map_progress_row};

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn get_progress(&self, topic: TopicId) -> Result<Option<TopicProgress>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT key, value
            FROM progress
            WHERE key = ?1
            ",
        )
        .bind(topic.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        row.as_ref().map(map_progress_row).transpose()
    }

    async fn put_progress(
        &self,
        key: TopicId,
        progress: &TopicProgress,
    ) -> Result<(), StorageError> {
        progress.check_key(key)?;
        let value = encode_progress(progress)?;

        sqlx::query(
            r"
            INSERT INTO progress (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key.as_str())
        .bind(value)
        .bind(self.clock.now())
        .execute(&self.pool)
        .await
        .map_err(|err| StorageError::Connection(err.to_string()))?;

        Ok(())
    }

    async fn list_progress(&self) -> Result<Vec<TopicProgress>, StorageError> {
        let rows = sqlx::query("SELECT key, value FROM progress")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| StorageError::Connection(err.to_string()))?;

        let mut records = rows
            .iter()
            .map(map_progress_row)
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by_key(TopicProgress::id);
        Ok(records)
    }
}
