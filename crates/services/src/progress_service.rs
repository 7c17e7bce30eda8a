use std::sync::Arc;

use chrono::{DateTime, Utc};

use sensei_core::model::{TopicGroup, TopicId, TopicProgress, TopicProgressDraft};
use storage::repository::ProgressRepository;
use tracing::{info, warn};

use crate::Clock;
use crate::error::ProgressServiceError;

/// Validated access to the persisted progress store.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    repo: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn ProgressRepository>) -> Self {
        Self { clock, repo }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Load the record for `topic`, if one was ever written.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on storage failures.
    pub async fn get(&self, topic: TopicId) -> Result<Option<TopicProgress>, ProgressServiceError> {
        Ok(self.repo.get_progress(topic).await?)
    }

    /// Validate a raw record against its key and store it.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Validation` if the key or id is not a known
    /// topic or if they differ; nothing is written in that case.
    pub async fn put(
        &self,
        key: &str,
        draft: TopicProgressDraft,
    ) -> Result<TopicProgress, ProgressServiceError> {
        let progress = draft.validate_for_key(key).inspect_err(|err| {
            warn!(key, error = %err, "rejected progress write");
        })?;
        self.repo.put_progress(progress.id(), &progress).await?;
        Ok(progress)
    }

    /// Store an already-typed record under its own id.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on storage failures.
    pub async fn save(&self, progress: &TopicProgress) -> Result<(), ProgressServiceError> {
        self.repo.put_progress(progress.id(), progress).await?;
        Ok(())
    }

    /// Every stored record, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on storage failures.
    pub async fn get_all(&self) -> Result<Vec<TopicProgress>, ProgressServiceError> {
        Ok(self.repo.list_progress().await?)
    }

    /// Write `{id: topic, completed: true, lastAttempt: now}`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on storage failures.
    pub async fn mark_completed(&self, topic: TopicId) -> Result<TopicProgress, ProgressServiceError> {
        self.mark_completed_at(topic, self.clock.now()).await
    }

    /// Write `{id: topic, completed: true, lastAttempt: at}`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on storage failures.
    pub async fn mark_completed_at(
        &self,
        topic: TopicId,
        at: DateTime<Utc>,
    ) -> Result<TopicProgress, ProgressServiceError> {
        let progress = TopicProgress::completed_at(topic, at);
        self.save(&progress).await?;
        info!(topic = %topic, "topic completed");
        Ok(progress)
    }

    /// Course-wide view over every topic in the catalog.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` on storage failures.
    pub async fn course_overview(&self) -> Result<CourseOverview, ProgressServiceError> {
        let stored = self.get_all().await?;
        Ok(CourseOverview::from_records(&stored))
    }
}

/// Completion state of every topic, with absent records read as not started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseOverview {
    topics: Vec<TopicProgress>,
}

impl CourseOverview {
    #[must_use]
    pub fn from_records(records: &[TopicProgress]) -> Self {
        let topics = TopicId::ALL
            .into_iter()
            .map(|topic| {
                records
                    .iter()
                    .find(|record| record.id() == topic)
                    .cloned()
                    .unwrap_or_else(|| TopicProgress::not_started(topic))
            })
            .collect();
        Self { topics }
    }

    #[must_use]
    pub fn topics(&self) -> &[TopicProgress] {
        &self.topics
    }

    #[must_use]
    pub fn topic(&self, topic: TopicId) -> Option<&TopicProgress> {
        self.topics.iter().find(|record| record.id() == topic)
    }

    #[must_use]
    pub fn is_completed(&self, topic: TopicId) -> bool {
        self.topic(topic).is_some_and(TopicProgress::is_completed)
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.topics.iter().filter(|t| t.is_completed()).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.topics.len()
    }

    /// Rounded share of completed topics, `0` for an empty catalog.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        let rounded = (200 * self.completed() + total) / (2 * total);
        u8::try_from(rounded).unwrap_or(100)
    }

    /// Completed and total topic counts for one home-page group.
    #[must_use]
    pub fn group_counts(&self, group: TopicGroup) -> (usize, usize) {
        let topics = group.topics();
        let done = topics.iter().filter(|t| self.is_completed(**t)).count();
        (done, topics.len())
    }
}
