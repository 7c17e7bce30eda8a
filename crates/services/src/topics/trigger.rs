use std::sync::Arc;

use chrono::{DateTime, Utc};
use sensei_core::model::TopicProgress;

use super::session::TopicSession;
use crate::error::ProgressServiceError;
use crate::progress_service::ProgressService;

/// Persists a topic's completion once every action of a session is done.
#[derive(Clone)]
pub struct CompletionTrigger {
    progress: Arc<ProgressService>,
}

impl CompletionTrigger {
    #[must_use]
    pub fn new(progress: Arc<ProgressService>) -> Self {
        Self { progress }
    }

    /// Write the completion record, stamped `now`, if the session just became
    /// complete.
    ///
    /// Returns the written record, or `None` when the session is incomplete or
    /// was already recorded. A failed write leaves the session unrecorded so a
    /// later check retries it.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the store write fails.
    pub async fn check(
        &self,
        session: &mut TopicSession,
        now: DateTime<Utc>,
    ) -> Result<Option<TopicProgress>, ProgressServiceError> {
        if !session.is_complete() || session.completion_recorded() {
            return Ok(None);
        }
        let record = self.progress.mark_completed_at(session.topic(), now).await?;
        session.set_completion_recorded();
        Ok(Some(record))
    }
}
