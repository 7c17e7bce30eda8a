use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::topic::TopicId;

/// Persisted completion record for one topic.
///
/// `completed` is never derived here; callers set it when they observe that
/// every action of a session is done.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgress {
    id: TopicId,
    completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_attempt: Option<DateTime<Utc>>,
}

impl TopicProgress {
    #[must_use]
    pub fn new(id: TopicId, completed: bool, last_attempt: Option<DateTime<Utc>>) -> Self {
        Self {
            id,
            completed,
            last_attempt,
        }
    }

    /// Record written by the completion trigger.
    #[must_use]
    pub fn completed_at(id: TopicId, now: DateTime<Utc>) -> Self {
        Self::new(id, true, Some(now))
    }

    /// Placeholder for a topic that has no stored record.
    #[must_use]
    pub fn not_started(id: TopicId) -> Self {
        Self::new(id, false, None)
    }

    #[must_use]
    pub fn id(&self) -> TopicId {
        self.id
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn last_attempt(&self) -> Option<DateTime<Utc>> {
        self.last_attempt
    }

    /// Checks that this record may be stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressValidationError::KeyMismatch` if `key` differs from the record id.
    pub fn check_key(&self, key: TopicId) -> Result<(), ProgressValidationError> {
        if key == self.id {
            Ok(())
        } else {
            Err(ProgressValidationError::KeyMismatch {
                key: key.as_str().to_string(),
                id: self.id.as_str().to_string(),
            })
        }
    }
}

/// Unvalidated progress record, as received from callers or raw storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgressDraft {
    pub id: String,
    pub completed: bool,
    #[serde(default)]
    pub last_attempt: Option<DateTime<Utc>>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressValidationError {
    #[error("unknown topic id: {id}")]
    UnknownTopic { id: String },

    #[error("record id {id} does not match key {key}")]
    KeyMismatch { key: String, id: String },
}

impl TopicProgressDraft {
    #[must_use]
    pub fn new(id: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            completed,
            last_attempt: None,
        }
    }

    #[must_use]
    pub fn with_last_attempt(mut self, at: DateTime<Utc>) -> Self {
        self.last_attempt = Some(at);
        self
    }

    /// Validate the draft into a storable record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressValidationError::UnknownTopic` if the id is not in the topic catalog.
    pub fn validate(self) -> Result<TopicProgress, ProgressValidationError> {
        let id = self
            .id
            .parse::<TopicId>()
            .map_err(|_| ProgressValidationError::UnknownTopic { id: self.id.clone() })?;
        Ok(TopicProgress::new(id, self.completed, self.last_attempt))
    }

    /// Validate the draft and check it against the storage key.
    ///
    /// # Errors
    ///
    /// Returns `ProgressValidationError` if the key or the id is unknown, or if they differ.
    pub fn validate_for_key(self, key: &str) -> Result<TopicProgress, ProgressValidationError> {
        let key_topic = key
            .parse::<TopicId>()
            .map_err(|_| ProgressValidationError::UnknownTopic { id: key.to_string() })?;
        let progress = self.validate()?;
        progress.check_key(key_topic)?;
        Ok(progress)
    }
}

impl From<&TopicProgress> for TopicProgressDraft {
    fn from(progress: &TopicProgress) -> Self {
        Self {
            id: progress.id.as_str().to_string(),
            completed: progress.completed,
            last_attempt: progress.last_attempt,
        }
    }
}
