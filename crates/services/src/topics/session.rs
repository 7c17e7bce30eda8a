use chrono::{DateTime, Utc};
use sensei_core::model::{Action, ActionError, ActionRegistry, ActionSpec, TopicId};
use tracing::debug;

/// Snapshot of a session's completion numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicSessionProgress {
    pub total: usize,
    pub completed: usize,
    pub percentage: u8,
    pub is_complete: bool,
}

/// Result of logging one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionLogged {
    /// False when the id was unknown or already completed.
    pub changed: bool,
    pub progress: TopicSessionProgress,
}

/// In-memory practice state for one visit to a topic page.
///
/// Nothing here is persisted; only the completion record written by the
/// trigger outlives the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSession {
    topic: TopicId,
    actions: ActionRegistry,
    completion_recorded: bool,
}

impl TopicSession {
    /// Start a session with the topic's catalog actions, all pending.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` if the catalog list is malformed.
    pub fn start(topic: TopicId, now: DateTime<Utc>) -> Result<Self, ActionError> {
        Self::with_specs(topic, topic.actions(), now)
    }

    /// Start a session with a custom action list.
    ///
    /// # Errors
    ///
    /// Returns `ActionError` for blank or duplicate action ids.
    pub fn with_specs(
        topic: TopicId,
        specs: &[ActionSpec],
        now: DateTime<Utc>,
    ) -> Result<Self, ActionError> {
        Ok(Self {
            topic,
            actions: ActionRegistry::from_specs(specs, now)?,
            completion_recorded: false,
        })
    }

    #[must_use]
    pub fn topic(&self) -> TopicId {
        self.topic
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        self.actions.as_slice()
    }

    #[must_use]
    pub fn registry(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Mark `action_id` completed at `now`. Unknown and already completed ids
    /// leave the session untouched.
    pub fn log_action(&mut self, action_id: &str, now: DateTime<Utc>) -> ActionLogged {
        let changed = self
            .actions
            .get(action_id)
            .is_some_and(|action| !action.is_completed());
        if changed {
            self.actions = self.actions.logged(action_id, now);
        }
        debug!(topic = %self.topic, action_id, changed, "action logged");
        ActionLogged {
            changed,
            progress: self.progress(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> TopicSessionProgress {
        TopicSessionProgress {
            total: self.actions.len(),
            completed: self.actions.completed_count(),
            percentage: self.actions.percentage(),
            is_complete: self.actions.is_complete(),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.actions.is_complete()
    }

    /// Whether the completion record was already written for this session.
    #[must_use]
    pub fn completion_recorded(&self) -> bool {
        self.completion_recorded
    }

    pub(crate) fn set_completion_recorded(&mut self) {
        self.completion_recorded = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sensei_core::time::fixed_now;

    const TWO: [ActionSpec; 2] = [
        ActionSpec::new("a", "first"),
        ActionSpec::new("b", "second"),
    ];

    #[test]
    fn catalog_session_starts_pending() {
        let session = TopicSession::start(TopicId::Hover, fixed_now()).unwrap();
        let progress = session.progress();
        assert_eq!(progress.total, TopicId::Hover.actions().len());
        assert_eq!(progress.completed, 0);
        assert_eq!(progress.percentage, 0);
        assert!(!progress.is_complete);
        assert!(!session.completion_recorded());
    }

    #[test]
    fn logging_reports_change_and_progress() {
        let mut session = TopicSession::with_specs(TopicId::Alerts, &TWO, fixed_now()).unwrap();
        let later = fixed_now() + Duration::seconds(5);

        let first = session.log_action("a", later);
        assert!(first.changed);
        assert_eq!(first.progress.percentage, 50);
        assert_eq!(session.actions()[0].timestamp(), later);

        let repeat = session.log_action("a", later + Duration::seconds(1));
        assert!(!repeat.changed);
        assert_eq!(session.actions()[0].timestamp(), later);

        let unknown = session.log_action("zzz", later);
        assert!(!unknown.changed);
        assert_eq!(unknown.progress, first.progress);

        let last = session.log_action("b", later);
        assert!(last.progress.is_complete);
        assert_eq!(last.progress.percentage, 100);
    }

    #[test]
    fn empty_session_is_never_complete() {
        let session = TopicSession::with_specs(TopicId::Waits, &[], fixed_now()).unwrap();
        assert!(!session.is_complete());
        assert_eq!(session.progress().percentage, 0);
    }

    #[test]
    fn duplicate_specs_are_rejected() {
        let specs = [ActionSpec::new("x", "one"), ActionSpec::new("x", "two")];
        let err = TopicSession::with_specs(TopicId::Forms, &specs, fixed_now()).unwrap_err();
        assert!(matches!(err, ActionError::DuplicateId { .. }));
    }
}
