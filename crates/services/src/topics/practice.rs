use std::sync::Arc;

use sensei_core::model::{TopicId, TopicProgress};

use super::session::{ActionLogged, TopicSession};
use super::trigger::CompletionTrigger;
use crate::Clock;
use crate::error::TopicSessionError;
use crate::progress_service::ProgressService;

/// Result of one exercise interaction on a topic page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeOutcome {
    pub logged: ActionLogged,
    /// Completion record written by this interaction, if any.
    pub recorded: Option<TopicProgress>,
}

/// Orchestrates topic sessions: logs actions, then runs the completion trigger.
#[derive(Clone)]
pub struct TopicPracticeService {
    clock: Clock,
    trigger: CompletionTrigger,
}

impl TopicPracticeService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<ProgressService>) -> Self {
        Self {
            clock,
            trigger: CompletionTrigger::new(progress),
        }
    }

    /// Start a fresh session for `topic` with every action pending.
    ///
    /// # Errors
    ///
    /// Returns `TopicSessionError::Action` if the topic's action list is malformed.
    pub fn start(&self, topic: TopicId) -> Result<TopicSession, TopicSessionError> {
        Ok(TopicSession::start(topic, self.clock.now())?)
    }

    /// Log `action_id` and persist completion when it finishes the session.
    ///
    /// # Errors
    ///
    /// Returns `TopicSessionError::Progress` if the completion write fails; the
    /// action stays logged in the session.
    pub async fn log_action(
        &self,
        session: &mut TopicSession,
        action_id: &str,
    ) -> Result<PracticeOutcome, TopicSessionError> {
        let now = self.clock.now();
        let logged = session.log_action(action_id, now);
        let recorded = self.trigger.check(session, now).await?;
        Ok(PracticeOutcome { logged, recorded })
    }
}
