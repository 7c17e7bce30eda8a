use chrono::{DateTime, Utc};
use std::collections::HashSet;
use thiserror::Error;

/// Static definition of a trackable sub-task.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionSpec {
    pub id: &'static str,
    pub description: &'static str,
}

impl ActionSpec {
    #[must_use]
    pub const fn new(id: &'static str, description: &'static str) -> Self {
        Self { id, description }
    }
}

/// One trackable sub-task within a topic's practice session.
///
/// `completed` only ever moves from `false` to `true`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Action {
    id: String,
    description: String,
    completed: bool,
    timestamp: DateTime<Utc>,
}

impl Action {
    #[must_use]
    pub fn new(id: impl Into<String>, description: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            completed: false,
            timestamp: now,
        }
    }

    /// An action recorded as already done, as used by activity feeds.
    #[must_use]
    pub fn completed(
        id: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            completed: true,
            ..Self::new(id, description, now)
        }
    }

    #[must_use]
    pub fn from_spec(spec: &ActionSpec, now: DateTime<Utc>) -> Self {
        Self::new(spec.id, spec.description, now)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Marks the action named `action_id` as completed.
///
/// Returns a new list; the input is untouched. Entries that do not match, or
/// that are already completed, are copied as-is. An unknown id yields an
/// identical list.
#[must_use]
pub fn log_action(actions: &[Action], action_id: &str, now: DateTime<Utc>) -> Vec<Action> {
    actions
        .iter()
        .map(|action| {
            if action.id == action_id && !action.completed {
                Action {
                    completed: true,
                    timestamp: now,
                    ..action.clone()
                }
            } else {
                action.clone()
            }
        })
        .collect()
}

/// `round(100 * completed / total)`, rounding halves up. Empty lists are 0.
#[must_use]
pub fn completion_percentage(actions: &[Action]) -> u8 {
    let total = actions.len();
    if total == 0 {
        return 0;
    }
    let done = actions.iter().filter(|action| action.completed).count();
    let rounded = (200 * done + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

/// True when the list is non-empty and every action is completed.
#[must_use]
pub fn all_completed(actions: &[Action]) -> bool {
    !actions.is_empty() && actions.iter().all(Action::is_completed)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("action id cannot be empty")]
    EmptyId,

    #[error("duplicate action id: {id}")]
    DuplicateId { id: String },
}

/// Ordered, validated list of a topic's actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRegistry {
    actions: Vec<Action>,
}

impl ActionRegistry {
    /// Build a registry from existing actions.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::EmptyId` for blank ids and
    /// `ActionError::DuplicateId` when an id appears twice.
    pub fn new(actions: Vec<Action>) -> Result<Self, ActionError> {
        let mut seen = HashSet::with_capacity(actions.len());
        for action in &actions {
            if action.id.trim().is_empty() {
                return Err(ActionError::EmptyId);
            }
            if !seen.insert(action.id.as_str()) {
                return Err(ActionError::DuplicateId {
                    id: action.id.clone(),
                });
            }
        }
        Ok(Self { actions })
    }

    /// Fresh registry with every action pending and stamped `now`.
    ///
    /// # Errors
    ///
    /// Same as [`ActionRegistry::new`].
    pub fn from_specs(specs: &[ActionSpec], now: DateTime<Utc>) -> Result<Self, ActionError> {
        Self::new(specs.iter().map(|spec| Action::from_spec(spec, now)).collect())
    }

    /// Returns the registry with `action_id` marked completed.
    #[must_use]
    pub fn logged(&self, action_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            actions: log_action(&self.actions, action_id, now),
        }
    }

    #[must_use]
    pub fn percentage(&self) -> u8 {
        completion_percentage(&self.actions)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        all_completed(&self.actions)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.actions.iter().filter(|a| a.completed).count()
    }

    #[must_use]
    pub fn get(&self, action_id: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.id == action_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Action] {
        &self.actions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}
