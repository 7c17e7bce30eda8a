use services::TopicSession;

use crate::vm::time_fmt::format_time;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionItemVm {
    pub id: String,
    pub description: String,
    pub completed: bool,
    /// Set once the action is completed.
    pub completed_at_str: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressTrackerVm {
    pub percentage: u8,
    pub completed: usize,
    pub total: usize,
    pub is_complete: bool,
    pub recorded: bool,
    pub items: Vec<ActionItemVm>,
}

impl ProgressTrackerVm {
    #[must_use]
    pub fn summary_label(&self) -> String {
        format!("{} of {} actions", self.completed, self.total)
    }

    /// Inline width for the progress bar fill.
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.percentage)
    }
}

impl From<&TopicSession> for ProgressTrackerVm {
    fn from(session: &TopicSession) -> Self {
        let progress = session.progress();
        let items = session
            .actions()
            .iter()
            .map(|action| ActionItemVm {
                id: action.id().to_string(),
                description: action.description().to_string(),
                completed: action.is_completed(),
                completed_at_str: action
                    .is_completed()
                    .then(|| format_time(action.timestamp())),
            })
            .collect();
        Self {
            percentage: progress.percentage,
            completed: progress.completed,
            total: progress.total,
            is_complete: progress.is_complete,
            recorded: session.completion_recorded(),
            items,
        }
    }
}
