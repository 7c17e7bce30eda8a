mod action;
mod progress;
mod tab;
mod topic;

pub use action::{
    Action, ActionError, ActionRegistry, ActionSpec, all_completed, completion_percentage,
    log_action,
};
pub use progress::{ProgressValidationError, TopicProgress, TopicProgressDraft};
pub use tab::{Tab, TabContent};
pub use topic::{ParseTopicError, TopicGroup, TopicId};
