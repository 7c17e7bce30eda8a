mod practice;
mod session;
mod trigger;

// Public API of the topic practice subsystem.
pub use crate::error::TopicSessionError;
pub use practice::{PracticeOutcome, TopicPracticeService};
pub use session::{ActionLogged, TopicSession, TopicSessionProgress};
pub use trigger::CompletionTrigger;
