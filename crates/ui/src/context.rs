use std::sync::Arc;

use services::{ProgressService, TopicPracticeService};

pub trait UiApp: Send + Sync {
    fn progress(&self) -> Arc<ProgressService>;
    fn practice(&self) -> Arc<TopicPracticeService>;
}

#[derive(Clone)]
pub struct AppContext {
    progress: Arc<ProgressService>,
    practice: Arc<TopicPracticeService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            progress: app.progress(),
            practice: app.practice(),
        }
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn practice(&self) -> Arc<TopicPracticeService> {
        Arc::clone(&self.practice)
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
