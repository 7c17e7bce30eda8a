use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::topics::TopicPracticeService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    progress: Arc<ProgressService>,
    practice: Arc<TopicPracticeService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the connection or migrations fail.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url, clock).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    /// Build services over a process-local store.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock)
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let progress = Arc::new(ProgressService::new(clock, Arc::clone(&storage.progress)));
        let practice = Arc::new(TopicPracticeService::new(clock, Arc::clone(&progress)));
        Self { progress, practice }
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
