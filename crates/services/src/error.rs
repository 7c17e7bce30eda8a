//! Shared error types for the services crate.

use thiserror::Error;

use sensei_core::model::{ActionError, ProgressValidationError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Validation(#[from] ProgressValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ProgressServiceError {
    /// True when the write was rejected because the record was malformed.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Storage(StorageError::Validation(_))
        )
    }
}

/// Errors emitted while running a topic practice session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TopicSessionError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Progress(#[from] ProgressServiceError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
