#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_service;
pub mod topics;

pub use sensei_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressServiceError, TopicSessionError};
pub use progress_service::{CourseOverview, ProgressService};
pub use topics::{
    ActionLogged, CompletionTrigger, PracticeOutcome, TopicPracticeService, TopicSession,
    TopicSessionProgress,
};
