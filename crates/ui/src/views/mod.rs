mod home;
mod not_found;
mod state;
mod topic;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use not_found::{NotFoundPanel, NotFoundView};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topic::TopicView;
