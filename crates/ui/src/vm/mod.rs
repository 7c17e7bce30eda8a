mod home_vm;
mod markdown_vm;
mod progress_vm;
mod time_fmt;

pub use home_vm::{HomeVm, TopicCardVm, TopicGroupVm, map_home};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use progress_vm::{ActionItemVm, ProgressTrackerVm};
pub use time_fmt::{format_datetime, format_time};
