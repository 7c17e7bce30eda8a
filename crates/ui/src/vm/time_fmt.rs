use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Time of day, used for per-action timestamps.
#[must_use]
pub fn format_time(value: DateTime<Utc>) -> String {
    value.format("%H:%M:%S").to_string()
}
