#![forbid(unsafe_code)]

pub mod model;
pub mod table;
pub mod time;

pub use time::Clock;
