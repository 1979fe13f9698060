//! Error types for timetable construction.
//!
//! The search itself is total over well-formed input and never fails.
//! Errors only arise when building time intervals from raw values.

use thiserror::Error;

use crate::models::Weekday;

/// Result type for model construction.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while constructing timetable models.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The interval is empty, reversed, or ends after midnight.
    #[error("invalid interval on {day}: {start_minute}..{end_minute} (minutes since midnight)")]
    InvalidInterval {
        day: Weekday,
        start_minute: u32,
        end_minute: u32,
    },
}
