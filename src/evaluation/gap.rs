//! Idle time between consecutive slots of a combination.
//!
//! # Algorithm
//! 1. Group every slot of every course by weekday.
//! 2. Stable-sort each day's slots by start minute.
//! 3. For consecutive slots `(prev, next)`, add `max(0, next.start - prev.end)`
//!    and record a window `(day, prev.end, next.start)` when positive.
//!
//! Nothing is counted before the first or after the last slot of a day.
//! Overlapping neighbours clamp to zero; overlap is measured separately
//! by [`super::overlap`].

use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Course, TimeInterval, Weekday};

/// Total idle time of a combination and the windows it consists of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GapReport {
    /// Sum of all gap windows (minutes).
    pub total_minutes: u32,
    /// Gap windows, ordered by weekday, then by position within the day.
    pub windows: Vec<TimeInterval>,
}

/// Computes the per-day gaps for the given courses.
pub fn evaluate(courses: &[&Course]) -> GapReport {
    let mut by_day: BTreeMap<Weekday, Vec<&TimeInterval>> = BTreeMap::new();
    for course in courses {
        for slot in &course.time_slots {
            by_day.entry(slot.day).or_default().push(slot);
        }
    }

    let mut report = GapReport::default();

    for (day, mut slots) in by_day {
        if slots.len() < 2 {
            continue;
        }
        slots.sort_by(|a, b| a.compare(b));

        for pair in slots.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            let idle = next.start_minute.saturating_sub(prev.end_minute);
            if idle > 0 {
                report.total_minutes = report.total_minutes.saturating_add(idle);
                report.windows.push(TimeInterval {
                    day,
                    start_minute: prev.end_minute,
                    end_minute: next.start_minute,
                });
            }
        }
    }

    report
}
