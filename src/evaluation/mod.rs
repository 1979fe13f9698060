//! Schedule quality metrics for a course combination.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Overlap | Sum over course pairs of shared same-day slot minutes |
//! | Gap | Sum over days of idle minutes between consecutive slots |
//!
//! Both are minimized; overlap dominates gap when ranking.

pub mod gap;
pub mod overlap;

pub use gap::GapReport;
pub use overlap::OverlapReport;

use crate::models::{CombinationResult, Course};

/// Overlap and gap metrics of a combination.
#[derive(Debug, Clone, Default)]
pub struct ScheduleScore<'a> {
    pub overlap: OverlapReport<'a>,
    pub gap: GapReport,
}

impl<'a> ScheduleScore<'a> {
    /// Attaches the metrics to the combination they were computed for.
    pub fn into_result(self, courses: Vec<&'a Course>) -> CombinationResult<'a> {
        CombinationResult {
            courses,
            overlap_minutes: self.overlap.total_minutes,
            gap_minutes: self.gap.total_minutes,
            overlapping_pairs: self.overlap.pairs,
            gap_windows: self.gap.windows,
        }
    }
}
