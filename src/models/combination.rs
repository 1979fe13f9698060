//! Evaluated combination (search result) model.

use serde::Serialize;

use super::{Course, TimeInterval};

/// A scored, valid combination of catalog courses.
///
/// Courses are borrowed from the catalog the search ran over; nothing is
/// copied. Gap windows reuse [`TimeInterval`]: `day`, gap start, gap end.
#[derive(Debug, Clone, Serialize)]
pub struct CombinationResult<'a> {
    /// Selected courses, in catalog order.
    pub courses: Vec<&'a Course>,
    /// Sum of pairwise slot overlaps (minutes).
    pub overlap_minutes: u32,
    /// Sum of idle time between consecutive slots per day (minutes).
    pub gap_minutes: u32,
    /// Course pairs with a strictly positive overlap.
    pub overlapping_pairs: Vec<(&'a Course, &'a Course)>,
    /// Idle windows between consecutive slots.
    pub gap_windows: Vec<TimeInterval>,
}

impl CombinationResult<'_> {
    /// Ranking key: fewer overlap minutes first, then fewer gap minutes.
    #[inline]
    pub fn rank_key(&self) -> (u32, u32) {
        (self.overlap_minutes, self.gap_minutes)
    }

    /// Names of the selected courses.
    pub fn course_names(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.name.as_str()).collect()
    }

    /// Whether `course` (by reference) is part of this combination.
    pub fn contains(&self, course: &Course) -> bool {
        self.courses.iter().any(|c| std::ptr::eq(*c, course))
    }
}
