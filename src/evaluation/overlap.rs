//! Pairwise overlap between the courses of a combination.
//!
//! # Complexity
//! O(k² · s²) for k courses with up to s slots each. Combination sizes
//! in practice are at most 6-8 courses.

use serde::Serialize;

use crate::models::Course;

/// Total overlap of a combination and the pairs that caused it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OverlapReport<'a> {
    /// Sum of `Course::pairwise_overlap` over all unordered pairs (minutes).
    pub total_minutes: u32,
    /// Pairs with a strictly positive overlap, each listed once.
    pub pairs: Vec<(&'a Course, &'a Course)>,
}

/// Evaluates every unordered pair `(i, j)` with `i < j`.
///
/// The total saturates at `u32::MAX`.
pub fn evaluate<'a>(courses: &[&'a Course]) -> OverlapReport<'a> {
    let mut report = OverlapReport::default();

    for (i, &first) in courses.iter().enumerate() {
        for &second in &courses[i + 1..] {
            let minutes = first.pairwise_overlap(second);
            if minutes > 0 {
                report.total_minutes = report.total_minutes.saturating_add(minutes);
                report.pairs.push((first, second));
            }
        }
    }

    report
}
