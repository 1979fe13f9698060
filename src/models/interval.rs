//! Weekly time interval model.
//!
//! # Time Model
//! Times are minutes since midnight (0..=1440) on a given weekday. An
//! interval is half-open: it includes its start minute and excludes its
//! end minute, so back-to-back slots (09:00-10:00, 10:00-11:00) do not
//! overlap.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::Weekday;
use crate::error::{Result, ScheduleError};

/// Minutes in one day; the latest valid `end_minute`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A single weekly occurrence `[start_minute, end_minute)` on `day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    /// Day of the week.
    pub day: Weekday,
    /// Start (minutes since midnight, inclusive).
    pub start_minute: u32,
    /// End (minutes since midnight, exclusive).
    pub end_minute: u32,
}

impl TimeInterval {
    /// Creates an interval, rejecting empty, reversed, or past-midnight ranges.
    pub fn new(day: Weekday, start_minute: u32, end_minute: u32) -> Result<Self> {
        if end_minute <= start_minute || end_minute > MINUTES_PER_DAY {
            return Err(ScheduleError::InvalidInterval {
                day,
                start_minute,
                end_minute,
            });
        }
        Ok(Self {
            day,
            start_minute,
            end_minute,
        })
    }

    /// Creates an interval from wall-clock hours and minutes.
    ///
    /// Minutes must be below 60; hours past 24 are rejected by [`TimeInterval::new`].
    pub fn from_clock(
        day: Weekday,
        start_hour: u32,
        start_min: u32,
        end_hour: u32,
        end_min: u32,
    ) -> Result<Self> {
        let start_minute = start_hour.saturating_mul(60).saturating_add(start_min);
        let end_minute = end_hour.saturating_mul(60).saturating_add(end_min);
        if start_min >= 60 || end_min >= 60 {
            return Err(ScheduleError::InvalidInterval {
                day,
                start_minute,
                end_minute,
            });
        }
        Self::new(day, start_minute, end_minute)
    }

    /// Length of the interval in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }

    /// Whether the interval satisfies the constructor's invariants.
    ///
    /// Always true for values built through [`TimeInterval::new`]; values
    /// obtained by deserialization or struct literals may violate it.
    pub fn is_well_formed(&self) -> bool {
        self.start_minute < self.end_minute && self.end_minute <= MINUTES_PER_DAY
    }

    /// Minutes shared with `other`. Zero on different days or when disjoint.
    pub fn overlap_minutes(&self, other: &Self) -> u32 {
        if self.day != other.day {
            return 0;
        }
        let start = self.start_minute.max(other.start_minute);
        let end = self.end_minute.min(other.end_minute);
        end.saturating_sub(start)
    }

    /// Orders by day, then by start minute. End minute is ignored.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.day
            .cmp(&other.day)
            .then(self.start_minute.cmp(&other.start_minute))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}-{:02}:{:02}",
            self.day,
            self.start_minute / 60,
            self.start_minute % 60,
            self.end_minute / 60,
            self.end_minute % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slot(day: Weekday, start: u32, end: u32) -> TimeInterval {
        TimeInterval::new(day, start, end).unwrap()
    }

    #[test]
    fn test_from_clock() {
        let s = TimeInterval::from_clock(Weekday::Monday, 9, 30, 11, 0).unwrap();
        assert_eq!(s.start_minute, 570);
        assert_eq!(s.end_minute, 660);
        assert_eq!(s.duration_minutes(), 90);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            TimeInterval::new(Weekday::Monday, 600, 600),
            Err(ScheduleError::InvalidInterval { .. })
        ));
        assert!(TimeInterval::new(Weekday::Monday, 600, 540).is_err());
        assert!(TimeInterval::new(Weekday::Monday, 1400, 1441).is_err());
        assert!(TimeInterval::new(Weekday::Monday, 1380, 1440).is_ok());
    }

    #[test]
    fn test_from_clock_rejects_out_of_range() {
        // Hours large enough to overflow minute arithmetic.
        assert!(matches!(
            TimeInterval::from_clock(Weekday::Monday, 9, 0, u32::MAX / 60 + 1, 0),
            Err(ScheduleError::InvalidInterval { .. })
        ));
        assert!(TimeInterval::from_clock(Weekday::Monday, 9, 0, 71_582_789, 700).is_err());
        assert!(TimeInterval::from_clock(Weekday::Monday, u32::MAX, 59, 10, 0).is_err());
        assert!(TimeInterval::from_clock(Weekday::Monday, 9, 75, 11, 0).is_err());
        assert!(TimeInterval::from_clock(Weekday::Monday, 23, 0, 25, 0).is_err());
        assert_eq!(
            TimeInterval::from_clock(Weekday::Monday, 23, 0, 24, 0).unwrap().end_minute,
            MINUTES_PER_DAY
        );
    }

    #[test]
    fn test_overlap_same_day() {
        let a = slot(Weekday::Monday, 540, 600);
        let b = slot(Weekday::Monday, 570, 630);
        assert_eq!(a.overlap_minutes(&b), 30);
        assert_eq!(b.overlap_minutes(&a), 30);
    }

    #[test]
    fn test_overlap_touching() {
        let a = slot(Weekday::Monday, 540, 600);
        let b = slot(Weekday::Monday, 600, 660);
        assert_eq!(a.overlap_minutes(&b), 0);
    }

    #[test]
    fn test_overlap_contained() {
        let outer = slot(Weekday::Friday, 480, 720);
        let inner = slot(Weekday::Friday, 540, 600);
        assert_eq!(outer.overlap_minutes(&inner), 60);
    }

    #[test]
    fn test_overlap_different_days() {
        let a = slot(Weekday::Monday, 540, 600);
        let b = slot(Weekday::Tuesday, 540, 600);
        assert_eq!(a.overlap_minutes(&b), 0);
    }

    #[test]
    fn test_compare() {
        let mon_late = slot(Weekday::Monday, 800, 900);
        let tue_early = slot(Weekday::Tuesday, 100, 200);
        let mon_early = slot(Weekday::Monday, 100, 900);
        assert_eq!(mon_late.compare(&tue_early), Ordering::Less);
        assert_eq!(mon_early.compare(&mon_late), Ordering::Less);
        assert_eq!(
            mon_early.compare(&slot(Weekday::Monday, 100, 150)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_display() {
        let s = TimeInterval::from_clock(Weekday::Wednesday, 8, 5, 10, 0).unwrap();
        assert_eq!(s.to_string(), "Wednesday 08:05-10:00");
    }

    fn arb_day() -> impl Strategy<Value = Weekday> {
        (1u8..=7).prop_map(|o| Weekday::from_ordinal(o).unwrap())
    }

    fn arb_interval() -> impl Strategy<Value = TimeInterval> {
        (arb_day(), 0u32..1439, 1u32..600).prop_map(|(day, start, len)| {
            let end = (start + len).min(MINUTES_PER_DAY);
            TimeInterval::new(day, start, end).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_overlap_symmetric(a in arb_interval(), b in arb_interval()) {
            prop_assert_eq!(a.overlap_minutes(&b), b.overlap_minutes(&a));
        }

        #[test]
        fn prop_overlap_bounded(a in arb_interval(), b in arb_interval()) {
            let o = a.overlap_minutes(&b);
            prop_assert!(o <= a.duration_minutes().min(b.duration_minutes()));
        }

        #[test]
        fn prop_disjoint_is_zero(a in arb_interval(), b in arb_interval()) {
            if a.day == b.day && (a.end_minute <= b.start_minute || b.end_minute <= a.start_minute) {
                prop_assert_eq!(a.overlap_minutes(&b), 0);
            }
        }

        #[test]
        fn prop_different_days_never_overlap(
            a in arb_interval(),
            shift in 1u8..7,
            start in 0u32..1439,
            len in 1u32..600,
        ) {
            let other_day = Weekday::from_ordinal((a.day.ordinal() - 1 + shift) % 7 + 1).unwrap();
            let b = TimeInterval::new(other_day, start, (start + len).min(MINUTES_PER_DAY)).unwrap();
            prop_assert_eq!(a.overlap_minutes(&b), 0);
        }
    }
}
