//! Timetable domain models.
//!
//! Provides the data types for describing a course catalog and the
//! scored combinations produced by the search.
//!
//! # Domain Mappings
//!
//! | timetable-search | University | Training center | Sports club |
//! |------------------|------------|-----------------|-------------|
//! | Course | Lecture/Section | Workshop | Class |
//! | TimeInterval | Weekly lecture slot | Session | Practice slot |
//! | GroupId | Parallel sections | Alternative dates | Level tiers |
//! | CombinationResult | Semester timetable | Enrollment plan | Weekly plan |

mod combination;
mod course;
mod interval;
mod weekday;

pub use combination::CombinationResult;
pub use course::{Course, GroupId};
pub use interval::{TimeInterval, MINUTES_PER_DAY};
pub use weekday::Weekday;
