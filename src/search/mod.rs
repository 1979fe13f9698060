//! Timetable combination search.
//!
//! Enumerates fixed-size course subsets, filters them by selection
//! constraints and an overlap cutoff, and ranks the survivors by
//! `(overlap, gap)`.
//!
//! # Usage
//!
//! ```
//! use timetable_search::models::{Course, TimeInterval, Weekday};
//! use timetable_search::search;
//!
//! let catalog = vec![
//!     Course::new("A").with_slot(TimeInterval::from_clock(Weekday::Monday, 9, 0, 10, 0).unwrap()),
//!     Course::new("B").with_slot(TimeInterval::from_clock(Weekday::Monday, 9, 30, 10, 30).unwrap()),
//! ];
//! let results = search::search(&catalog, 2, 100);
//! assert_eq!(results[0].overlap_minutes, 30);
//! ```

mod combinations;
mod engine;

pub use combinations::{count_combinations, Combinations};
pub use engine::{
    search, CombinationSearch, SearchOutcome, SearchRequest, SearchStats, DEFAULT_OVERLAP_CUTOFF,
};
