//! Weekly timetable combination search.
//!
//! Given a catalog of courses with weekly time slots, enumerates every
//! fixed-size selection, discards selections that break group rules,
//! scores the rest by overlap and idle gaps, and ranks them best-first.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Weekday`, `TimeInterval`, `Course`,
//!   `CombinationResult`
//! - **`evaluation`**: Overlap and gap metrics for a combination
//! - **`constraint`**: Mutual-exclusion and mandatory-group rules
//! - **`search`**: Exhaustive, optionally parallel, ranked enumeration
//! - **`report`**: Plain-text rendering of results
//! - **`validation`**: Catalog integrity checks (duplicate names, malformed slots)
//! - **`error`**: Construction errors
//!
//! # Example
//!
//! ```
//! use timetable_search::models::{Course, TimeInterval, Weekday};
//! use timetable_search::{report, search};
//!
//! # fn main() -> timetable_search::error::Result<()> {
//! let catalog = vec![
//!     Course::new("Graphs")
//!         .with_slot(TimeInterval::from_clock(Weekday::Monday, 10, 0, 12, 0)?),
//!     Course::new("Deutsch 1")
//!         .with_slot(TimeInterval::from_clock(Weekday::Tuesday, 8, 0, 10, 0)?)
//!         .with_group(1)
//!         .mandatory(),
//!     Course::new("Deutsch 2")
//!         .with_slot(TimeInterval::from_clock(Weekday::Tuesday, 10, 0, 12, 0)?)
//!         .with_group(1)
//!         .mandatory(),
//! ];
//!
//! let results = search::search(&catalog, 2, 60);
//! assert_eq!(results.len(), 2);
//! println!("{}", report::render_results(&results, Some(10)));
//! # Ok(())
//! # }
//! ```

pub mod constraint;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod report;
pub mod search;
pub mod validation;
