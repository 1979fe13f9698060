//! Exhaustive combination search.
//!
//! # Algorithm
//!
//! 1. Collect the mandatory courses of the catalog.
//! 2. Enumerate every `size`-subset of the catalog lazily.
//! 3. Drop subsets violating the selection constraints.
//! 4. Compute overlap; drop subsets above the overlap cutoff.
//! 5. Compute gaps and record the result.
//! 6. Stable-sort by `(overlap, gap)` ascending.
//!
//! # Parallelism
//! With `parallel` enabled, the index space is split by the first chosen
//! course and each partition is evaluated on the rayon pool. Partitions
//! are concatenated in order, reproducing the sequential enumeration
//! order, so the sorted output is identical either way.
//!
//! # Complexity
//! C(n, size) · O(size² · s²) for n courses with up to s slots each.

use log::{debug, info, trace};
use rayon::prelude::*;
use serde::Serialize;

use super::combinations::{count_combinations, Combinations};
use crate::constraint::SelectionConstraints;
use crate::evaluation::{gap, overlap, ScheduleScore};
use crate::models::{CombinationResult, Course};

/// Overlap cutoff used when none is given (minutes).
pub const DEFAULT_OVERLAP_CUTOFF: u32 = 10_000;

/// Input container for a search.
#[derive(Debug, Clone)]
pub struct SearchRequest<'a> {
    /// Courses to choose from.
    pub catalog: &'a [Course],
    /// Number of courses per combination.
    pub size: usize,
    /// Combinations with more overlap minutes than this are dropped.
    pub overlap_cutoff: u32,
    /// Evaluate partitions on the rayon thread pool.
    pub parallel: bool,
}

impl<'a> SearchRequest<'a> {
    /// Creates a sequential request with the default overlap cutoff.
    pub fn new(catalog: &'a [Course], size: usize) -> Self {
        Self {
            catalog,
            size,
            overlap_cutoff: DEFAULT_OVERLAP_CUTOFF,
            parallel: false,
        }
    }

    /// Sets the overlap cutoff (minutes).
    pub fn with_overlap_cutoff(mut self, overlap_cutoff: u32) -> Self {
        self.overlap_cutoff = overlap_cutoff;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Enumeration counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Subsets enumerated.
    pub enumerated: u64,
    /// Subsets failing the selection constraints.
    pub rejected_by_constraints: u64,
    /// Valid subsets above the overlap cutoff.
    pub rejected_by_cutoff: u64,
    /// Subsets returned as results.
    pub kept: u64,
}

impl SearchStats {
    /// Adds the counters of another (partial) search.
    pub fn merge(&mut self, other: &SearchStats) {
        self.enumerated += other.enumerated;
        self.rejected_by_constraints += other.rejected_by_constraints;
        self.rejected_by_cutoff += other.rejected_by_cutoff;
        self.kept += other.kept;
    }
}

/// Ranked results of a search together with its counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome<'a> {
    /// Results, best first.
    pub results: Vec<CombinationResult<'a>>,
    pub stats: SearchStats,
}

/// Exhaustive combination search engine.
///
/// # Example
///
/// ```
/// use timetable_search::models::{Course, TimeInterval, Weekday};
/// use timetable_search::search::{CombinationSearch, SearchRequest};
///
/// let catalog = vec![
///     Course::new("Graphs")
///         .with_slot(TimeInterval::from_clock(Weekday::Monday, 10, 0, 12, 0).unwrap()),
///     Course::new("Statistics")
///         .with_slot(TimeInterval::from_clock(Weekday::Monday, 13, 0, 15, 0).unwrap()),
/// ];
/// let request = SearchRequest::new(&catalog, 2).with_overlap_cutoff(0);
///
/// let outcome = CombinationSearch::new().search_request(&request);
/// assert_eq!(outcome.results.len(), 1);
/// assert_eq!(outcome.results[0].gap_minutes, 60);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationSearch {
    overlap_cutoff: u32,
    parallel: bool,
}

impl Default for CombinationSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl CombinationSearch {
    /// Creates a sequential engine with the default overlap cutoff.
    pub fn new() -> Self {
        Self {
            overlap_cutoff: DEFAULT_OVERLAP_CUTOFF,
            parallel: false,
        }
    }

    /// Sets the overlap cutoff (minutes).
    pub fn with_overlap_cutoff(mut self, overlap_cutoff: u32) -> Self {
        self.overlap_cutoff = overlap_cutoff;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Searches all `size`-subsets of `catalog`.
    ///
    /// `size == 0` or `size > catalog.len()` yields an empty outcome.
    pub fn search<'a>(&self, catalog: &'a [Course], size: usize) -> SearchOutcome<'a> {
        let n = catalog.len();
        debug!(
            "searching {} combinations (catalog={}, size={}, overlap_cutoff={}, parallel={})",
            count_combinations(n, size).map_or_else(|| "too many".to_string(), |c| c.to_string()),
            n,
            size,
            self.overlap_cutoff,
            self.parallel
        );

        if size == 0 || size > n {
            return SearchOutcome::default();
        }

        let rules = SelectionConstraints::from_catalog(catalog);

        let (mut results, stats) = if self.parallel {
            (0..n)
                .into_par_iter()
                .map(|first| {
                    let partition =
                        Combinations::over_range(first + 1, n, size - 1).map(move |mut rest| {
                            rest.insert(0, first);
                            rest
                        });
                    self.evaluate_all(catalog, &rules, partition)
                })
                .collect::<Vec<_>>()
                .into_iter()
                .fold((Vec::new(), SearchStats::default()), |(mut all, mut total), (part, s)| {
                    all.extend(part);
                    total.merge(&s);
                    (all, total)
                })
        } else {
            self.evaluate_all(catalog, &rules, Combinations::new(n, size))
        };

        results.sort_by_key(|r| r.rank_key());

        info!(
            "search finished: {} enumerated, {} rejected by constraints, {} over cutoff, {} kept",
            stats.enumerated, stats.rejected_by_constraints, stats.rejected_by_cutoff, stats.kept
        );

        SearchOutcome { results, stats }
    }

    /// Searches with the settings carried by `request`.
    pub fn search_request<'a>(&self, request: &SearchRequest<'a>) -> SearchOutcome<'a> {
        let engine = Self {
            overlap_cutoff: request.overlap_cutoff,
            parallel: request.parallel,
        };
        engine.search(request.catalog, request.size)
    }

    /// Evaluates a stream of index combinations in order.
    fn evaluate_all<'a, I>(
        &self,
        catalog: &'a [Course],
        rules: &SelectionConstraints<'_>,
        combinations: I,
    ) -> (Vec<CombinationResult<'a>>, SearchStats)
    where
        I: Iterator<Item = Vec<usize>>,
    {
        let mut results = Vec::new();
        let mut stats = SearchStats::default();

        for indices in combinations {
            stats.enumerated += 1;
            let courses: Vec<&'a Course> = indices.iter().map(|&i| &catalog[i]).collect();

            if !rules.permits(&courses) {
                trace!("rejected {indices:?}: selection constraints");
                stats.rejected_by_constraints += 1;
                continue;
            }

            let overlap = overlap::evaluate(&courses);
            if overlap.total_minutes > self.overlap_cutoff {
                trace!(
                    "rejected {indices:?}: overlap {} > cutoff {}",
                    overlap.total_minutes,
                    self.overlap_cutoff
                );
                stats.rejected_by_cutoff += 1;
                continue;
            }

            let gap = gap::evaluate(&courses);
            stats.kept += 1;
            results.push(ScheduleScore { overlap, gap }.into_result(courses));
        }

        (results, stats)
    }
}

/// Ranks all `size`-course combinations of `catalog`, best first.
///
/// Sequential search with the given overlap cutoff; see [`CombinationSearch`].
pub fn search(catalog: &[Course], size: usize, overlap_cutoff: u32) -> Vec<CombinationResult<'_>> {
    CombinationSearch::new()
        .with_overlap_cutoff(overlap_cutoff)
        .search(catalog, size)
        .results
}
