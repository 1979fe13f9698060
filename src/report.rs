//! Plain-text rendering of search results.
//!
//! Writes into any [`fmt::Write`] sink; callers decide whether the text
//! goes to a terminal, a file, or a response body.
//!
//! # Layout
//!
//! ```text
//! Graphs: Monday 10:00-12:00, Thursday 12:00-16:00
//! Deutsch 3: Monday 12:00-14:00, Friday 12:00-14:00
//! Overlap: 0 minutes
//! Gaps: 0 minutes
//! ```
//!
//! `Overlapping:` and `Gap windows:` lines are only written when non-empty.

use std::fmt::{self, Write};

use crate::models::CombinationResult;
use crate::search::SearchStats;

/// Writes one result.
pub fn write_result<W: Write>(out: &mut W, result: &CombinationResult<'_>) -> fmt::Result {
    for course in &result.courses {
        writeln!(out, "{course}")?;
    }

    writeln!(out, "Overlap: {} minutes", result.overlap_minutes)?;
    if !result.overlapping_pairs.is_empty() {
        out.write_str("Overlapping:")?;
        for (a, b) in &result.overlapping_pairs {
            write!(out, " [{}, {}]", a.name, b.name)?;
        }
        out.write_char('\n')?;
    }

    writeln!(out, "Gaps: {} minutes", result.gap_minutes)?;
    if !result.gap_windows.is_empty() {
        out.write_str("Gap windows:")?;
        for (i, window) in result.gap_windows.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(out, "{sep}{window}")?;
        }
        out.write_char('\n')?;
    }

    Ok(())
}

/// Writes results separated by blank lines, at most `limit` of them.
pub fn write_results<W: Write>(
    out: &mut W,
    results: &[CombinationResult<'_>],
    limit: Option<usize>,
) -> fmt::Result {
    let shown = limit.map_or(results.len(), |l| l.min(results.len()));
    for (i, result) in results[..shown].iter().enumerate() {
        if i > 0 {
            out.write_char('\n')?;
        }
        write_result(out, result)?;
    }
    Ok(())
}

/// Writes catalog size and search counters.
pub fn write_summary<W: Write>(out: &mut W, catalog_len: usize, stats: &SearchStats) -> fmt::Result {
    writeln!(out, "Courses: {catalog_len}")?;
    writeln!(
        out,
        "Combinations: {} enumerated, {} kept",
        stats.enumerated, stats.kept
    )
}

/// Renders results into a new string.
pub fn render_results(results: &[CombinationResult<'_>], limit: Option<usize>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_results(&mut out, results, limit);
    out
}
