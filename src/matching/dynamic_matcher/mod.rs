// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Dynamic-programming approximate matchers.
//!
//! Both matchers fill the same edit table, where cell `(i, j)` is the
//! cheapest way to turn the first `i` pattern symbols into a text substring
//! ending at `j`:
//!
//! ```text
//! edit[0][j] = 0
//! edit[i][0] = i * deletion
//! edit[i][j] = min(edit[i][j-1]   + deletion,
//!                  edit[i-1][j]   + deletion,
//!                  edit[i-1][j-1] + (P[i-1] == T[j-1] ? 0 : substitution))
//! ```
//!
//! Only the last row is reported. [`FullDynamicMatcher`] keeps every row
//! and can hand the table back as a [`MatchTrace`];
//! [`LinearDynamicMatcher`] keeps two rows.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EditValues, PatternSet};

mod full;
mod linear;
mod trace;

pub use full::FullDynamicMatcher;
pub use linear::LinearDynamicMatcher;
pub use trace::{MatchTrace, Step};

/// Costs charged by the edit recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditCosts {
    /// Cost of replacing one symbol with another
    pub substitution: usize,

    /// Cost of skipping a symbol on either side (insertion or deletion)
    pub deletion: usize,
}

impl Default for EditCosts {
    /// A substitution is slightly cheaper than a deletion, so one edit never
    /// costs more than `deletion`.
    fn default() -> Self {
        Self {
            substitution: 99,
            deletion: 100,
        }
    }
}

impl EditCosts {
    /// Creates a cost model.
    pub fn new(substitution: usize, deletion: usize) -> Self {
        Self {
            substitution,
            deletion,
        }
    }

    /// Largest accepted edit value for a budget of `max_edits` edits.
    pub fn threshold(&self, max_edits: usize) -> usize {
        max_edits.saturating_mul(self.deletion)
    }

    /// Whether a budget of `max_edits` edits pays for at most `max_edits`
    /// edit operations, which the partitioned matcher needs to find every
    /// match.
    pub fn admits_partitioning(&self, max_edits: usize) -> bool {
        let cheapest = self.substitution.min(self.deletion);
        self.threshold(max_edits) < (max_edits + 1).saturating_mul(cheapest)
    }

    /// Cost of aligning pattern symbol `pattern` with text symbol `text`.
    pub(crate) fn align(&self, pattern: char, text: char) -> usize {
        if pattern == text {
            0
        } else {
            self.substitution
        }
    }
}

/// Records the accepted end-positions of one pattern's last DP row.
///
/// Position `j` of `last_row` is accepted when its value is within the
/// budget, the match spans at least `pattern_len - max_edits` symbols, and
/// the value is no larger than either neighbour. Accepted positions are
/// shifted by `offset` and merged into `values`, keeping the minimum.
pub(crate) fn accept_row(
    last_row: &[usize],
    pattern_len: usize,
    max_edits: usize,
    costs: &EditCosts,
    offset: usize,
    values: &mut EditValues,
) {
    let threshold = costs.threshold(max_edits);
    let min_end = pattern_len.saturating_sub(max_edits).max(1);

    for end in min_end..last_row.len() {
        let value = last_row[end];
        if value > threshold || last_row[end - 1] < value {
            continue;
        }
        if last_row.get(end + 1).is_some_and(|&next| next < value) {
            continue;
        }
        merge_min(values, offset + end, value);
    }
}

/// Logs the patterns of `patterns` too short to search with `max_edits`.
pub(crate) fn log_excluded(matcher: &str, patterns: &PatternSet, max_edits: usize) {
    let excluded = patterns.excluded(max_edits);
    if !excluded.is_empty() {
        debug!(
            matcher,
            max_edits,
            excluded = ?excluded,
            "Skipping patterns no longer than the edit budget"
        );
    }
}

/// Inserts `value` at `position` unless a smaller value is already there.
pub(crate) fn merge_min(values: &mut EditValues, position: usize, value: usize) {
    values
        .entry(position)
        .and_modify(|existing| *existing = (*existing).min(value))
        .or_insert(value);
}
