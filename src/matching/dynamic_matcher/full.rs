// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Approximate matcher that keeps the whole edit table.

use super::trace::{MatchTrace, Step};
use super::{accept_row, log_excluded, EditCosts};
use crate::matching::error::{MatchError, Result};
use crate::matching::pattern::{text_symbols, PatternSet};
use crate::matching::{ApproximateMatcher, EditValues};

/// Fills the `(m + 1) x (n + 1)` edit table for each pattern.
///
/// Memory grows with `m * n`; use [`super::LinearDynamicMatcher`] when the
/// table itself is not needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullDynamicMatcher {
    costs: EditCosts,
}

impl FullDynamicMatcher {
    /// Creates a matcher with the default costs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher with custom costs.
    pub fn with_costs(costs: EditCosts) -> Self {
        Self { costs }
    }

    /// The cost model in use.
    pub fn costs(&self) -> EditCosts {
        self.costs
    }

    /// Row-major table values and backpointers.
    fn fill(&self, pattern: &[char], text: &[char]) -> (Vec<usize>, Vec<Step>) {
        let columns = text.len() + 1;
        let cells = (pattern.len() + 1) * columns;
        let mut table = vec![0; cells];
        let mut steps = vec![Step::Start; cells];
        let deletion = self.costs.deletion;

        for row in 1..=pattern.len() {
            let current = row * columns;
            let above = current - columns;
            table[current] = row.saturating_mul(deletion);

            for column in 1..columns {
                let diagonal = table[above + column - 1]
                    .saturating_add(self.costs.align(pattern[row - 1], text[column - 1]));
                let vertical = table[above + column].saturating_add(deletion);
                let horizontal = table[current + column - 1].saturating_add(deletion);

                let (value, step) = if diagonal <= vertical && diagonal <= horizontal {
                    let step = if pattern[row - 1] == text[column - 1] {
                        Step::Match
                    } else {
                        Step::Substitute
                    };
                    (diagonal, step)
                } else if vertical <= horizontal {
                    (vertical, Step::SkipPattern)
                } else {
                    (horizontal, Step::SkipText)
                };
                table[current + column] = value;
                steps[current + column] = step;
            }
        }

        (table, steps)
    }

    /// Fills the table for a single pattern and returns it with its
    /// accepted end-positions.
    ///
    /// A pattern no longer than `max_edits` yields a table without accepted
    /// positions.
    pub fn trace(&self, pattern: &str, text: &str, max_edits: usize) -> Result<MatchTrace> {
        if pattern.is_empty() {
            return Err(MatchError::EmptyPattern { index: 0 });
        }
        let pattern = text_symbols(pattern);
        let text = text_symbols(text);
        let (table, steps) = self.fill(&pattern, &text);

        let mut edit_values = EditValues::new();
        if pattern.len() > max_edits {
            let last_row = &table[pattern.len() * (text.len() + 1)..];
            accept_row(
                last_row,
                pattern.len(),
                max_edits,
                &self.costs,
                0,
                &mut edit_values,
            );
        }

        Ok(MatchTrace::new(pattern, text, table, steps, edit_values))
    }
}

impl ApproximateMatcher for FullDynamicMatcher {
    fn name(&self) -> &'static str {
        "full_dynamic"
    }

    fn match_edit_values(
        &self,
        patterns: &PatternSet,
        text: &str,
        max_edits: usize,
    ) -> EditValues {
        log_excluded(self.name(), patterns, max_edits);
        let text = text_symbols(text);
        let mut values = EditValues::new();

        for (_, pattern) in patterns.searchable(max_edits) {
            let (table, _) = self.fill(pattern, &text);
            let last_row = &table[pattern.len() * (text.len() + 1)..];
            accept_row(
                last_row,
                pattern.len(),
                max_edits,
                &self.costs,
                0,
                &mut values,
            );
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_pattern_scenario() {
        let values = FullDynamicMatcher::new()
            .locate_pattern("tpr", "tpyxtpzxtpyxtpr", 1)
            .unwrap();
        assert_eq!(
            values,
            EditValues::from([(3, 99), (7, 99), (11, 99), (15, 0)])
        );
    }

    #[test]
    fn test_trace_table() {
        let trace = FullDynamicMatcher::new().trace("ab", "xab", 1).unwrap();

        assert_eq!(trace.cell(0, 2), Some(0));
        assert_eq!(trace.cell(2, 0), Some(200));
        assert_eq!(trace.cell(1, 2), Some(0));
        assert_eq!(trace.cell(2, 3), Some(0));
        assert_eq!(trace.cell(3, 0), None);
        assert_eq!(trace.cell(0, 4), None);
        assert_eq!(trace.last_row(), &[200, 199, 100, 0]);

        assert_eq!(trace.step(2, 3), Some(Step::Match));
        assert_eq!(trace.step(1, 1), Some(Step::Substitute));
        assert_eq!(trace.step(0, 3), Some(Step::Start));
        assert_eq!(trace.alignment_start(3), Some(1));
        assert_eq!(trace.edit_values(), &EditValues::from([(3, 0)]));
    }

    #[test]
    fn test_alignment_with_skipped_text_symbol() {
        let trace = FullDynamicMatcher::new().trace("abc", "abxc", 1).unwrap();

        // Substituting `x` for `c` at 3 is cheaper, so 4 is not a local minimum
        assert_eq!(trace.edit_values(), &EditValues::from([(3, 99)]));
        assert_eq!(trace.cell(3, 4), Some(100));
        assert_eq!(trace.step(3, 4), Some(Step::Match));
        assert_eq!(trace.step(2, 3), Some(Step::SkipText));
        assert_eq!(trace.alignment_start(4), Some(0));
    }

    #[test]
    fn test_trace_rejects_empty_pattern() {
        let result = FullDynamicMatcher::new().trace("", "text", 0);
        assert_eq!(result.unwrap_err(), MatchError::EmptyPattern { index: 0 });
    }

    #[test]
    fn test_short_patterns_are_skipped() {
        let values = FullDynamicMatcher::new()
            .locate(&["a", "ab"], "xxabxx", 1)
            .unwrap();
        assert_eq!(values.get(&4), Some(&0));
        assert_eq!(values.get(&1), None);

        let only_short = FullDynamicMatcher::new().locate(&["a"], "aaa", 1).unwrap();
        assert!(only_short.is_empty());
    }

    #[test]
    fn test_display_renders_every_row() {
        let trace = FullDynamicMatcher::new().trace("ab", "ab", 0).unwrap();
        let rendered = trace.to_string();
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.lines().nth(2).unwrap().starts_with("  a"));
    }
}
