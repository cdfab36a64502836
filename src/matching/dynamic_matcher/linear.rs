// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Approximate matcher that keeps two rows of the edit table.

use std::mem;

use super::{accept_row, log_excluded, EditCosts};
use crate::matching::pattern::{text_symbols, PatternSet};
use crate::matching::{ApproximateMatcher, EditValues};

/// Computes the same values as [`super::FullDynamicMatcher`] in
/// O(text length) memory per pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearDynamicMatcher {
    costs: EditCosts,
}

impl LinearDynamicMatcher {
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

    /// Last row of the edit table of `pattern` against `text`.
    pub fn last_row(&self, pattern: &[char], text: &[char]) -> Vec<usize> {
        let deletion = self.costs.deletion;
        let mut previous = vec![0usize; text.len() + 1];
        let mut current = vec![0usize; text.len() + 1];

        for (row, &symbol) in pattern.iter().enumerate() {
            current[0] = (row + 1).saturating_mul(deletion);
            for column in 1..=text.len() {
                let diagonal =
                    previous[column - 1].saturating_add(self.costs.align(symbol, text[column - 1]));
                let vertical = previous[column].saturating_add(deletion);
                let horizontal = current[column - 1].saturating_add(deletion);
                current[column] = diagonal.min(vertical).min(horizontal);
            }
            mem::swap(&mut previous, &mut current);
        }

        previous
    }

    /// Runs `pattern` over a slice of a larger text that starts at `offset`
    /// and merges accepted end-positions, shifted back to text coordinates,
    /// into `values`.
    pub(crate) fn verify_window(
        &self,
        pattern: &[char],
        window: &[char],
        max_edits: usize,
        offset: usize,
        values: &mut EditValues,
    ) {
        let last_row = self.last_row(pattern, window);
        accept_row(
            &last_row,
            pattern.len(),
            max_edits,
            &self.costs,
            offset,
            values,
        );
    }
}

impl ApproximateMatcher for LinearDynamicMatcher {
    fn name(&self) -> &'static str {
        "linear_dynamic"
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
            self.verify_window(pattern, &text, max_edits, 0, &mut values);
        }
        values
    }
}
