// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Knuth-Morris-Pratt matching with a failure function derived from Z-values.

use super::pattern::{text_symbols, PatternSet};
use super::z_values::z_values;
use super::{MatchLocations, Matcher};

/// Per-pattern preprocessing for the Knuth-Morris-Pratt scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KmpTable {
    /// The pattern symbols
    pattern: Vec<char>,

    /// `failure[p]` is the number of symbols still matched after a mismatch
    /// following `p` matched symbols: the strong border `sp'(p)`.
    failure: Vec<usize>,
}

impl KmpTable {
    /// Builds the failure function of `pattern`.
    ///
    /// For every `j >= 1` the substring starting at `j` matches a prefix of
    /// length `Z[j]` and then stops matching at `j + Z[j] - 1`, so that prefix
    /// is the strong border of the prefix of length `j + Z[j]`. Visiting `j`
    /// from right to left leaves the longest such border in place.
    pub fn preprocess(pattern: &[char]) -> Self {
        let len = pattern.len();
        let z = z_values(pattern);
        let mut failure = vec![0; len + 1];

        for j in (1..len).rev() {
            if z[j] > 0 {
                failure[j + z[j]] = z[j];
            }
        }

        Self {
            pattern: pattern.to_vec(),
            failure,
        }
    }

    /// The failure function, indexed by the number of matched symbols.
    pub fn failure(&self) -> &[usize] {
        &self.failure
    }

    /// End-positions of every occurrence of the pattern in `text`.
    pub fn find_all(&self, text: &[char]) -> Vec<usize> {
        let len = self.pattern.len();
        let mut ends = Vec::new();
        if len == 0 {
            return ends;
        }

        let mut matched = 0;
        for (position, &symbol) in text.iter().enumerate() {
            loop {
                if self.pattern[matched] == symbol {
                    matched += 1;
                    break;
                }
                if matched == 0 {
                    break;
                }
                matched = self.failure[matched];
            }

            if matched == len {
                ends.push(position + 1);
                matched = self.failure[len];
            }
        }
        ends
    }
}

/// Runs one Knuth-Morris-Pratt scan per pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnuthMorrisPrattMatcher;

impl KnuthMorrisPrattMatcher {
    /// Creates a Knuth-Morris-Pratt matcher.
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for KnuthMorrisPrattMatcher {
    fn name(&self) -> &'static str {
        "knuth_morris_pratt"
    }

    fn match_locations(&self, patterns: &PatternSet, text: &str) -> MatchLocations {
        let text = text_symbols(text);
        patterns
            .symbols()
            .iter()
            .flat_map(|pattern| KmpTable::preprocess(pattern).find_all(&text))
            .collect()
    }
}
