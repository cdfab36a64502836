// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Exact and approximate multi-pattern matching.
//!
//! Two contracts are offered:
//!
//! - [`Matcher`] reports every end-position where some pattern occurs exactly.
//! - [`ApproximateMatcher`] reports, for every accepted end-position, the
//!   minimal edit value of a pattern occurrence ending there, within a budget
//!   of `max_edits` edits.
//!
//! All positions are `char` offsets, and an end-position is the offset just
//! past the last matched symbol.
//!
//! # Example
//!
//! ```
//! use mauka_match_lib::matching::{
//!     AhoCorasickMatcher, ApproximateMatcher, LinearDynamicMatcher, Matcher, PatternSet,
//! };
//!
//! let patterns = PatternSet::new(["py", "tpyx", "yx"]).unwrap();
//! let locations = AhoCorasickMatcher::new().match_locations(&patterns, "tpyxtpzxtpyxtprpy");
//! assert_eq!(locations.into_iter().collect::<Vec<_>>(), vec![3, 4, 11, 12, 17]);
//!
//! let patterns = PatternSet::single("tpr").unwrap();
//! let values = LinearDynamicMatcher::new().match_edit_values(&patterns, "tpyxtpzxtpyxtpr", 1);
//! assert_eq!(values.get(&15), Some(&0));
//! assert_eq!(values.get(&3), Some(&99));
//! ```
//!
//! # Choosing an algorithm
//!
//! | Matcher | Preprocessing | Scan |
//! |---|---|---|
//! | [`NaiveMatcher`] | none | O(n·m) per pattern |
//! | [`BoyerMooreMatcher`] | O(m + σ) per pattern | sublinear on average |
//! | [`KnuthMorrisPrattMatcher`] | O(m) per pattern | O(n) per pattern |
//! | [`AhoCorasickMatcher`] | O(Σm) once | O(n + matches) for all patterns |
//! | [`FullDynamicMatcher`] | none | O(n·m) time and space |
//! | [`LinearDynamicMatcher`] | none | O(n·m) time, O(n) space |
//! | [`BaezaYatesPerlbergMatcher`] | O(Σm) once | automaton scan + DP on candidate windows |

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

mod aho_corasick_matcher;
mod algorithm;
mod boyer_moore_matcher;
mod dynamic_matcher;
mod error;
mod kmp_matcher;
mod naive_matcher;
mod partitioned_matcher;
mod pattern;
mod z_values;

#[cfg(test)]
mod tests;

// Re-exports
pub use aho_corasick_matcher::{AhoCorasickMatcher, Automaton, Node, NodeId, ROOT};
pub use algorithm::{ApproximateAlgorithm, ExactAlgorithm};
pub use boyer_moore_matcher::{BoyerMooreMatcher, MatchIterator, PreprocessedPattern};
pub use dynamic_matcher::{EditCosts, FullDynamicMatcher, LinearDynamicMatcher, MatchTrace, Step};
pub use error::{MatchError, Result};
pub use kmp_matcher::{KmpTable, KnuthMorrisPrattMatcher};
pub use naive_matcher::NaiveMatcher;
pub use partitioned_matcher::BaezaYatesPerlbergMatcher;
pub use pattern::PatternSet;
pub use z_values::z_values;

/// End-positions of exact matches, in ascending order.
pub type MatchLocations = BTreeSet<usize>;

/// End-position to minimal edit value of an approximate match.
pub type EditValues = BTreeMap<usize, usize>;

/// A single occurrence of one pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Match {
    /// Index of the pattern in its [`PatternSet`]
    pub pattern: usize,

    /// Offset just past the last matched symbol
    pub end: usize,

    /// Edit value of the occurrence, `0` for exact matches
    pub edits: usize,
}

impl Match {
    /// An exact occurrence of `pattern` ending at `end`.
    pub fn exact(pattern: usize, end: usize) -> Self {
        Self {
            pattern,
            end,
            edits: 0,
        }
    }
}

/// Exact multi-pattern matching.
///
/// Implementations are stateless and may be shared between threads.
pub trait Matcher: Send + Sync {
    /// Short name used in reports.
    fn name(&self) -> &'static str;

    /// Every end-position at which some pattern of `patterns` occurs in `text`.
    fn match_locations(&self, patterns: &PatternSet, text: &str) -> MatchLocations;

    /// Number of distinct end-positions.
    fn matches(&self, patterns: &PatternSet, text: &str) -> usize {
        self.match_locations(patterns, text).len()
    }

    /// Validates `patterns` and searches for them.
    fn locate(&self, patterns: &[&str], text: &str) -> Result<MatchLocations> {
        let patterns = PatternSet::new(patterns.iter().copied())?;
        Ok(self.match_locations(&patterns, text))
    }

    /// Validates a single pattern and searches for it.
    fn locate_pattern(&self, pattern: &str, text: &str) -> Result<MatchLocations> {
        let patterns = PatternSet::single(pattern)?;
        Ok(self.match_locations(&patterns, text))
    }
}

/// Edit-distance bounded multi-pattern matching.
///
/// Patterns whose length does not exceed `max_edits` are skipped.
pub trait ApproximateMatcher: Send + Sync {
    /// Short name used in reports.
    fn name(&self) -> &'static str;

    /// Accepted end-positions mapped to the minimal edit value reached there.
    fn match_edit_values(&self, patterns: &PatternSet, text: &str, max_edits: usize)
        -> EditValues;

    /// The accepted end-positions.
    fn match_locations(&self, patterns: &PatternSet, text: &str, max_edits: usize) -> MatchLocations {
        self.match_edit_values(patterns, text, max_edits)
            .into_keys()
            .collect()
    }

    /// Number of accepted end-positions.
    fn matches(&self, patterns: &PatternSet, text: &str, max_edits: usize) -> usize {
        self.match_edit_values(patterns, text, max_edits).len()
    }

    /// Validates `patterns` and searches for them.
    fn locate(&self, patterns: &[&str], text: &str, max_edits: usize) -> Result<EditValues> {
        let patterns = PatternSet::new(patterns.iter().copied())?;
        Ok(self.match_edit_values(&patterns, text, max_edits))
    }

    /// Validates a single pattern and searches for it.
    fn locate_pattern(&self, pattern: &str, text: &str, max_edits: usize) -> Result<EditValues> {
        let patterns = PatternSet::single(pattern)?;
        Ok(self.match_edit_values(&patterns, text, max_edits))
    }
}
