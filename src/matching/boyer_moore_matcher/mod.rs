// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore Pattern Matcher for efficient string searching.
//!
//! This module provides an implementation of the Boyer-Moore string search
//! algorithm, which is particularly efficient for searching longer patterns in
//! large texts. The implementation combines the weak bad character rule with
//! the strong good suffix rule.
//!
//! # Features
//!
//! - Sublinear scanning on average
//! - Overlapping occurrences are all reported
//! - Positions are `char` offsets, so multi-byte text is handled uniformly
//! - Matched-section bookkeeping: after a good suffix shift the span of the
//!   pattern already known to match the text is not compared again
//!
//! # Example
//!
//! ```
//! use mauka_match_lib::matching::{BoyerMooreMatcher, Matcher, PreprocessedPattern};
//!
//! let text: Vec<char> = "Finding a needle in a haystack, then another needle.".chars().collect();
//! let pattern: Vec<char> = "needle".chars().collect();
//!
//! let preprocessed = PreprocessedPattern::new(&pattern);
//! let ends: Vec<usize> = preprocessed.find_all(&text).collect();
//! assert_eq!(ends, vec![16, 51]);
//!
//! let locations = BoyerMooreMatcher::new()
//!     .locate(&["needle", "hay"], "needle in a haystack")
//!     .unwrap();
//! assert_eq!(locations.into_iter().collect::<Vec<_>>(), vec![6, 15]);
//! ```
//!
//! # Performance Characteristics
//!
//! - Preprocessing time: O(m) per pattern, plus one hash entry per distinct symbol
//! - Best case: O(n/m) comparisons (where n is the text length)
//! - Worst case: O(n*m) comparisons when many occurrences overlap
//! - Average case: sublinear in n for natural-language text

mod matcher;
mod preprocess;
mod tables;

// Re-exports
pub use matcher::{BoyerMooreMatcher, MatchIterator};
pub use preprocess::PreprocessedPattern;
