// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Pattern preprocessing for the Boyer-Moore algorithm.
//!
//! The preprocessing step analyzes one pattern and produces the immutable
//! lookup tables that let the search phase skip text positions. Tables are
//! never shared between patterns.

use super::matcher::MatchIterator;
use super::tables::{BadCharTable, GoodSuffixTable};

/// Result of the preprocessing step containing all necessary lookup tables.
#[derive(Debug, Clone)]
pub struct PreprocessedPattern {
    /// The pattern being searched for
    pub(super) pattern: Vec<char>,

    /// Bad character rule table
    pub(super) bad_char_table: BadCharTable,

    /// Good suffix rule table
    pub(super) good_suffix_table: GoodSuffixTable,
}

impl PreprocessedPattern {
    /// Preprocesses a pattern for use in the Boyer-Moore algorithm.
    pub fn new(pattern: &[char]) -> Self {
        Self {
            pattern: pattern.to_vec(),
            bad_char_table: BadCharTable::new(pattern),
            good_suffix_table: GoodSuffixTable::new(pattern),
        }
    }

    /// The length of the pattern in symbols.
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    /// Whether the pattern has no symbols.
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The bad character table.
    pub fn bad_char_table(&self) -> &BadCharTable {
        &self.bad_char_table
    }

    /// The good suffix table.
    pub fn good_suffix_table(&self) -> &GoodSuffixTable {
        &self.good_suffix_table
    }

    /// Returns an iterator over the end-positions of every occurrence of the
    /// pattern in `text`, overlapping occurrences included.
    pub fn find_all<'a>(&'a self, text: &'a [char]) -> MatchIterator<'a> {
        MatchIterator::new(self, text)
    }
}
