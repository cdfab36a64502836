// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Validated, deduplicated pattern sets.
//!
//! Every matcher works on `char` symbols and reports `char` offsets, so a
//! pattern set keeps both the caller's strings and their symbol vectors.

use fnv::FnvHashSet;

use super::error::{MatchError, Result};

/// A non-empty set of distinct, non-empty patterns.
///
/// Duplicates are dropped at construction; the first occurrence keeps its
/// place, so pattern indices follow the caller's order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSet {
    /// The patterns as supplied by the caller
    patterns: Vec<String>,

    /// The patterns as symbol sequences
    symbols: Vec<Vec<char>>,
}

impl PatternSet {
    /// Builds a pattern set from any collection of strings.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::EmptyPatternSet`] when `patterns` yields nothing,
    /// or [`MatchError::EmptyPattern`] when any pattern is empty.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FnvHashSet::default();
        let mut set = Self {
            patterns: Vec::new(),
            symbols: Vec::new(),
        };

        for (index, pattern) in patterns.into_iter().enumerate() {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(MatchError::EmptyPattern { index });
            }
            if seen.insert(pattern.to_string()) {
                set.patterns.push(pattern.to_string());
                set.symbols.push(pattern.chars().collect());
            }
        }

        if set.patterns.is_empty() {
            return Err(MatchError::EmptyPatternSet);
        }
        Ok(set)
    }

    /// Builds a set holding exactly one pattern.
    pub fn single(pattern: &str) -> Result<Self> {
        Self::new([pattern])
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always `false`; a pattern set cannot be constructed empty.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The pattern with the given index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.patterns.get(index).map(String::as_str)
    }

    /// Iterates the patterns in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    /// Symbol sequences, one per pattern, in index order.
    pub fn symbols(&self) -> &[Vec<char>] {
        &self.symbols
    }

    /// Patterns long enough to be searched with `max_edits` edits,
    /// paired with their index.
    ///
    /// A pattern of length `<= max_edits` could be edited into an empty
    /// string and would match nearly everywhere, so it is left out.
    pub fn searchable(&self, max_edits: usize) -> impl Iterator<Item = (usize, &[char])> {
        self.symbols
            .iter()
            .enumerate()
            .filter(move |(_, symbols)| symbols.len() > max_edits)
            .map(|(index, symbols)| (index, symbols.as_slice()))
    }

    /// Patterns that [`searchable`](Self::searchable) leaves out.
    pub fn excluded(&self, max_edits: usize) -> Vec<&str> {
        self.patterns
            .iter()
            .zip(&self.symbols)
            .filter(|(_, symbols)| symbols.len() <= max_edits)
            .map(|(pattern, _)| pattern.as_str())
            .collect()
    }
}

/// Splits a text into the symbols every matcher indexes.
pub(crate) fn text_symbols(text: &str) -> Vec<char> {
    text.chars().collect()
}
