// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Boyer-Moore string matching algorithm implementation.
//!
//! This module contains the window scan itself and the multi-pattern
//! [`Matcher`] built on top of it.

use std::iter::FusedIterator;

use super::preprocess::PreprocessedPattern;
use super::tables::{Section, Shift};
use crate::matching::pattern::{text_symbols, PatternSet};
use crate::matching::{MatchLocations, Matcher};

/// Iterator over the end-positions of one pattern in a text.
#[derive(Debug)]
pub struct MatchIterator<'a> {
    /// The preprocessed pattern
    pattern: &'a PreprocessedPattern,

    /// The text being searched
    text: &'a [char],

    /// Text offset of the current window
    window: usize,

    /// Pattern span known to match under the current window
    section: Option<Section>,
}

impl<'a> MatchIterator<'a> {
    pub(super) fn new(pattern: &'a PreprocessedPattern, text: &'a [char]) -> Self {
        Self {
            pattern,
            text,
            window: 0,
            section: None,
        }
    }

    /// Compares the window right to left and returns the offset of the
    /// first mismatch, skipping the known section.
    fn compare_window(&self) -> Option<usize> {
        let pattern = &self.pattern.pattern;
        let mut next = pattern.len();

        while next > 0 {
            let offset = next - 1;
            if let Some(section) = self.section {
                if offset == section.end {
                    next = section.start;
                    continue;
                }
            }
            if pattern[offset] != self.text[self.window + offset] {
                return Some(offset);
            }
            next = offset;
        }
        None
    }

    /// Applies the larger of the two rules. The section survives only when
    /// the good suffix rule decided the shift.
    fn advance_after_mismatch(&mut self, offset: usize) {
        let bad_char = self
            .pattern
            .bad_char_table
            .shift(self.text[self.window + offset], offset);
        let good_suffix = self.pattern.good_suffix_table.mismatch_shift(offset);

        if good_suffix.distance >= bad_char {
            self.apply(good_suffix);
        } else {
            self.apply(Shift {
                distance: bad_char,
                section: None,
            });
        }
    }

    fn apply(&mut self, shift: Shift) {
        self.window += shift.distance;
        self.section = shift.section;
    }
}

impl<'a> Iterator for MatchIterator<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.pattern.len();
        if len == 0 {
            return None;
        }

        while self.window + len <= self.text.len() {
            match self.compare_window() {
                Some(offset) => self.advance_after_mismatch(offset),
                None => {
                    let end = self.window + len;
                    let shift = self.pattern.good_suffix_table.match_shift();
                    self.apply(shift);
                    return Some(end);
                }
            }
        }
        None
    }
}

// Once the window passes the end of the text it stays there
impl<'a> FusedIterator for MatchIterator<'a> {}

/// Boyer-Moore pattern matcher, preprocessing each pattern separately.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoyerMooreMatcher;

impl BoyerMooreMatcher {
    /// Creates a new Boyer-Moore matcher.
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for BoyerMooreMatcher {
    fn name(&self) -> &'static str {
        "boyer_moore"
    }

    fn match_locations(&self, patterns: &PatternSet, text: &str) -> MatchLocations {
        let text = text_symbols(text);
        let mut locations = MatchLocations::new();

        for pattern in patterns.symbols() {
            let preprocessed = PreprocessedPattern::new(pattern);
            locations.extend(preprocessed.find_all(&text));
        }
        locations
    }
}
