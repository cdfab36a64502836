// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Aho-Corasick multi-pattern matcher.

use super::automaton::Automaton;
use crate::matching::pattern::{text_symbols, PatternSet};
use crate::matching::{Match, MatchLocations, Matcher};

/// Finds all patterns of a set in one pass over the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct AhoCorasickMatcher;

impl AhoCorasickMatcher {
    /// Creates an Aho-Corasick matcher.
    pub fn new() -> Self {
        Self
    }

    /// Builds the automaton for `patterns` so it can be run over many texts.
    pub fn compile(&self, patterns: &PatternSet) -> Automaton {
        Automaton::build(patterns.symbols())
    }

    /// Every `{pattern index, end-position}` occurrence of `patterns` in `text`.
    pub fn match_pairs(&self, patterns: &PatternSet, text: &str) -> Vec<Match> {
        self.compile(patterns).find_all(&text_symbols(text))
    }
}

impl Matcher for AhoCorasickMatcher {
    fn name(&self) -> &'static str {
        "aho_corasick"
    }

    fn match_locations(&self, patterns: &PatternSet, text: &str) -> MatchLocations {
        self.match_pairs(patterns, text)
            .into_iter()
            .map(|found| found.end)
            .collect()
    }
}
