// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Brute-force scanning, the baseline every other matcher is checked against.

use super::pattern::{text_symbols, PatternSet};
use super::{MatchLocations, Matcher};

/// Scans for each pattern independently, restarting one symbol past the
/// previous occurrence so that overlapping occurrences are all found.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveMatcher;

impl NaiveMatcher {
    /// Creates a naive matcher.
    pub fn new() -> Self {
        Self
    }
}

/// Start of the first occurrence of `pattern` at or after `from`.
fn find_from(text: &[char], pattern: &[char], from: usize) -> Option<usize> {
    text.get(from..)?
        .windows(pattern.len())
        .position(|window| window == pattern)
        .map(|offset| from + offset)
}

impl Matcher for NaiveMatcher {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn match_locations(&self, patterns: &PatternSet, text: &str) -> MatchLocations {
        let text = text_symbols(text);
        let mut locations = MatchLocations::new();

        for pattern in patterns.symbols() {
            let mut from = 0;
            while let Some(location) = find_from(&text, pattern, from) {
                locations.insert(location + pattern.len());
                from = location + 1;
            }
        }
        locations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_occurrence() {
        let locations = NaiveMatcher::new()
            .locate_pattern("tpr", "tpyxtpzxtpyxtpr")
            .unwrap();
        assert_eq!(locations, MatchLocations::from([15]));
    }

    #[test]
    fn test_overlapping_occurrences() {
        let locations = NaiveMatcher::new().locate_pattern("aaa", "aaaaa").unwrap();
        assert_eq!(locations, MatchLocations::from([3, 4, 5]));
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let locations = NaiveMatcher::new().locate_pattern("pattern", "pat").unwrap();
        assert!(locations.is_empty());
        assert_eq!(NaiveMatcher::new().locate_pattern("a", "").unwrap().len(), 0);
    }

    #[test]
    fn test_positions_are_char_offsets() {
        let locations = NaiveMatcher::new()
            .locate_pattern("café", "I'm at the café now")
            .unwrap();
        assert_eq!(locations, MatchLocations::from([15]));
    }
}
