// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Baeza-Yates-Perlberg partition-and-verify approximate matcher.
//!
//! A pattern split into `k + 1` pieces cannot absorb `k` edits without
//! leaving at least one piece intact, so every occurrence within the budget
//! contains an exact occurrence of some piece. The matcher finds all piece
//! occurrences with one Aho-Corasick pass, then runs the linear DP matcher
//! only on text windows around them.

use std::collections::BTreeSet;
use std::ops::Range;

use fnv::FnvHashMap;
use tracing::{debug, trace, warn};

use super::aho_corasick_matcher::Automaton;
use super::dynamic_matcher::{log_excluded, EditCosts, LinearDynamicMatcher};
use super::pattern::{text_symbols, PatternSet};
use super::{ApproximateMatcher, EditValues};

/// The pieces one pattern is split into.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Partition {
    /// Length of every piece but the last
    sub_len: usize,
    pieces: Vec<Range<usize>>,
}

impl Partition {
    /// Splits a pattern of `pattern_len` symbols into `max_edits + 1`
    /// non-empty pieces; requires `pattern_len > max_edits`.
    fn new(pattern_len: usize, max_edits: usize) -> Self {
        let parts = max_edits + 1;
        let mut sub_len = (2 * pattern_len + parts) / (2 * parts);
        if sub_len * max_edits >= pattern_len {
            sub_len = pattern_len / parts;
        }

        let mut pieces: Vec<Range<usize>> = (0..max_edits)
            .map(|index| index * sub_len..(index + 1) * sub_len)
            .collect();
        pieces.push(max_edits * sub_len..pattern_len);

        Self { sub_len, pieces }
    }
}

/// A piece of a pattern, as seen from the automaton.
#[derive(Debug, Clone, Copy)]
struct Owner {
    pattern: usize,
    piece: usize,
}

/// Partition-and-verify matcher, fastest when patterns are long compared to
/// the edit budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaezaYatesPerlbergMatcher {
    verifier: LinearDynamicMatcher,
}

impl BaezaYatesPerlbergMatcher {
    /// Creates a matcher with the default costs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matcher with custom costs.
    pub fn with_costs(costs: EditCosts) -> Self {
        Self {
            verifier: LinearDynamicMatcher::with_costs(costs),
        }
    }

    /// The cost model in use.
    pub fn costs(&self) -> EditCosts {
        self.verifier.costs()
    }

    /// Verification window around a piece occurrence ending at `anchor_end`.
    fn window(
        partition: &Partition,
        piece: usize,
        pattern_len: usize,
        max_edits: usize,
        anchor_end: usize,
        text_len: usize,
    ) -> Range<usize> {
        let sub_len = partition.sub_len;
        let piece_end = partition.pieces[piece].end;

        let before = ((piece + 1) * sub_len).max(piece_end);
        let after = ((max_edits + 1 - piece) * sub_len).max(pattern_len - piece_end);

        let start = anchor_end.saturating_sub(max_edits + before);
        let end = (anchor_end + max_edits + after + 1).min(text_len);
        start..end
    }
}

impl ApproximateMatcher for BaezaYatesPerlbergMatcher {
    fn name(&self) -> &'static str {
        "partitioned"
    }

    fn match_edit_values(
        &self,
        patterns: &PatternSet,
        text: &str,
        max_edits: usize,
    ) -> EditValues {
        log_excluded(self.name(), patterns, max_edits);
        if !self.costs().admits_partitioning(max_edits) {
            warn!(
                max_edits,
                costs = ?self.costs(),
                "Edit budget pays for more edits than pieces allow, matches may be missed"
            );
        }
        let text = text_symbols(text);

        let mut partitions: FnvHashMap<usize, Partition> = FnvHashMap::default();
        let mut piece_ids: FnvHashMap<&[char], usize> = FnvHashMap::default();
        let mut pieces: Vec<Vec<char>> = Vec::new();
        let mut owners: Vec<Vec<Owner>> = Vec::new();

        for (pattern_index, pattern) in patterns.searchable(max_edits) {
            let partition = Partition::new(pattern.len(), max_edits);
            for (piece_index, range) in partition.pieces.iter().enumerate() {
                let piece = &pattern[range.clone()];
                let id = *piece_ids.entry(piece).or_insert_with(|| {
                    pieces.push(piece.to_vec());
                    owners.push(Vec::new());
                    pieces.len() - 1
                });
                owners[id].push(Owner {
                    pattern: pattern_index,
                    piece: piece_index,
                });
            }
            partitions.insert(pattern_index, partition);
        }

        let mut values = EditValues::new();
        if pieces.is_empty() {
            return values;
        }

        let automaton = Automaton::build(&pieces);
        let mut windows: BTreeSet<(usize, usize, usize)> = BTreeSet::new();
        let anchors = automaton.find_all(&text);

        for anchor in &anchors {
            for owner in &owners[anchor.pattern] {
                let Some(partition) = partitions.get(&owner.pattern) else {
                    continue;
                };
                let pattern_len = patterns.symbols()[owner.pattern].len();
                let window = Self::window(
                    partition,
                    owner.piece,
                    pattern_len,
                    max_edits,
                    anchor.end,
                    text.len(),
                );
                windows.insert((owner.pattern, window.start, window.end));
            }
        }

        debug!(
            pieces = pieces.len(),
            anchors = anchors.len(),
            windows = windows.len(),
            "Verifying candidate windows"
        );

        let symbols = patterns.symbols();
        for (pattern, Range { start, end }) in merge_windows(&windows) {
            trace!(pattern, start, end, "Verifying window");
            self.verifier.verify_window(
                &symbols[pattern],
                &text[start..end],
                max_edits,
                start,
                &mut values,
            );
        }

        suppress_adjacent(values)
    }
}

/// Joins overlapping or touching windows of the same pattern, so that no
/// end-position is judged without the row values on both sides of it.
fn merge_windows(windows: &BTreeSet<(usize, usize, usize)>) -> Vec<(usize, Range<usize>)> {
    let mut merged: Vec<(usize, Range<usize>)> = Vec::new();
    for &(pattern, start, end) in windows {
        match merged.last_mut() {
            Some((last_pattern, last)) if *last_pattern == pattern && start <= last.end => {
                last.end = last.end.max(end);
            }
            _ => merged.push((pattern, start..end)),
        }
    }
    merged
}

/// Drops every entry whose value is greater than the value at an adjacent
/// end-position.
fn suppress_adjacent(values: EditValues) -> EditValues {
    let smaller_neighbour = |position: usize, value: usize| {
        let left = position
            .checked_sub(1)
            .and_then(|left| values.get(&left))
            .is_some_and(|&left| left < value);
        let right = values.get(&(position + 1)).is_some_and(|&right| right < value);
        left || right
    };

    values
        .iter()
        .filter(|&(&position, &value)| !smaller_neighbour(position, value))
        .map(|(&position, &value)| (position, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{Matcher, NaiveMatcher};

    #[test]
    fn test_partition_rounds_piece_length() {
        let partition = Partition::new(27, 3);
        assert_eq!(partition.sub_len, 7);
        assert_eq!(partition.pieces, vec![0..7, 7..14, 14..21, 21..27]);

        let partition = Partition::new(3, 1);
        assert_eq!(partition.pieces, vec![0..2, 2..3]);

        let partition = Partition::new(5, 0);
        assert_eq!(partition.pieces, vec![0..5]);
    }

    #[test]
    fn test_partition_keeps_last_piece_non_empty() {
        // Rounding 6 / 4 up would use the whole pattern for the first 3 pieces
        let partition = Partition::new(6, 3);
        assert_eq!(partition.sub_len, 1);
        assert_eq!(partition.pieces, vec![0..1, 1..2, 2..3, 3..6]);
    }

    #[test]
    fn test_window_covers_long_last_piece() {
        let partition = Partition::new(6, 3);
        // Last piece `3..6` ending at 20 means the pattern starts near 14
        let window = BaezaYatesPerlbergMatcher::window(&partition, 3, 6, 3, 20, 100);
        assert_eq!(window, 11..25);

        let window = BaezaYatesPerlbergMatcher::window(&partition, 0, 6, 3, 2, 10);
        assert_eq!(window, 0..10);
    }

    #[test]
    fn test_single_pattern_scenario() {
        let values = BaezaYatesPerlbergMatcher::new()
            .locate_pattern("tpr", "tpyxtpzxtpyxtpr", 1)
            .unwrap();
        assert_eq!(
            values,
            EditValues::from([(3, 99), (7, 99), (11, 99), (15, 0)])
        );
    }

    #[test]
    fn test_zero_edits_find_exact_occurrences() {
        let values = BaezaYatesPerlbergMatcher::new()
            .locate_pattern("aaa", "aaaaa", 0)
            .unwrap();
        assert_eq!(values, EditValues::from([(3, 0), (4, 0), (5, 0)]));
    }

    #[test]
    fn test_shared_pieces_across_patterns() {
        let text = "xxabcdxxcdabxx";
        let values = BaezaYatesPerlbergMatcher::new()
            .locate(&["abcd", "cdab"], text, 1)
            .unwrap();
        let exact = NaiveMatcher::new().locate(&["abcd", "cdab"], text).unwrap();

        for end in exact {
            assert_eq!(values.get(&end), Some(&0));
        }
    }

    #[test]
    fn test_no_searchable_patterns() {
        let values = BaezaYatesPerlbergMatcher::new()
            .locate(&["a", "b"], "aabb", 1)
            .unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_merge_windows() {
        let windows = BTreeSet::from([
            (0, 0, 6),
            (0, 2, 6),
            (0, 6, 9),
            (0, 12, 15),
            (1, 3, 5),
            (1, 4, 8),
        ]);
        assert_eq!(
            merge_windows(&windows),
            vec![(0, 0..9), (0, 12..15), (1, 3..8)]
        );
    }

    #[test]
    fn test_overlapping_windows_keep_acceptance_rule() {
        // Windows 0..6 and 2..6 overlap; alone, the second one accepts end 6
        let values = BaezaYatesPerlbergMatcher::new()
            .locate_pattern("baaa", "baaaba", 2)
            .unwrap();
        let linear = LinearDynamicMatcher::new()
            .locate_pattern("baaa", "baaaba", 2)
            .unwrap();

        assert_eq!(values, EditValues::from([(4, 0)]));
        assert_eq!(values, linear);
    }

    #[test]
    fn test_suppress_adjacent() {
        let values = EditValues::from([(3, 100), (4, 0), (5, 99), (9, 99), (10, 99)]);
        assert_eq!(
            suppress_adjacent(values),
            EditValues::from([(4, 0), (9, 99), (10, 99)])
        );
    }
}
