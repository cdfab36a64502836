// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Tables for the Boyer-Moore string matching algorithm.
//!
//! This module contains the lookup tables used by the Boyer-Moore algorithm
//! to decide how far a window may advance after a comparison:
//!
//! 1. Bad Character Table: aligns the mismatched text symbol with its
//!    rightmost occurrence in the pattern (weak rule).
//!
//! 2. Good Suffix Table: aligns the already matched suffix with another copy
//!    of it in the pattern that is preceded by a different symbol (strong
//!    rule), or with the longest pattern prefix that is also a suffix.
//!
//! Positions inside the tables are 1-based, following the classical
//! presentation of the `L'` and `l'` arrays; the public methods take 0-based
//! pattern offsets.

use fnv::FnvHashMap;

use crate::matching::z_values::z_values;

/// A span of pattern offsets (0-based, inclusive) already known to match the
/// text under the current window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// First offset of the span
    pub start: usize,
    /// Last offset of the span
    pub end: usize,
}

/// How far to move the window, and what is known about the next window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    /// Number of text positions to advance
    pub distance: usize,
    /// Pattern span that needs no comparison in the next window
    pub section: Option<Section>,
}

impl Shift {
    fn blind(distance: usize) -> Self {
        Self {
            distance,
            section: None,
        }
    }
}

/// Represents the bad character table for the Boyer-Moore algorithm.
#[derive(Debug, Clone)]
pub struct BadCharTable {
    /// Maps each symbol to its rightmost 1-based position in the pattern
    rightmost: FnvHashMap<char, usize>,
}

impl BadCharTable {
    /// Creates a new bad character table for the given pattern.
    pub fn new(pattern: &[char]) -> Self {
        // Later positions overwrite earlier ones, leaving the rightmost
        let rightmost = pattern
            .iter()
            .enumerate()
            .map(|(offset, &symbol)| (symbol, offset + 1))
            .collect();

        Self { rightmost }
    }

    /// Rightmost 1-based position of `symbol` in the pattern, `0` if absent.
    pub fn rightmost(&self, symbol: char) -> usize {
        self.rightmost.get(&symbol).copied().unwrap_or(0)
    }

    /// Shift after text symbol `symbol` mismatched pattern offset `offset`.
    pub fn shift(&self, symbol: char, offset: usize) -> usize {
        (offset + 1).saturating_sub(self.rightmost(symbol)).max(1)
    }
}

/// Represents the strong good suffix table for the Boyer-Moore algorithm.
#[derive(Debug, Clone)]
pub struct GoodSuffixTable {
    /// `L'(i)`: largest end position `< n` of a copy of `P[i..n]` not preceded
    /// by `P[i-1]`, or `0`
    big_l: Vec<usize>,

    /// `l'(i)`: length of the longest suffix of `P[i..n]` that is also a
    /// prefix of the pattern
    small_l: Vec<usize>,

    /// Length of the pattern
    pattern_len: usize,
}

impl GoodSuffixTable {
    /// Creates a new good suffix table for the given pattern.
    ///
    /// `N_j`, the length of the longest suffix of `P[1..j]` that is also a
    /// suffix of `P`, is the Z-value of the reversed pattern at `n - j`.
    pub fn new(pattern: &[char]) -> Self {
        let n = pattern.len();
        let reversed: Vec<char> = pattern.iter().rev().copied().collect();
        let z = z_values(&reversed);
        let suffix_len = |j: usize| z[n - j];

        let mut big_l = vec![0; n + 2];
        for j in 1..n {
            let len = suffix_len(j);
            if len > 0 {
                big_l[n - len + 1] = j;
            }
        }

        let mut small_l = vec![0; n + 2];
        let mut longest = 0;
        for i in (1..=n).rev() {
            let len = n - i + 1;
            if suffix_len(len) == len {
                longest = len;
            }
            small_l[i] = longest;
        }

        Self {
            big_l,
            small_l,
            pattern_len: n,
        }
    }

    /// Shift after a mismatch at 0-based pattern offset `offset`, with every
    /// offset to its right matched.
    pub fn mismatch_shift(&self, offset: usize) -> Shift {
        let n = self.pattern_len;
        let i = offset + 1;
        if i >= n {
            return Shift::blind(1);
        }

        let matched = n - i;
        let copy_end = self.big_l[i + 1];
        if copy_end > 0 {
            return Shift {
                distance: n - copy_end,
                section: Some(Section {
                    start: copy_end - matched,
                    end: copy_end - 1,
                }),
            };
        }
        self.prefix_shift(self.small_l[i + 1])
    }

    /// Shift after a full match of the pattern.
    pub fn match_shift(&self) -> Shift {
        if self.pattern_len < 2 {
            return Shift::blind(1);
        }
        self.prefix_shift(self.small_l[2])
    }

    /// Slides the pattern so its prefix of length `prefix` sits where the
    /// matched suffix was.
    fn prefix_shift(&self, prefix: usize) -> Shift {
        Shift {
            distance: self.pattern_len - prefix,
            section: (prefix > 0).then(|| Section {
                start: 0,
                end: prefix - 1,
            }),
        }
    }
}
