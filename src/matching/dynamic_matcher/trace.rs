// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The complete edit table of one pattern against one text.

use std::fmt;

use serde::Serialize;

use crate::matching::EditValues;

/// How a cell of the edit table was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Row 0 or column 0; nothing precedes it
    Start,
    /// Diagonal move over equal symbols
    Match,
    /// Diagonal move over different symbols
    Substitute,
    /// Vertical move, a pattern symbol with no text counterpart
    SkipPattern,
    /// Horizontal move, a text symbol with no pattern counterpart
    SkipText,
}

/// Edit table, backpointers and accepted end-positions for one pattern.
#[derive(Debug, Clone, Serialize)]
pub struct MatchTrace {
    pattern: Vec<char>,
    text: Vec<char>,
    /// `(pattern_len + 1) x (text_len + 1)` cells, row-major
    table: Vec<usize>,
    steps: Vec<Step>,
    edit_values: EditValues,
}

impl MatchTrace {
    pub(super) fn new(
        pattern: Vec<char>,
        text: Vec<char>,
        table: Vec<usize>,
        steps: Vec<Step>,
        edit_values: EditValues,
    ) -> Self {
        Self {
            pattern,
            text,
            table,
            steps,
            edit_values,
        }
    }

    fn columns(&self) -> usize {
        self.text.len() + 1
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row <= self.pattern.len() && column < self.columns())
            .then(|| row * self.columns() + column)
    }

    /// The pattern symbols.
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    /// The text symbols.
    pub fn text(&self) -> &[char] {
        &self.text
    }

    /// Value of cell `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<usize> {
        self.index(row, column).map(|index| self.table[index])
    }

    /// Backpointer of cell `(row, column)`.
    pub fn step(&self, row: usize, column: usize) -> Option<Step> {
        self.index(row, column).map(|index| self.steps[index])
    }

    /// The last row of the table.
    pub fn last_row(&self) -> &[usize] {
        let start = self.pattern.len() * self.columns();
        &self.table[start..]
    }

    /// Accepted end-positions with their edit values.
    pub fn edit_values(&self) -> &EditValues {
        &self.edit_values
    }

    /// Follows the backpointers from `(pattern_len, end)` up to row 0 and
    /// returns the text offset where that alignment starts.
    pub fn alignment_start(&self, end: usize) -> Option<usize> {
        let (mut row, mut column) = (self.pattern.len(), end);
        self.index(row, column)?;

        while row > 0 {
            match self.step(row, column)? {
                Step::Match | Step::Substitute => {
                    row -= 1;
                    column -= 1;
                }
                Step::SkipPattern | Step::Start => row -= 1,
                Step::SkipText => column -= 1,
            }
        }
        Some(column)
    }
}

impl fmt::Display for MatchTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .table
            .iter()
            .max()
            .map_or(1, |max| max.to_string().len())
            .max(1);

        write!(f, "{:>width$}  {:>width$}", "", "")?;
        for symbol in &self.text {
            write!(f, " {symbol:>width$}")?;
        }
        writeln!(f)?;

        for row in 0..=self.pattern.len() {
            let label = match row {
                0 => ' ',
                _ => self.pattern[row - 1],
            };
            write!(f, "{label:>width$} ")?;
            for column in 0..self.columns() {
                write!(f, " {:>width$}", self.table[row * self.columns() + column])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
