// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Nodes of the Aho-Corasick automaton and their transition tables.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]; the failure
//! links make the automaton a graph with back edges, which plain ids keep
//! free of ownership cycles.

/// Index of a node in the automaton arena.
pub type NodeId = usize;

/// The root node, representing the empty prefix.
pub const ROOT: NodeId = 0;

/// Alphabet spans up to this size get a direct-indexed child table.
const MAX_DENSE_SPAN: usize = 256;

/// The range of symbols that occur in the patterns of one automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Alphabet {
    /// Smallest symbol, as a code point
    min: u32,
    /// Number of code points from the smallest to the largest symbol
    span: usize,
}

impl Alphabet {
    /// The alphabet spanned by `patterns`.
    pub(crate) fn of(patterns: &[Vec<char>]) -> Self {
        let mut symbols = patterns.iter().flatten().map(|&symbol| symbol as u32);
        let Some(first) = symbols.next() else {
            return Self { min: 0, span: 0 };
        };
        let (min, max) = symbols.fold((first, first), |(min, max), code| {
            (min.min(code), max.max(code))
        });

        Self {
            min,
            span: (max - min) as usize + 1,
        }
    }

    /// Offset of `symbol` from the smallest symbol, if it is in range.
    fn offset(&self, symbol: char) -> Option<usize> {
        let offset = (symbol as u32).checked_sub(self.min)? as usize;
        (offset < self.span).then_some(offset)
    }

    fn symbol(&self, offset: usize) -> Option<char> {
        char::from_u32(self.min + offset as u32)
    }

    fn is_dense(&self) -> bool {
        self.span <= MAX_DENSE_SPAN
    }
}

/// Outgoing trie edges of a node.
#[derive(Debug, Clone)]
enum Children {
    /// Indexed by offset from the alphabet minimum; allocated on first insert
    Dense(Vec<Option<NodeId>>),
    /// Sorted by symbol, used when the alphabet span is too wide
    Sparse(Vec<(char, NodeId)>),
}

/// A node in the Aho-Corasick trie.
#[derive(Debug, Clone)]
pub struct Node {
    /// Length of the prefix this node represents
    pub depth: usize,

    /// Node for the longest proper suffix of this prefix present in the trie
    pub failure: NodeId,

    /// Index of the pattern ending exactly here
    pub pattern: Option<usize>,

    /// Nearest node on the failure chain (excluding this one) that ends a pattern
    pub output: Option<NodeId>,

    children: Children,
}

impl Node {
    pub(super) fn new(depth: usize, alphabet: &Alphabet) -> Self {
        let children = if alphabet.is_dense() {
            Children::Dense(Vec::new())
        } else {
            Children::Sparse(Vec::new())
        };

        Self {
            depth,
            failure: ROOT,
            pattern: None,
            output: None,
            children,
        }
    }

    /// The child reached by `symbol`.
    pub(crate) fn child(&self, alphabet: &Alphabet, symbol: char) -> Option<NodeId> {
        match &self.children {
            Children::Dense(slots) => {
                let offset = alphabet.offset(symbol)?;
                slots.get(offset).copied().flatten()
            }
            Children::Sparse(edges) => edges
                .binary_search_by_key(&symbol, |&(edge, _)| edge)
                .ok()
                .map(|index| edges[index].1),
        }
    }

    /// Adds an edge; `symbol` must belong to `alphabet`.
    pub(super) fn set_child(&mut self, alphabet: &Alphabet, symbol: char, child: NodeId) {
        match &mut self.children {
            Children::Dense(slots) => {
                if let Some(offset) = alphabet.offset(symbol) {
                    if slots.is_empty() {
                        slots.resize(alphabet.span, None);
                    }
                    slots[offset] = Some(child);
                }
            }
            Children::Sparse(edges) => {
                match edges.binary_search_by_key(&symbol, |&(edge, _)| edge) {
                    Ok(index) => edges[index].1 = child,
                    Err(index) => edges.insert(index, (symbol, child)),
                }
            }
        }
    }

    /// Outgoing edges in symbol order.
    pub(crate) fn transitions(&self, alphabet: &Alphabet) -> Vec<(char, NodeId)> {
        match &self.children {
            Children::Dense(slots) => slots
                .iter()
                .enumerate()
                .filter_map(|(offset, slot)| Some((alphabet.symbol(offset)?, (*slot)?)))
                .collect(),
            Children::Sparse(edges) => edges.clone(),
        }
    }
}
