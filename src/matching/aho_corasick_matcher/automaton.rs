// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Trie with failure links, built once per pattern set and reusable across
//! any number of texts.

use std::collections::VecDeque;
use std::fmt;

use tracing::debug;

use super::node::{Alphabet, Node, NodeId, ROOT};
use crate::matching::Match;

/// Aho-Corasick automaton over a list of patterns.
///
/// Pattern indices in reported [`Match`]es are positions in the list the
/// automaton was built from.
#[derive(Debug, Clone)]
pub struct Automaton {
    /// Arena of trie nodes; index 0 is the root
    nodes: Vec<Node>,

    /// Symbol range of the patterns
    alphabet: Alphabet,

    /// Number of patterns the automaton was built from
    pattern_count: usize,
}

impl Automaton {
    /// Builds the trie and its failure links. Empty patterns are ignored.
    pub fn build(patterns: &[Vec<char>]) -> Self {
        let alphabet = Alphabet::of(patterns);
        let mut automaton = Self {
            nodes: vec![Node::new(0, &alphabet)],
            alphabet,
            pattern_count: patterns.len(),
        };

        for (index, pattern) in patterns.iter().enumerate() {
            if !pattern.is_empty() {
                automaton.insert(index, pattern);
            }
        }
        automaton.link_failures();

        debug!(
            patterns = patterns.len(),
            nodes = automaton.nodes.len(),
            "Built Aho-Corasick automaton"
        );
        automaton
    }

    fn insert(&mut self, index: usize, pattern: &[char]) {
        let mut state = ROOT;
        for (depth, &symbol) in pattern.iter().enumerate() {
            state = match self.nodes[state].child(&self.alphabet, symbol) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::new(depth + 1, &self.alphabet));
                    self.nodes[state].set_child(&self.alphabet, symbol, child);
                    child
                }
            };
        }
        // A repeated pattern keeps its first index
        self.nodes[state].pattern.get_or_insert(index);
    }

    /// Breadth-first, so every failure target (always shallower) is final
    /// before it is used.
    fn link_failures(&mut self) {
        let mut queue = VecDeque::new();
        for (_, child) in self.nodes[ROOT].transitions(&self.alphabet) {
            self.nodes[child].failure = ROOT;
            queue.push_back(child);
        }

        while let Some(parent) = queue.pop_front() {
            let parent_failure = self.nodes[parent].failure;
            for (symbol, child) in self.nodes[parent].transitions(&self.alphabet) {
                let failure = self.next_state(parent_failure, symbol);
                let target = &self.nodes[failure];
                let output = if target.pattern.is_some() {
                    Some(failure)
                } else {
                    target.output
                };

                let node = &mut self.nodes[child];
                node.failure = failure;
                node.output = output;
                queue.push_back(child);
            }
        }
    }

    /// State after reading `symbol` in `state`, falling back along failure
    /// links when there is no edge.
    pub fn next_state(&self, mut state: NodeId, symbol: char) -> NodeId {
        loop {
            if let Some(child) = self.nodes[state].child(&self.alphabet, symbol) {
                return child;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.nodes[state].failure;
        }
    }

    /// Every occurrence of every pattern in `text`, in order of end-position
    /// and, for equal end-positions, longest pattern first.
    pub fn find_all(&self, text: &[char]) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut state = ROOT;

        for (position, &symbol) in text.iter().enumerate() {
            state = self.next_state(state, symbol);

            let current = &self.nodes[state];
            let mut reported = if current.pattern.is_some() {
                Some(state)
            } else {
                current.output
            };
            while let Some(id) = reported {
                let node = &self.nodes[id];
                if let Some(pattern) = node.pattern {
                    matches.push(Match::exact(pattern, position + 1));
                }
                reported = node.output;
            }
        }
        matches
    }

    /// The node with the given id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of patterns the automaton was built from.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }
}

impl fmt::Display for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, node) in self.nodes.iter().enumerate() {
            write!(f, "{id:>4} depth={:<3} fail={:<4}", node.depth, node.failure)?;
            if let Some(pattern) = node.pattern {
                write!(f, " pattern={pattern}")?;
            }
            let edges: Vec<String> = node
                .transitions(&self.alphabet)
                .into_iter()
                .map(|(symbol, child)| format!("{symbol:?}->{child}"))
                .collect();
            writeln!(f, " [{}]", edges.join(", "))?;
        }
        Ok(())
    }
}
