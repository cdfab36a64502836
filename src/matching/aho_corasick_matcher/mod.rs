// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Aho-Corasick automaton for searching many patterns at once.
//!
//! All patterns share one trie; failure links let a single left-to-right
//! pass over the text report every occurrence of every pattern, including
//! patterns that are suffixes of other patterns. Scan cost is
//! O(text + matches) no matter how many patterns the set holds, which is
//! what the partitioned approximate matcher relies on when it seeds its
//! verification windows.

mod automaton;
mod matcher;
mod node;

// Re-exports
pub use automaton::Automaton;
pub use matcher::AhoCorasickMatcher;
pub use node::{Node, NodeId, ROOT};
