// Copyright (c) 2025 Mauka Match Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the matching engine.

/// Invalid-argument errors raised while building a matching request.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// No patterns were supplied
    #[error("Pattern set cannot be empty")]
    EmptyPatternSet,

    /// One of the supplied patterns has no symbols
    #[error("Pattern at index {index} cannot be empty")]
    EmptyPattern {
        /// Position of the offending pattern in the caller's input.
        index: usize,
    },

    /// An algorithm name that does not select any matcher
    #[error("Unknown matching algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type for matching operations
pub type Result<T> = std::result::Result<T, MatchError>;
