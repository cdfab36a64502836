//! Search configuration module.
//!
//! Defaults used by the command-line tool when a request does not name an
//! algorithm or an edit budget.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::matching::{ApproximateAlgorithm, ExactAlgorithm};
use serde::{Deserialize, Serialize};

/// Largest accepted edit budget.
const MAX_EDITS_LIMIT: usize = 64;

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Edit budget for approximate search
    pub max_edits: usize,

    /// Matcher used for exact search
    pub exact_algorithm: ExactAlgorithm,

    /// Matcher used for approximate search
    pub approximate_algorithm: ApproximateAlgorithm,

    /// Whether to warn when patterns are too short for the edit budget
    pub warn_on_excluded_patterns: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_edits: 1,
            exact_algorithm: ExactAlgorithm::default(),
            approximate_algorithm: ApproximateAlgorithm::default(),
            warn_on_excluded_patterns: true,
        }
    }
}

impl Validate for SearchConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_edits > MAX_EDITS_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "search.max_edits".to_string(),
                message: format!("must be at most {MAX_EDITS_LIMIT}"),
            });
        }

        Ok(())
    }
}
