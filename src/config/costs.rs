//! Edit cost configuration module.
//!
//! Costs charged by the approximate matchers for each edit operation.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::matching::EditCosts;
use serde::{Deserialize, Serialize};

/// Edit cost configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostsConfig {
    /// Cost of replacing one symbol with another
    pub substitution: usize,

    /// Cost of inserting or deleting one symbol
    pub deletion: usize,
}

impl Default for CostsConfig {
    fn default() -> Self {
        let costs = EditCosts::default();
        Self {
            substitution: costs.substitution,
            deletion: costs.deletion,
        }
    }
}

impl Validate for CostsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.substitution == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "costs.substitution".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.deletion == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "costs.deletion".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

impl From<CostsConfig> for EditCosts {
    fn from(config: CostsConfig) -> Self {
        EditCosts::new(config.substitution, config.deletion)
    }
}
