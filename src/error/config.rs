//! Configuration error module.
//!
//! Errors raised while loading, parsing and validating configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The configuration file has an extension no loader understands.
    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    /// The configuration sources could not be parsed or merged.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// A configuration value is invalid.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// A numeric configuration value is out of the valid range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// The key of the invalid value
        key: String,
        /// Description of the valid range
        message: String,
    },
}
