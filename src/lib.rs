//! Mauka Match Library
//!
//! Exact and edit-distance bounded multi-pattern text matching, with the
//! configuration and error types used by the `mauka_match` binary.
//!
//! # Architecture
//!
//! - [`matching`] holds the matchers behind two traits,
//!   [`matching::Matcher`] and [`matching::ApproximateMatcher`]. Matchers are
//!   stateless values chosen at construction time.
//! - [`config`] loads layered settings (defaults, file, environment).
//! - [`error`] defines the application error type and error reporting.

pub mod config;
pub mod error;
pub mod matching;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Mauka Match.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the tracing error reporter as the global reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
