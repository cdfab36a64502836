//! Test modules for Mauka Match.
//!
//! Matcher tests live next to the matchers; this module covers the
//! configuration and error layers and holds shared fixtures.

pub mod test_utils;

pub use test_utils::TestFixture;
