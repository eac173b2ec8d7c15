//! Utilities shared by Nova tests.
//!
//! Fixtures are written as `nova.toml` class tables so tests read like the configuration a user
//! would write.

mod fixtures;

pub use fixtures::*;
