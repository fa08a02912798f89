//! Common Test Utilities
//!
//! Shared fixtures used across test modules. The fixtures are the bundled
//! documents under `data/`, so tests and the binary see the same campus.

pub mod fixtures;

pub use fixtures::*;
