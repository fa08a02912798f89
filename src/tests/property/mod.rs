//! Property-based tests for the campus assistant
//!
//! Invariants that must hold for all inputs rather than hand-picked cases.
//!
//! ## Test Modules
//!
//! - `normalizer_props`: text normalization
//!   - Re-normalizing only trims; tokens are stable
//!   - No stripped punctuation survives
//!   - Tokens are never empty and contain no whitespace
//!
//! - `matcher_props`: department matching
//!   - Similarity stays within [0, 1]
//!   - Matches are always known codes
//!   - A department's own name matches its code
//!
//! - `classifier_props`: intent classification
//!   - Never panics and is deterministic
//!   - Greeting and farewell words win regardless of surrounding filler
//!
//! By default, proptest runs 256 cases per property. Override with
//! `PROPTEST_CASES`.

mod classifier_props;
mod matcher_props;
mod normalizer_props;
