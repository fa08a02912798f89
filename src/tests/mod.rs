//! Crate-internal test support and cross-module suites.

pub mod common;
pub mod mocks;

mod integration;
mod property;
