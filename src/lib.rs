/// Campusbot - Campus FAQ Assistant
///
/// Core library that turns a free-text question about the college into a
/// templated answer: normalization, intent classification, department
/// matching, data lookup and response formatting. The `tui` module is the
/// terminal chat front end used by the binary.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
