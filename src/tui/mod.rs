//! Terminal chat front end for the campus assistant.

pub mod app;
pub mod events;
pub mod input;

pub use app::ChatApp;
