//! Campus Data
//!
//! Typed documents, the loaders that fetch them, and the caching repository
//! the rest of the core reads from.

pub mod error;
pub mod loader;
pub mod models;
pub mod repository;

pub use error::{DataError, Result};
pub use loader::{DocumentLoader, FileLoader, HttpLoader};
pub use models::*;
pub use repository::{DataRepository, DocumentPaths, DEFAULT_CAMPUS_PATH, DEFAULT_DEPARTMENTS_PATH};
