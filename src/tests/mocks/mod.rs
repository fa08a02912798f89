//! Mock implementations for testing
//!
//! An in-memory [`DocumentLoader`] that counts calls per path. For strict
//! expectations use the `mockall` generated `MockDocumentLoader` instead.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::data::{DataError, DocumentLoader, DEFAULT_CAMPUS_PATH, DEFAULT_DEPARTMENTS_PATH};
use crate::tests::common::{campus_json, departments_json};

/// Serves documents from memory; unknown paths fail like a missing file.
#[derive(Default)]
pub struct CountingLoader {
    documents: HashMap<String, Value>,
    delay: Option<Duration>,
    calls: Mutex<HashMap<String, usize>>,
}

impl CountingLoader {
    /// A loader with no documents at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Both bundled documents at their default paths.
    pub fn with_fixtures() -> Self {
        Self::empty()
            .with_document(DEFAULT_DEPARTMENTS_PATH, departments_json())
            .with_document(DEFAULT_CAMPUS_PATH, campus_json())
    }

    pub fn with_document(mut self, path: &str, document: Value) -> Self {
        self.documents.insert(path.to_string(), document);
        self
    }

    /// Hold every load for `ms` so concurrent callers overlap.
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay = Some(Duration::from_millis(ms));
        self
    }

    /// Number of loads requested for `path`.
    pub fn calls(&self, path: &str) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.get(path).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

#[async_trait]
impl DocumentLoader for CountingLoader {
    async fn load(&self, path: &str) -> Result<Value, DataError> {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(path.to_string()).or_insert(0) += 1;
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| DataError::Io {
                path: path.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            })
    }
}
