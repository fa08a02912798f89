//! Document Loaders
//!
//! The only contract the core has with the outside world for data:
//! `load(path) -> parsed JSON | failure`. Files on disk and documents served
//! over HTTP are both supported.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::error::{DataError, Result};

/// Fetches and parses one JSON document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentLoader: Send + Sync {
    /// Load the document at `path` (relative to the loader's root).
    async fn load(&self, path: &str) -> Result<Value>;
}

// ============================================================================
// File Loader
// ============================================================================

/// Reads documents from a local data directory.
#[derive(Debug, Clone)]
pub struct FileLoader {
    root: PathBuf,
}

impl FileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DocumentLoader for FileLoader {
    async fn load(&self, path: &str) -> Result<Value> {
        let full_path = self.root.join(path);
        log::debug!("Reading document {}", full_path.display());

        let contents = tokio::fs::read_to_string(&full_path)
            .await
            .map_err(|source| DataError::Io {
                path: full_path.display().to_string(),
                source,
            })?;

        serde_json::from_str(&contents).map_err(|source| DataError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

// ============================================================================
// HTTP Loader
// ============================================================================

/// Fetches documents relative to a base URL, the way the website serves them.
#[derive(Debug, Clone)]
pub struct HttpLoader {
    client: reqwest::Client,
    base: Url,
}

impl HttpLoader {
    /// Create a loader rooted at `base_url`. A trailing slash is implied so
    /// relative document paths resolve beneath it.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).map_err(|e| DataError::Fetch {
            path: base_url.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }
}

#[async_trait]
impl DocumentLoader for HttpLoader {
    async fn load(&self, path: &str) -> Result<Value> {
        let fetch_error = |message: String| DataError::Fetch {
            path: path.to_string(),
            message,
        };

        let url = self.base.join(path).map_err(|e| fetch_error(e.to_string()))?;
        log::debug!("Fetching document {url}");

        let body = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| fetch_error(e.to_string()))?
            .text()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        serde_json::from_str(&body).map_err(|source| DataError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
