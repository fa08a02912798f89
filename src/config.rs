use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::data::{
    DataRepository, DocumentLoader, DocumentPaths, FileLoader, HttpLoader,
    DEFAULT_CAMPUS_PATH, DEFAULT_DEPARTMENTS_PATH,
};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub chat: ChatConfig,
    pub tui: TuiConfig,
    pub logging: LoggingConfig,
}

/// Where the two documents come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the documents when no `base_url` is set.
    pub data_dir: PathBuf,
    pub departments_file: String,
    pub campus_file: String,
    /// Fetch the documents over HTTP relative to this URL instead.
    pub base_url: Option<String>,
}

/// Pacing of the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Pause before the assistant starts answering.
    pub thinking_delay_ms: u64,
    /// Pause before the answer is shown.
    pub reply_delay_ms: u64,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            departments_file: DEFAULT_DEPARTMENTS_PATH.to_string(),
            campus_file: DEFAULT_CAMPUS_PATH.to_string(),
            base_url: None,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 500,
            reply_delay_ms: 300,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 50 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/campusbot/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// The configured document loader. A bad `base_url` falls back to the
    /// data directory.
    pub fn loader(&self) -> Arc<dyn DocumentLoader> {
        if let Some(base_url) = &self.data.base_url {
            match HttpLoader::new(base_url) {
                Ok(loader) => return Arc::new(loader),
                Err(e) => log::warn!("Ignoring base_url: {e}"),
            }
        }
        Arc::new(FileLoader::new(self.data.data_dir.clone()))
    }

    pub fn document_paths(&self) -> DocumentPaths {
        DocumentPaths {
            departments: self.data.departments_file.clone(),
            campus: self.data.campus_file.clone(),
        }
    }

    /// Repository wired to the configured loader and paths.
    pub fn repository(&self) -> DataRepository {
        DataRepository::new(self.loader(), self.document_paths())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("campusbot").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
