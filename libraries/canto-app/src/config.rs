/// Application configuration
use crate::error::Result;
use canto_playback::PlaybackConfig;
use canto_storage::{FileStore, KeyValueStore, MemoryStore, StateStore, DEFAULT_KEY_PREFIX};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Environment variable prefix (`CANTO_PLAYBACK__DEFAULT_VOLUME=0.5`)
pub const ENV_PREFIX: &str = "CANTO";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the `file` backend
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Nothing outlives the process
    #[default]
    Memory,
    /// One JSON file per key under `directory`
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl AppConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// Environment variables use the `CANTO_` prefix and `__` between
    /// section and field. A missing file is skipped.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::build(path, None)
    }

    /// Like [`load`](Self::load), reading variables from `vars` instead of
    /// the process environment
    pub fn load_with_vars(path: Option<&Path>, vars: HashMap<String, String>) -> Result<Self> {
        Self::build(path, Some(vars))
    }

    fn build(path: Option<&Path>, vars: Option<HashMap<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        if let Some(path) = path {
            if path.exists() {
                settings = settings.add_source(
                    config::File::from(path.to_path_buf()).format(config::FileFormat::Toml),
                );
            } else {
                debug!(path = %path.display(), "Config file not found, skipping");
            }
        }

        // Override with environment variables
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(vars.map(|v| v.into_iter().collect::<config::Map<_, _>>())),
        );

        Ok(settings.build()?.try_deserialize()?)
    }
}

impl StorageSettings {
    /// Open the configured backend behind a prefixed state store
    pub fn open(&self) -> Result<StateStore> {
        let backend: Arc<dyn KeyValueStore> = match self.backend {
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
            StorageBackend::File => Arc::new(FileStore::open(&self.directory)?),
        };
        debug!(backend = ?self.backend, prefix = %self.key_prefix, "Opened state store");
        Ok(StateStore::new(backend, self.key_prefix.clone()))
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        backend: StorageBackend::default(),
        directory: default_directory(),
        key_prefix: default_key_prefix(),
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./data/canto")
}

fn default_key_prefix() -> String {
    DEFAULT_KEY_PREFIX.to_string()
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_filter(),
    }
}

fn default_filter() -> String {
    "canto=info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            playback: PlaybackConfig::default(),
            logging: default_logging(),
        }
    }
}
