//! Application configuration

use std::path::{Path, PathBuf};

use bf_core::NavigatorConfig;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::content::StorageConfig;
use crate::DataError;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "BIOFORGE_CONFIG";

/// Configuration file used when the environment names none
pub const DEFAULT_CONFIG_FILE: &str = "bioforge.json";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Edge navigation tuning
    pub navigator: NavigatorConfig,

    /// Object storage used for image paths
    pub storage: StorageConfig,

    /// Content document; the bundled sample is used when absent
    pub content_path: Option<PathBuf>,

    /// Route shown on startup; defaults to the first project's overview
    pub start_route: Option<String>,

    /// Number of sections kept warm for fast navigation
    pub cache_sections: usize,

    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            navigator: NavigatorConfig::default(),
            storage: StorageConfig::default(),
            content_path: None,
            start_route: None,
            cache_sections: 8,
            dark_mode: true,
        }
    }
}

impl AppConfig {
    /// Path named by `BIOFORGE_CONFIG`, else `bioforge.json`
    pub fn config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Read a configuration file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, DataError> {
        let mut config: AppConfig = serde_json::from_str(contents)?;
        config.navigator = config.navigator.sanitized();
        Ok(config)
    }

    /// Like [`load`](Self::load), falling back to defaults on any error
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid configuration, using defaults");
                Self::default()
            }
        }
    }
}
