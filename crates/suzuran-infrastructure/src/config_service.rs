//! Configuration service implementation.
//!
//! Loads `StoreConfig` from the first config file found in this order:
//!
//! 1. an explicit path (the CLI `--config` flag)
//! 2. the `SUZURAN_CONFIG` environment variable
//! 3. `<platform config dir>/suzuran/config.toml`
//!
//! A missing file yields the defaults. `SUZURAN_DATA_DIR` then overrides
//! `data_dir`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use suzuran_core::config::{CONFIG_PATH_ENV, DATA_DIR_ENV, StoreConfig};
use suzuran_core::error::{Result, SuzuranError};
use tracing::debug;

use crate::paths::SuzuranPaths;

/// Loads and caches the store configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    explicit_path: Option<PathBuf>,
    /// Cached configuration, filled on first `get_config`.
    config: Arc<RwLock<Option<StoreConfig>>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `path` instead of the environment variable or platform default.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_path = Some(path.into());
        self
    }

    /// Gets the configuration, loading it on first access.
    pub fn get_config(&self) -> Result<StoreConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| SuzuranError::internal("config cache lock poisoned"))?;
            if let Some(cached) = read_lock.as_ref() {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load(
            self.explicit_path.clone(),
            env_path(CONFIG_PATH_ENV),
            env_path(DATA_DIR_ENV),
        )?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|_| SuzuranError::internal("config cache lock poisoned"))?;
        *write_lock = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) -> Result<()> {
        let mut write_lock = self
            .config
            .write()
            .map_err(|_| SuzuranError::internal("config cache lock poisoned"))?;
        *write_lock = None;
        Ok(())
    }

    /// Resolves and loads the configuration from explicit inputs.
    pub fn load(
        explicit_path: Option<PathBuf>,
        env_config_path: Option<PathBuf>,
        env_data_dir: Option<PathBuf>,
    ) -> Result<StoreConfig> {
        let path = match explicit_path.or(env_config_path) {
            Some(path) => path,
            None => SuzuranPaths::config_file()?,
        };
        let config = Self::load_file(&path)?;
        Ok(match env_data_dir {
            Some(data_dir) => config.with_data_dir(data_dir),
            None => config,
        })
    }

    /// Reads one TOML file. A missing file yields the defaults.
    pub fn load_file(path: &Path) -> Result<StoreConfig> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(StoreConfig::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            SuzuranError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
