//! Store configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::admin_user::DEFAULT_ADMIN_USERNAME;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "SUZURAN_CONFIG";
/// Environment variable overriding `data_dir`.
pub const DATA_DIR_ENV: &str = "SUZURAN_DATA_DIR";

/// Root of `config.toml`.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding the collection files.
    pub data_dir: PathBuf,
    /// Username created by `seed-admin` when no admin exists.
    pub default_admin_username: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            default_admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}
