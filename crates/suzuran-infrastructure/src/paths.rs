//! Path resolution for suzuran configuration and data files.
//!
//! ```text
//! ~/.config/suzuran/           # Config directory (platform default via `dirs`)
//! └── config.toml              # StoreConfig
//!
//! <data_dir>/                  # From StoreConfig, `data` by default
//! ├── characters.json
//! ├── rarities.json
//! ├── ...                      # One file per EntityKind
//! └── admin_users.json
//! ```

use std::path::{Path, PathBuf};
use suzuran_core::error::{Result, SuzuranError};
use suzuran_core::record::EntityKind;

const APP_DIR_NAME: &str = "suzuran";
const CONFIG_FILE_NAME: &str = "config.toml";

pub struct SuzuranPaths;

impl SuzuranPaths {
    /// Returns the platform configuration directory for suzuran.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/suzuran/`
    /// - `Err(SuzuranError::Config)`: The platform has no config directory
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| SuzuranError::config("Cannot determine the config directory"))
    }

    /// Returns the default `config.toml` path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the file backing `kind` inside `data_dir`.
    pub fn collection_file(data_dir: &Path, kind: EntityKind) -> PathBuf {
        data_dir.join(kind.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_file() {
        let path = SuzuranPaths::collection_file(Path::new("/srv/data"), EntityKind::SkillEffect);
        assert_eq!(path, PathBuf::from("/srv/data/skill_effects.json"));
    }

    #[test]
    fn test_config_file_name() {
        if let Ok(path) = SuzuranPaths::config_file() {
            assert!(path.ends_with("suzuran/config.toml"));
        }
    }
}
