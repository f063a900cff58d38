//! Subcommand implementations.

pub mod admin;
pub mod store;
pub mod views;

use anyhow::{Context as _, Result};
use serde::Serialize;
use std::path::PathBuf;
use suzuran_core::character::WeaponType;
use suzuran_core::config::StoreConfig;
use suzuran_infrastructure::{Catalog, ConfigService};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Resolved configuration plus the catalog it points at.
pub struct Context {
    pub config: StoreConfig,
    pub catalog: Catalog,
}

impl Context {
    pub fn load(config_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let mut service = ConfigService::new();
        if let Some(path) = config_path {
            service = service.with_config_file(path);
        }
        let mut config = service
            .get_config()
            .context("Failed to load configuration")?;
        if let Some(data_dir) = data_dir {
            config = config.with_data_dir(data_dir);
        }
        debug!(data_dir = %config.data_dir.display(), "Using data directory");

        let catalog = Catalog::new(config.data_dir.clone());
        Ok(Self { config, catalog })
    }
}

/// Installs the fmt subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Accepts the stored kanji or the English name.
pub fn parse_weapon_type(value: &str) -> std::result::Result<WeaponType, String> {
    match value {
        "剣" | "sword" => Ok(WeaponType::Sword),
        "槍" | "spear" => Ok(WeaponType::Spear),
        "斧" | "axe" => Ok(WeaponType::Axe),
        "杖" | "staff" => Ok(WeaponType::Staff),
        "弓" | "bow" => Ok(WeaponType::Bow),
        other => Err(format!("unknown weapon type '{}'", other)),
    }
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
