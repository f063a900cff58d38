//! One-off data migrations over the raw collection files.
//!
//! Migrations operate on `serde_json::Value` records so they can repair
//! files that the typed models would reject (a skill effect without a
//! category, an admin user with a plaintext password).
//!
//! # Module Structure
//!
//! - `traits`: `RecordMigration`, the per-record rewrite contract
//! - `runner`: `MigrationRunner`, applies registered migrations to files
//! - `skill_effect`, `admin_user`, `tarot`: the shipped migrations

mod admin_user;
mod runner;
mod skill_effect;
mod tarot;
mod traits;

pub use admin_user::HashAdminPasswords;
pub use runner::{MigrationReport, MigrationRunner};
pub use skill_effect::DefaultSkillEffectCategory;
pub use tarot::NormalizeTarotIconPath;
pub use traits::RecordMigration;
