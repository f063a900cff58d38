//! Domain model for the Suzuran game catalog.
//!
//! This crate holds the record types for every collection, the patch
//! convention their updates follow, and the repository traits storage
//! backends implement. It performs no I/O.

pub mod admin_user;
pub mod catalog;
pub mod character;
pub mod clock;
pub mod config;
pub mod equipment;
pub mod error;
pub mod ex_skill;
pub mod faction;
pub mod id;
pub mod lenient;
pub mod patch;
pub mod personality_skill;
pub mod rarity;
pub mod record;
pub mod repository;
pub mod role;
pub mod skill;
pub mod skill_effect;
pub mod tarot;

pub use error::{Result, SuzuranError};
pub use patch::Patch;
pub use record::{EntityKind, Record};
pub use repository::Repository;
