//! JSON-file persistence for the Suzuran catalog.
//!
//! Every collection is one pretty-printed JSON array in a shared data
//! directory. `Catalog` wires a `JsonRepository` per collection; the
//! `migration` module repairs older files in place.

pub mod admin_user_repository;
pub mod catalog;
pub mod config_service;
pub mod json_repository;
pub mod migration;
pub mod paths;
pub mod storage;

pub use crate::catalog::Catalog;
pub use crate::config_service::ConfigService;
pub use crate::json_repository::JsonRepository;
pub use crate::paths::SuzuranPaths;
