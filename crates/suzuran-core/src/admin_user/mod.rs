//! Admin user domain module.
//!
//! # Module Structure
//!
//! - `model`: `AdminUser` and its requests
//! - `repository`: `AdminUserRepository`, adding lookup by username and seeding
//! - `hasher`: the `PasswordHasher` collaborator used by seeding and migrations

mod hasher;
mod model;
mod repository;

pub use hasher::PasswordHasher;
pub use model::{AdminUser, CreateAdminUserRequest, UpdateAdminUserRequest};
pub use repository::AdminUserRepository;

/// Username seeded when no admin exists.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
