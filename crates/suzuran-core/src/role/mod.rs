//! Role domain module (movement class of a character).

mod model;
mod request;

pub use model::{Role, TerrainSuitability};
pub use request::{CreateRoleRequest, UpdateRoleRequest};

use crate::repository::Repository;

pub trait RoleRepository: Repository<Role> {}

impl<T: Repository<Role> + ?Sized> RoleRepository for T {}
