//! Skill domain module.
//!
//! # Module Structure
//!
//! - `model`: `Skill`, its range block and the target/type enums
//! - `request`: create and update requests

mod model;
mod request;

pub use model::{Skill, SkillRange, SkillTarget, SkillType};
pub use request::{CreateSkillRequest, UpdateSkillRequest};

use crate::repository::Repository;

pub trait SkillRepository: Repository<Skill> {}

impl<T: Repository<Skill> + ?Sized> SkillRepository for T {}
