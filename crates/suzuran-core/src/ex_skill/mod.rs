//! EX skill domain module.

mod model;

pub use model::{CreateExSkillRequest, ExSkill, UpdateExSkillRequest};

use crate::repository::Repository;

pub trait ExSkillRepository: Repository<ExSkill> {}

impl<T: Repository<ExSkill> + ?Sized> ExSkillRepository for T {}
