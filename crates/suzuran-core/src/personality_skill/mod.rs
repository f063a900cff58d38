//! Personality skill domain module.
//!
//! A personality skill carries one description per star rank (1 to 5).

mod model;

pub use model::{
    CreatePersonalitySkillRequest, PersonalitySkill, UpdatePersonalitySkillRequest,
};

use crate::repository::Repository;

pub trait PersonalitySkillRepository: Repository<PersonalitySkill> {}

impl<T: Repository<PersonalitySkill> + ?Sized> PersonalitySkillRepository for T {}
