//! Skill effect domain module.
//!
//! Skill effects are the shared vocabulary (buffs, debuffs, status changes,
//! ...) that skills, personality skills and EX skills reference by id.

mod model;

pub use model::{
    CreateSkillEffectRequest, SkillEffect, SkillEffectCategory, UpdateSkillEffectRequest,
};

use crate::repository::Repository;

pub trait SkillEffectRepository: Repository<SkillEffect> {}

impl<T: Repository<SkillEffect> + ?Sized> SkillEffectRepository for T {}
