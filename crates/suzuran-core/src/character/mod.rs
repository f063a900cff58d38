//! Character domain module.
//!
//! # Module Structure
//!
//! - `model`: `Character`, its weapon type and rank-keyed skill tree
//! - `request`: create and update requests
//! - `filter`: the search filter used by the public browser
//! - `repository`: `CharacterRepository`, the generic contract plus `search`

mod filter;
mod model;
mod repository;
mod request;

pub use filter::CharacterFilter;
pub use model::{Character, SkillRank, SkillTree, SkillTreeNode, WeaponType};
pub use repository::CharacterRepository;
pub use request::{CreateCharacterRequest, UpdateCharacterRequest};
