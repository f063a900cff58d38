//! The `Record` trait and the closed set of entity kinds.

use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Every collection the catalog persists, one JSON file each.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum EntityKind {
    Character,
    Rarity,
    Role,
    Faction,
    Skill,
    SkillEffect,
    PersonalitySkill,
    ExSkill,
    Equipment,
    Tarot,
    AdminUser,
}

impl EntityKind {
    /// File name of the collection inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            EntityKind::Character => "characters.json",
            EntityKind::Rarity => "rarities.json",
            EntityKind::Role => "roles.json",
            EntityKind::Faction => "factions.json",
            EntityKind::Skill => "skills.json",
            EntityKind::SkillEffect => "skill_effects.json",
            EntityKind::PersonalitySkill => "personality_skills.json",
            EntityKind::ExSkill => "ex_skills.json",
            EntityKind::Equipment => "equipment.json",
            EntityKind::Tarot => "tarots.json",
            EntityKind::AdminUser => "admin_users.json",
        }
    }

    /// Name used in errors and log fields, e.g. `skill-effect`.
    pub fn entity_type(self) -> &'static str {
        self.into()
    }
}

/// A persisted entity with a stable string identifier.
///
/// Implementations describe how a create request becomes a record and how an
/// update request merges into one. They contain no I/O; repositories own
/// storage and call into these hooks.
pub trait Record:
    Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Input accepted by `create`.
    type Create: Send + 'static;
    /// Input accepted by `update`. `Default` is the empty patch.
    type Update: Default + Send + Sync + 'static;

    const KIND: EntityKind;

    fn id(&self) -> &str;

    /// Builds a new record from a freshly generated id.
    ///
    /// `now` is the creation timestamp for kinds that track one.
    fn from_create(id: String, input: Self::Create, now: &str) -> Self;

    /// Merges `patch` into this record. Must never touch the id.
    fn apply_update(&mut self, patch: &Self::Update);

    /// Records a modification time. No-op for kinds without timestamps.
    fn touch(&mut self, _now: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_file_names_are_unique() {
        let names: HashSet<_> = EntityKind::iter().map(EntityKind::file_name).collect();
        assert_eq!(names.len(), 11);
    }

    #[test]
    fn test_kind_names_round_trip() {
        assert_eq!(EntityKind::SkillEffect.to_string(), "skill-effect");
        assert_eq!(EntityKind::SkillEffect.entity_type(), "skill-effect");
        assert_eq!(
            EntityKind::from_str("admin-user").unwrap(),
            EntityKind::AdminUser
        );
    }
}
