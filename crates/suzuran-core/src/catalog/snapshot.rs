use std::collections::HashMap;

use crate::character::Character;
use crate::equipment::Equipment;
use crate::ex_skill::ExSkill;
use crate::faction::Faction;
use crate::personality_skill::PersonalitySkill;
use crate::rarity::Rarity;
use crate::record::Record;
use crate::role::Role;
use crate::skill::Skill;
use crate::skill_effect::SkillEffect;
use crate::tarot::Tarot;

/// Every game-data collection read at one point in time.
///
/// Admin users are not part of the catalog and are never included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub characters: Vec<Character>,
    pub rarities: Vec<Rarity>,
    pub roles: Vec<Role>,
    pub factions: Vec<Faction>,
    pub skills: Vec<Skill>,
    pub skill_effects: Vec<SkillEffect>,
    pub personality_skills: Vec<PersonalitySkill>,
    pub ex_skills: Vec<ExSkill>,
    pub equipment: Vec<Equipment>,
    pub tarots: Vec<Tarot>,
}

/// Id lookup over one collection. The first record wins on duplicate ids,
/// matching `find_by_id`.
pub(crate) struct Index<'a, R> {
    by_id: HashMap<&'a str, &'a R>,
}

impl<'a, R: Record> Index<'a, R> {
    pub(crate) fn new(records: &'a [R]) -> Self {
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            by_id.entry(record.id()).or_insert(record);
        }
        Self { by_id }
    }

    /// Looks up `id`; an empty id is treated as unset.
    pub(crate) fn get(&self, id: &str) -> Option<&'a R> {
        if id.is_empty() {
            return None;
        }
        self.by_id.get(id).copied()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rarity(id: &str, name: &str) -> Rarity {
        Rarity {
            id: id.to_string(),
            name: name.to_string(),
            image: None,
            value: 1,
        }
    }

    #[test]
    fn test_index_prefers_first_duplicate() {
        let rarities = vec![rarity("r1", "first"), rarity("r1", "second")];
        let index = Index::new(&rarities);
        assert_eq!(index.get("r1").unwrap().name, "first");
        assert!(index.get("").is_none());
        assert!(!index.contains("r2"));
    }
}
