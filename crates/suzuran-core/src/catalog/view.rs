//! Joined read views used by the admin and public pages.

use serde::Serialize;

use super::snapshot::{CatalogSnapshot, Index};
use crate::character::{Character, SkillRank};
use crate::equipment::Equipment;
use crate::ex_skill::ExSkill;
use crate::faction::Faction;
use crate::personality_skill::PersonalitySkill;
use crate::rarity::Rarity;
use crate::record::Record;
use crate::role::Role;
use crate::skill::Skill;
use crate::tarot::Tarot;

/// An equipment record with its rarity resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentWithRarity {
    #[serde(flatten)]
    pub equipment: Equipment,
    /// `None` when the reference is unset or dangling.
    pub rarity: Option<Rarity>,
}

/// A tarot with its rarity resolved. Legacy icon paths are normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TarotWithRarity {
    #[serde(flatten)]
    pub tarot: Tarot,
    pub rarity: Option<Rarity>,
}

/// An id that did not resolve while building a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnresolvedReference {
    pub field: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSkillNode {
    pub rank: SkillRank,
    pub left: Option<Skill>,
    pub right: Option<Skill>,
}

/// A character with every outgoing reference resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDetail {
    pub character: Character,
    pub rarity: Option<Rarity>,
    pub role: Option<Role>,
    pub factions: Vec<Faction>,
    pub personality_skill: Option<PersonalitySkill>,
    /// Populated ranks in ascending order.
    pub skill_tree: Vec<ResolvedSkillNode>,
    pub ex_skills: Vec<ExSkill>,
    pub unresolved: Vec<UnresolvedReference>,
}

pub fn equipment_with_rarity(snapshot: &CatalogSnapshot) -> Vec<EquipmentWithRarity> {
    let rarities = Index::new(&snapshot.rarities);
    snapshot
        .equipment
        .iter()
        .map(|equipment| EquipmentWithRarity {
            rarity: equipment
                .rarity_id
                .as_deref()
                .and_then(|id| rarities.get(id))
                .cloned(),
            equipment: equipment.clone(),
        })
        .collect()
}

pub fn tarots_with_rarity(snapshot: &CatalogSnapshot) -> Vec<TarotWithRarity> {
    let rarities = Index::new(&snapshot.rarities);
    snapshot
        .tarots
        .iter()
        .map(|tarot| {
            let mut tarot = tarot.clone();
            tarot.icon = tarot.normalized_icon();
            TarotWithRarity {
                rarity: rarities.get(&tarot.rarity_id).cloned(),
                tarot,
            }
        })
        .collect()
}

/// Resolves the character with `id`, or `None` when it does not exist.
pub fn character_detail(snapshot: &CatalogSnapshot, id: &str) -> Option<CharacterDetail> {
    let character = Index::new(&snapshot.characters).get(id)?.clone();
    Some(Resolver::new(snapshot).resolve(character))
}

struct Resolver<'a> {
    rarities: Index<'a, Rarity>,
    roles: Index<'a, Role>,
    factions: Index<'a, Faction>,
    personality_skills: Index<'a, PersonalitySkill>,
    skills: Index<'a, Skill>,
    ex_skills: Index<'a, ExSkill>,
}

impl<'a> Resolver<'a> {
    fn new(snapshot: &'a CatalogSnapshot) -> Self {
        Self {
            rarities: Index::new(&snapshot.rarities),
            roles: Index::new(&snapshot.roles),
            factions: Index::new(&snapshot.factions),
            personality_skills: Index::new(&snapshot.personality_skills),
            skills: Index::new(&snapshot.skills),
            ex_skills: Index::new(&snapshot.ex_skills),
        }
    }

    fn resolve(&self, character: Character) -> CharacterDetail {
        let mut unresolved = Vec::new();
        let rarity = lookup(
            &self.rarities,
            &mut unresolved,
            "rarityId",
            character.rarity_id.as_deref(),
        );
        let role = lookup(
            &self.roles,
            &mut unresolved,
            "roleId",
            character.role_id.as_deref(),
        );
        let factions = lookup_all(
            &self.factions,
            &mut unresolved,
            "factionIds",
            &character.faction_ids,
        );
        let personality_skill = lookup(
            &self.personality_skills,
            &mut unresolved,
            "personalitySkillId",
            character.personality_skill_id.as_deref(),
        );

        let mut skill_tree = Vec::new();
        if let Some(tree) = &character.skill_tree {
            for (rank, node) in tree.nodes() {
                let left = lookup(
                    &self.skills,
                    &mut unresolved,
                    &format!("skillTree.{rank}.left"),
                    node.left.as_deref(),
                );
                let right = lookup(
                    &self.skills,
                    &mut unresolved,
                    &format!("skillTree.{rank}.right"),
                    node.right.as_deref(),
                );
                skill_tree.push(ResolvedSkillNode { rank, left, right });
            }
        }

        let ex_skills = lookup_all(
            &self.ex_skills,
            &mut unresolved,
            "exSkillIds",
            &character.ex_skill_ids,
        );

        CharacterDetail {
            character,
            rarity,
            role,
            factions,
            personality_skill,
            skill_tree,
            ex_skills,
            unresolved,
        }
    }
}

fn lookup<R: Record>(
    index: &Index<'_, R>,
    unresolved: &mut Vec<UnresolvedReference>,
    field: &str,
    id: Option<&str>,
) -> Option<R> {
    let id = id.filter(|id| !id.is_empty())?;
    let found = index.get(id).cloned();
    if found.is_none() {
        unresolved.push(UnresolvedReference {
            field: field.to_string(),
            id: id.to_string(),
        });
    }
    found
}

fn lookup_all<R: Record>(
    index: &Index<'_, R>,
    unresolved: &mut Vec<UnresolvedReference>,
    field: &str,
    ids: &[String],
) -> Vec<R> {
    ids.iter()
        .filter_map(|id| lookup(index, unresolved, field, Some(id)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{SkillTree, SkillTreeNode};

    fn snapshot() -> CatalogSnapshot {
        let rarity = Rarity {
            id: "r1".to_string(),
            name: "SSR".to_string(),
            image: None,
            value: 5,
        };
        let equipment: Vec<Equipment> = serde_json::from_value(serde_json::json!([
            {"id": "e1", "name": "剣", "rarityId": "r1", "createdAt": "t", "updatedAt": "t"},
            {"id": "e2", "name": "盾", "rarityId": "gone", "createdAt": "t", "updatedAt": "t"},
            {"id": "e3", "name": "杖", "createdAt": "t", "updatedAt": "t"}
        ]))
        .unwrap();
        let tarots: Vec<Tarot> = serde_json::from_value(serde_json::json!([
            {"id": "t1", "name": "愚者", "rarityId": "r1", "icon": "/uploads/tarot-1.png",
             "acquisitionMethods": [], "createdAt": "t", "updatedAt": "t"}
        ]))
        .unwrap();
        let skills: Vec<Skill> = serde_json::from_value(serde_json::json!([
            {"id": "s1", "name": "斬撃"}
        ]))
        .unwrap();
        let character = Character {
            id: "c1".to_string(),
            name: "リリィ".to_string(),
            rarity_id: Some("r1".to_string()),
            role_id: Some("missing-role".to_string()),
            faction_ids: vec!["f-missing".to_string()],
            weapon_type: None,
            personality_skill_id: None,
            skill_tree: Some(SkillTree {
                rk3: Some(SkillTreeNode {
                    left: Some("s1".to_string()),
                    right: Some("s-missing".to_string()),
                }),
                ..Default::default()
            }),
            ex_skill_ids: Vec::new(),
            normal_appearance: None,
            pixel_avatar: None,
        };
        CatalogSnapshot {
            characters: vec![character],
            rarities: vec![rarity],
            skills,
            equipment,
            tarots,
            ..Default::default()
        }
    }

    #[test]
    fn test_equipment_with_rarity() {
        let views = equipment_with_rarity(&snapshot());
        assert_eq!(views.len(), 3);
        assert_eq!(views[0].rarity.as_ref().unwrap().name, "SSR");
        assert!(views[1].rarity.is_none());
        assert!(views[2].rarity.is_none());
    }

    #[test]
    fn test_equipment_view_flattens() {
        let views = equipment_with_rarity(&snapshot());
        let json = serde_json::to_value(&views[0]).unwrap();
        assert_eq!(json["id"], "e1");
        assert_eq!(json["rarity"]["name"], "SSR");
    }

    #[test]
    fn test_tarot_view_normalizes_icon() {
        let views = tarots_with_rarity(&snapshot());
        assert_eq!(views[0].tarot.icon.as_deref(), Some("/uploads/1.png"));
        assert_eq!(views[0].rarity.as_ref().unwrap().value, 5);
    }

    #[test]
    fn test_character_detail_reports_unresolved() {
        let detail = character_detail(&snapshot(), "c1").unwrap();
        assert_eq!(detail.rarity.unwrap().name, "SSR");
        assert!(detail.role.is_none());
        assert!(detail.factions.is_empty());
        assert_eq!(detail.skill_tree.len(), 1);
        assert_eq!(detail.skill_tree[0].rank, SkillRank::Rk3);
        assert_eq!(detail.skill_tree[0].left.as_ref().unwrap().name, "斬撃");
        assert!(detail.skill_tree[0].right.is_none());

        let fields: Vec<&str> = detail.unresolved.iter().map(|u| u.field.as_str()).collect();
        assert_eq!(fields, vec!["roleId", "factionIds", "skillTree.RK3.right"]);
    }

    #[test]
    fn test_character_detail_missing_character() {
        assert!(character_detail(&snapshot(), "nope").is_none());
    }
}
