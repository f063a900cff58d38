use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::request::{CreateCharacterRequest, UpdateCharacterRequest};
use crate::lenient::blank_as_none;
use crate::patch::replace;
use crate::record::{EntityKind, Record};

/// Weapon a character wields. Stored as the single-kanji label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum WeaponType {
    #[serde(rename = "剣")]
    Sword,
    #[serde(rename = "槍")]
    Spear,
    #[serde(rename = "斧")]
    Axe,
    #[serde(rename = "杖")]
    Staff,
    #[serde(rename = "弓")]
    Bow,
}

/// The six ranks at which a character unlocks a left/right skill choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum SkillRank {
    #[serde(rename = "RK1")]
    #[strum(serialize = "RK1")]
    Rk1,
    #[serde(rename = "RK3")]
    #[strum(serialize = "RK3")]
    Rk3,
    #[serde(rename = "RK5")]
    #[strum(serialize = "RK5")]
    Rk5,
    #[serde(rename = "RK7")]
    #[strum(serialize = "RK7")]
    Rk7,
    #[serde(rename = "RK9")]
    #[strum(serialize = "RK9")]
    Rk9,
    #[serde(rename = "RK11")]
    #[strum(serialize = "RK11")]
    Rk11,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTreeNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTree {
    #[serde(rename = "RK1", default, skip_serializing_if = "Option::is_none")]
    pub rk1: Option<SkillTreeNode>,
    #[serde(rename = "RK3", default, skip_serializing_if = "Option::is_none")]
    pub rk3: Option<SkillTreeNode>,
    #[serde(rename = "RK5", default, skip_serializing_if = "Option::is_none")]
    pub rk5: Option<SkillTreeNode>,
    #[serde(rename = "RK7", default, skip_serializing_if = "Option::is_none")]
    pub rk7: Option<SkillTreeNode>,
    #[serde(rename = "RK9", default, skip_serializing_if = "Option::is_none")]
    pub rk9: Option<SkillTreeNode>,
    #[serde(rename = "RK11", default, skip_serializing_if = "Option::is_none")]
    pub rk11: Option<SkillTreeNode>,
}

impl SkillTree {
    pub fn node(&self, rank: SkillRank) -> Option<&SkillTreeNode> {
        match rank {
            SkillRank::Rk1 => self.rk1.as_ref(),
            SkillRank::Rk3 => self.rk3.as_ref(),
            SkillRank::Rk5 => self.rk5.as_ref(),
            SkillRank::Rk7 => self.rk7.as_ref(),
            SkillRank::Rk9 => self.rk9.as_ref(),
            SkillRank::Rk11 => self.rk11.as_ref(),
        }
    }

    pub fn node_mut(&mut self, rank: SkillRank) -> &mut Option<SkillTreeNode> {
        match rank {
            SkillRank::Rk1 => &mut self.rk1,
            SkillRank::Rk3 => &mut self.rk3,
            SkillRank::Rk5 => &mut self.rk5,
            SkillRank::Rk7 => &mut self.rk7,
            SkillRank::Rk9 => &mut self.rk9,
            SkillRank::Rk11 => &mut self.rk11,
        }
    }

    /// Populated ranks in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = (SkillRank, &SkillTreeNode)> + '_ {
        SkillRank::iter().filter_map(move |rank| self.node(rank).map(|node| (rank, node)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(default)]
    pub faction_ids: Vec<String>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub weapon_type: Option<WeaponType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_skill_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_tree: Option<SkillTree>,
    #[serde(default)]
    pub ex_skill_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_appearance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_avatar: Option<String>,
}

impl Record for Character {
    type Create = CreateCharacterRequest;
    type Update = UpdateCharacterRequest;

    const KIND: EntityKind = EntityKind::Character;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateCharacterRequest, _now: &str) -> Self {
        Self {
            id,
            name: input.name,
            rarity_id: input.rarity_id,
            role_id: input.role_id,
            faction_ids: input.faction_ids,
            weapon_type: input.weapon_type,
            personality_skill_id: input.personality_skill_id,
            skill_tree: input.skill_tree,
            ex_skill_ids: input.ex_skill_ids,
            normal_appearance: input.normal_appearance,
            pixel_avatar: input.pixel_avatar,
        }
    }

    fn apply_update(&mut self, patch: &UpdateCharacterRequest) {
        replace(&mut self.name, &patch.name);
        patch.rarity_id.apply_to(&mut self.rarity_id);
        patch.role_id.apply_to(&mut self.role_id);
        replace(&mut self.faction_ids, &patch.faction_ids);
        patch.weapon_type.apply_to(&mut self.weapon_type);
        patch
            .personality_skill_id
            .apply_to(&mut self.personality_skill_id);
        patch.skill_tree.apply_to(&mut self.skill_tree);
        replace(&mut self.ex_skill_ids, &patch.ex_skill_ids);
        patch.normal_appearance.apply_to(&mut self.normal_appearance);
        patch.pixel_avatar.apply_to(&mut self.pixel_avatar);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch::Patch;

    #[test]
    fn test_reads_stored_character_with_nulls() {
        let json = r#"{
            "id": "c1",
            "name": "リリィ",
            "rarityId": null,
            "roleId": "ro1",
            "factionIds": ["f1", "f2"],
            "weaponType": "弓",
            "personalitySkillId": null,
            "skillTree": {"RK1": {"left": "s1", "right": "s2"}, "RK11": {"left": "s9"}},
            "exSkillIds": [],
            "normalAppearance": null,
            "pixelAvatar": "/uploads/p.png"
        }"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.rarity_id, None);
        assert_eq!(character.weapon_type, Some(WeaponType::Bow));
        let tree = character.skill_tree.unwrap();
        let ranks: Vec<String> = tree.nodes().map(|(rank, _)| rank.to_string()).collect();
        assert_eq!(ranks, vec!["RK1", "RK11"]);
        assert_eq!(tree.node(SkillRank::Rk11).unwrap().right, None);
    }

    #[test]
    fn test_update_clears_and_keeps() {
        let mut character: Character = serde_json::from_str(
            r#"{"id":"c1","name":"A","rarityId":"r1","roleId":"ro1","factionIds":["f1"]}"#,
        )
        .unwrap();
        character.apply_update(&UpdateCharacterRequest {
            rarity_id: Patch::Clear,
            weapon_type: Patch::Set(WeaponType::Sword),
            ..Default::default()
        });
        assert_eq!(character.rarity_id, None);
        assert_eq!(character.role_id.as_deref(), Some("ro1"));
        assert_eq!(character.faction_ids, vec!["f1".to_string()]);
        assert_eq!(character.weapon_type, Some(WeaponType::Sword));
    }

    #[test]
    fn test_node_mut_writes_rank() {
        let mut tree = SkillTree::default();
        *tree.node_mut(SkillRank::Rk5) = Some(SkillTreeNode {
            left: Some("s5".to_string()),
            right: None,
        });
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json, serde_json::json!({"RK5": {"left": "s5"}}));
    }

    #[test]
    fn test_blank_weapon_type_reads_as_unset() {
        let json = r#"{"id":"c1","name":"A","rarityId":"","roleId":"","factionIds":[],"weaponType":""}"#;
        let character: Character = serde_json::from_str(json).unwrap();
        assert_eq!(character.weapon_type, None);
        let written = serde_json::to_value(&character).unwrap();
        assert!(written.get("weaponType").is_none());
    }
}
