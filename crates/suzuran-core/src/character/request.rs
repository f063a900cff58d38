use serde::{Deserialize, Serialize};

use super::model::{SkillTree, WeaponType};
use crate::patch::Patch;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(default)]
    pub faction_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
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

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacterRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub rarity_id: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub role_id: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub weapon_type: Patch<WeaponType>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub personality_skill_id: Patch<String>,
    /// Replaces the whole tree; ranks are not merged individually.
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub skill_tree: Patch<SkillTree>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ex_skill_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub normal_appearance: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub pixel_avatar: Patch<String>,
}
