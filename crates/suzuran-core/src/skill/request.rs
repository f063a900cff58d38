use serde::{Deserialize, Serialize};

use super::model::{SkillRange, SkillTarget, SkillType};
use crate::patch::Patch;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ct: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub targets: Vec<SkillTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_type: Option<SkillType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<SkillRange>,
    #[serde(default)]
    pub effect_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub icon: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub cost: Patch<i64>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub ct: Patch<i64>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<SkillTarget>>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub skill_type: Patch<SkillType>,
    /// Replaces the whole range block; bounds are not merged individually.
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub range: Patch<SkillRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_ids: Option<Vec<String>>,
}
