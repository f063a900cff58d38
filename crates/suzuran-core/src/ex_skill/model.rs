use serde::{Deserialize, Serialize};

use crate::patch::{Patch, replace};
use crate::record::{EntityKind, Record};

/// An EX skill with one description per level (1 to 3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExSkill {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub effect_ids: Vec<String>,
    pub lv1_description: String,
    pub lv2_description: String,
    pub lv3_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExSkillRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub effect_ids: Vec<String>,
    #[serde(default)]
    pub lv1_description: String,
    #[serde(default)]
    pub lv2_description: String,
    #[serde(default)]
    pub lv3_description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExSkillRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub icon: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effect_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lv1_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lv2_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lv3_description: Option<String>,
}

impl Record for ExSkill {
    type Create = CreateExSkillRequest;
    type Update = UpdateExSkillRequest;

    const KIND: EntityKind = EntityKind::ExSkill;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateExSkillRequest, _now: &str) -> Self {
        Self {
            id,
            name: input.name,
            icon: input.icon,
            effect_ids: input.effect_ids,
            lv1_description: input.lv1_description,
            lv2_description: input.lv2_description,
            lv3_description: input.lv3_description,
        }
    }

    fn apply_update(&mut self, patch: &UpdateExSkillRequest) {
        replace(&mut self.name, &patch.name);
        patch.icon.apply_to(&mut self.icon);
        replace(&mut self.effect_ids, &patch.effect_ids);
        replace(&mut self.lv1_description, &patch.lv1_description);
        replace(&mut self.lv2_description, &patch.lv2_description);
        replace(&mut self.lv3_description, &patch.lv3_description);
    }
}
