use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::patch::replace;
use crate::record::{EntityKind, Record};

/// Category of a skill effect. Stored as the Japanese label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
pub enum SkillEffectCategory {
    #[serde(rename = "バフ")]
    Buff,
    #[serde(rename = "デバフ")]
    Debuff,
    #[serde(rename = "状態")]
    Status,
    #[serde(rename = "地形・行動")]
    TerrainAction,
    #[serde(rename = "スキル")]
    Skill,
    #[serde(rename = "ダメージ")]
    Damage,
    #[serde(rename = "その他")]
    #[default]
    Other,
}

impl SkillEffectCategory {
    /// The stored label, e.g. `その他`.
    pub fn label(self) -> &'static str {
        match self {
            SkillEffectCategory::Buff => "バフ",
            SkillEffectCategory::Debuff => "デバフ",
            SkillEffectCategory::Status => "状態",
            SkillEffectCategory::TerrainAction => "地形・行動",
            SkillEffectCategory::Skill => "スキル",
            SkillEffectCategory::Damage => "ダメージ",
            SkillEffectCategory::Other => "その他",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEffect {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: SkillEffectCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillEffectRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: SkillEffectCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillEffectRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SkillEffectCategory>,
}

impl Record for SkillEffect {
    type Create = CreateSkillEffectRequest;
    type Update = UpdateSkillEffectRequest;

    const KIND: EntityKind = EntityKind::SkillEffect;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateSkillEffectRequest, _now: &str) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            category: input.category,
        }
    }

    fn apply_update(&mut self, patch: &UpdateSkillEffectRequest) {
        replace(&mut self.name, &patch.name);
        replace(&mut self.description, &patch.description);
        replace(&mut self.category, &patch.category);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_category_labels_match_serde() {
        for category in SkillEffectCategory::iter() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
    }

    #[test]
    fn test_missing_category_is_corrupt_until_migrated() {
        let json = r#"{"id":"e1","name":"攻撃力アップ","description":"攻撃+10%"}"#;
        assert!(serde_json::from_str::<SkillEffect>(json).is_err());
    }
}
