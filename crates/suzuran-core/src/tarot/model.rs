use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::patch::{Patch, replace};
use crate::record::{EntityKind, Record};

/// Icon prefix written by early uploads; current uploads live directly under `/uploads/`.
pub const LEGACY_ICON_PREFIX: &str = "/uploads/tarot-";

const ICON_PREFIX: &str = "/uploads/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum TarotAcquisitionMethod {
    #[serde(rename = "静寂の地-1")]
    SilentLand1,
    #[serde(rename = "静寂の地-2")]
    SilentLand2,
    #[serde(rename = "静寂の地-3")]
    SilentLand3,
    #[serde(rename = "期間限定イベントドロップ")]
    LimitedEventDrop,
    #[serde(rename = "入手方法はありません")]
    Unavailable,
}

impl TarotAcquisitionMethod {
    pub fn label(self) -> &'static str {
        match self {
            TarotAcquisitionMethod::SilentLand1 => "静寂の地-1",
            TarotAcquisitionMethod::SilentLand2 => "静寂の地-2",
            TarotAcquisitionMethod::SilentLand3 => "静寂の地-3",
            TarotAcquisitionMethod::LimitedEventDrop => "期間限定イベントドロップ",
            TarotAcquisitionMethod::Unavailable => "入手方法はありません",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::iter().find(|method| method.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tarot {
    pub id: String,
    pub name: String,
    pub rarity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub acquisition_methods: Vec<TarotAcquisitionMethod>,
    pub created_at: String,
    pub updated_at: String,
}

impl Tarot {
    /// The icon path with any legacy prefix rewritten.
    pub fn normalized_icon(&self) -> Option<String> {
        self.icon.as_deref().map(|icon| {
            normalize_legacy_icon(icon).unwrap_or_else(|| icon.to_string())
        })
    }
}

/// Rewrites the first `/uploads/tarot-` in `icon` to `/uploads/`.
///
/// Returns `None` when the path carries no legacy prefix.
pub fn normalize_legacy_icon(icon: &str) -> Option<String> {
    if icon.contains(LEGACY_ICON_PREFIX) {
        Some(icon.replacen(LEGACY_ICON_PREFIX, ICON_PREFIX, 1))
    } else {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTarotRequest {
    pub name: String,
    pub rarity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub acquisition_methods: Vec<TarotAcquisitionMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTarotRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub icon: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub equipment_skill: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub additional_skill: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_methods: Option<Vec<TarotAcquisitionMethod>>,
}

impl Record for Tarot {
    type Create = CreateTarotRequest;
    type Update = UpdateTarotRequest;

    const KIND: EntityKind = EntityKind::Tarot;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateTarotRequest, now: &str) -> Self {
        Self {
            id,
            name: input.name,
            rarity_id: input.rarity_id,
            icon: input.icon,
            equipment_skill: input.equipment_skill,
            additional_skill: input.additional_skill,
            description: input.description,
            acquisition_methods: input.acquisition_methods,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn apply_update(&mut self, patch: &UpdateTarotRequest) {
        replace(&mut self.name, &patch.name);
        replace(&mut self.rarity_id, &patch.rarity_id);
        patch.icon.apply_to(&mut self.icon);
        patch.equipment_skill.apply_to(&mut self.equipment_skill);
        patch.additional_skill.apply_to(&mut self.additional_skill);
        patch.description.apply_to(&mut self.description);
        replace(&mut self.acquisition_methods, &patch.acquisition_methods);
    }

    fn touch(&mut self, now: &str) {
        self.updated_at = now.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_stored_tarot() {
        let json = r#"{
            "id": "t1",
            "name": "愚者",
            "rarityId": "r1",
            "icon": "/uploads/tarot-123.png",
            "acquisitionMethods": ["静寂の地-2", "期間限定イベントドロップ"],
            "createdAt": "2025-01-31T12:00:00.000Z",
            "updatedAt": "2025-01-31T12:00:00.000Z"
        }"#;
        let tarot: Tarot = serde_json::from_str(json).unwrap();
        assert_eq!(
            tarot.acquisition_methods,
            vec![
                TarotAcquisitionMethod::SilentLand2,
                TarotAcquisitionMethod::LimitedEventDrop
            ]
        );
        assert_eq!(tarot.normalized_icon().as_deref(), Some("/uploads/123.png"));
    }

    #[test]
    fn test_normalize_legacy_icon() {
        assert_eq!(
            normalize_legacy_icon("/uploads/tarot-a.png").as_deref(),
            Some("/uploads/a.png")
        );
        assert_eq!(normalize_legacy_icon("/uploads/a.png"), None);
    }

    #[test]
    fn test_labels_match_serde() {
        for method in TarotAcquisitionMethod::iter() {
            let json = serde_json::to_value(method).unwrap();
            assert_eq!(json, method.label());
            assert_eq!(TarotAcquisitionMethod::from_label(method.label()), Some(method));
        }
    }

    #[test]
    fn test_unknown_acquisition_method_is_rejected() {
        let result: Result<TarotAcquisitionMethod, _> = serde_json::from_str(r#""ガチャ""#);
        assert!(result.is_err());
    }
}
