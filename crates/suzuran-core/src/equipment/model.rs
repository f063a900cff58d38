use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::acquisition::split_acquisition_methods;
use crate::patch::{Patch, replace};
use crate::record::{EntityKind, Record};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EquipmentCategory {
    Weapon,
    Armor,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EquipmentWeaponType {
    Sword,
    Spear,
    Axe,
    Bow,
    Staff,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EquipmentCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<EquipmentWeaponType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Labels joined with `", "`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_method: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Equipment {
    pub fn acquisition_methods(&self) -> Vec<String> {
        self.acquisition_method
            .as_deref()
            .map(split_acquisition_methods)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipmentRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EquipmentCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<EquipmentWeaponType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_skill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquisition_method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub icon: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub rarity_id: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub category: Patch<EquipmentCategory>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub weapon_type: Patch<EquipmentWeaponType>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub equipment_skill: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub description: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub acquisition_method: Patch<String>,
}

impl Record for Equipment {
    type Create = CreateEquipmentRequest;
    type Update = UpdateEquipmentRequest;

    const KIND: EntityKind = EntityKind::Equipment;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateEquipmentRequest, now: &str) -> Self {
        Self {
            id,
            name: input.name,
            icon: input.icon,
            rarity_id: input.rarity_id,
            category: input.category,
            weapon_type: input.weapon_type,
            equipment_skill: input.equipment_skill,
            description: input.description,
            acquisition_method: input.acquisition_method,
            created_at: now.to_string(),
            updated_at: now.to_string(),
        }
    }

    fn apply_update(&mut self, patch: &UpdateEquipmentRequest) {
        replace(&mut self.name, &patch.name);
        patch.icon.apply_to(&mut self.icon);
        patch.rarity_id.apply_to(&mut self.rarity_id);
        patch.category.apply_to(&mut self.category);
        patch.weapon_type.apply_to(&mut self.weapon_type);
        patch.equipment_skill.apply_to(&mut self.equipment_skill);
        patch.description.apply_to(&mut self.description);
        patch.acquisition_method.apply_to(&mut self.acquisition_method);
    }

    fn touch(&mut self, now: &str) {
        self.updated_at = now.to_string();
    }
}
