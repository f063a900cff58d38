use serde::{Deserialize, Serialize};
use strum::EnumIter;

use super::request::{CreateRoleRequest, UpdateRoleRequest};
use crate::lenient::{blank_as_default, int_from_form};
use crate::patch::replace;
use crate::record::{EntityKind, Record};

/// Terrain a role moves well on. Only one value exists so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum TerrainSuitability {
    #[default]
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "int_from_form")]
    pub movement_power: i64,
    #[serde(default, deserialize_with = "int_from_form")]
    pub jump_high: i64,
    #[serde(default, deserialize_with = "int_from_form")]
    pub jump_low: i64,
    #[serde(default, deserialize_with = "blank_as_default")]
    pub terrain_suitability: TerrainSuitability,
}

impl Record for Role {
    type Create = CreateRoleRequest;
    type Update = UpdateRoleRequest;

    const KIND: EntityKind = EntityKind::Role;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateRoleRequest, _now: &str) -> Self {
        Self {
            id,
            name: input.name,
            image: input.image,
            movement_power: input.movement_power,
            jump_high: input.jump_high,
            jump_low: input.jump_low,
            terrain_suitability: input.terrain_suitability,
        }
    }

    fn apply_update(&mut self, patch: &UpdateRoleRequest) {
        replace(&mut self.name, &patch.name);
        patch.image.apply_to(&mut self.image);
        replace(&mut self.movement_power, &patch.movement_power);
        replace(&mut self.jump_high, &patch.jump_high);
        replace(&mut self.jump_low, &patch.jump_low);
        replace(&mut self.terrain_suitability, &patch.terrain_suitability);
    }
}
