use serde::{Deserialize, Serialize};

use super::model::TerrainSuitability;
use crate::patch::Patch;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub movement_power: i64,
    pub jump_high: i64,
    pub jump_low: i64,
    #[serde(default)]
    pub terrain_suitability: TerrainSuitability,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub image: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movement_power: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_high: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_low: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain_suitability: Option<TerrainSuitability>,
}
