//! Character search filter.

use serde::{Deserialize, Serialize};

use super::model::{Character, WeaponType};

/// Criteria for `CharacterRepository::search`.
///
/// Unset fields match everything and set fields combine with AND. An empty
/// string counts as unset, so a blank form field does not narrow the search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterFilter {
    /// Case-insensitive substring of the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapon_type: Option<WeaponType>,
    /// The character must belong to this faction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_id: Option<String>,
}

impl CharacterFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rarity_id(mut self, rarity_id: impl Into<String>) -> Self {
        self.rarity_id = Some(rarity_id.into());
        self
    }

    pub fn with_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = Some(role_id.into());
        self
    }

    pub fn with_weapon_type(mut self, weapon_type: WeaponType) -> Self {
        self.weapon_type = Some(weapon_type);
        self
    }

    pub fn with_faction_id(mut self, faction_id: impl Into<String>) -> Self {
        self.faction_id = Some(faction_id.into());
        self
    }

    pub fn matches(&self, character: &Character) -> bool {
        if let Some(name) = non_empty(&self.name) {
            if !character
                .name
                .to_lowercase()
                .contains(&name.to_lowercase())
            {
                return false;
            }
        }
        if let Some(rarity_id) = non_empty(&self.rarity_id) {
            if character.rarity_id.as_deref() != Some(rarity_id) {
                return false;
            }
        }
        if let Some(role_id) = non_empty(&self.role_id) {
            if character.role_id.as_deref() != Some(role_id) {
                return false;
            }
        }
        if let Some(weapon_type) = self.weapon_type {
            if character.weapon_type != Some(weapon_type) {
                return false;
            }
        }
        if let Some(faction_id) = non_empty(&self.faction_id) {
            if !character.faction_ids.iter().any(|id| id == faction_id) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
