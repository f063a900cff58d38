use serde::{Deserialize, Serialize};

use super::request::{CreateRarityRequest, UpdateRarityRequest};
use crate::lenient::int_from_form;
use crate::patch::replace;
use crate::record::{EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rarity {
    pub id: String,
    pub name: String,
    /// Public path of the display image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Rank value; higher is rarer.
    #[serde(default, deserialize_with = "int_from_form")]
    pub value: i64,
}

impl Record for Rarity {
    type Create = CreateRarityRequest;
    type Update = UpdateRarityRequest;

    const KIND: EntityKind = EntityKind::Rarity;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateRarityRequest, _now: &str) -> Self {
        Self {
            id,
            name: input.name,
            image: input.image,
            value: input.value,
        }
    }

    fn apply_update(&mut self, patch: &UpdateRarityRequest) {
        replace(&mut self.name, &patch.name);
        patch.image.apply_to(&mut self.image);
        replace(&mut self.value, &patch.value);
    }
}
