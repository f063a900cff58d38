use serde::{Deserialize, Serialize};

use crate::patch::{Patch, replace};
use crate::record::{EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faction {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFactionRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFactionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_keep")]
    pub image: Patch<String>,
}

impl Record for Faction {
    type Create = CreateFactionRequest;
    type Update = UpdateFactionRequest;

    const KIND: EntityKind = EntityKind::Faction;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateFactionRequest, _now: &str) -> Self {
        Self {
            id,
            name: input.name,
            image: input.image,
        }
    }

    fn apply_update(&mut self, patch: &UpdateFactionRequest) {
        replace(&mut self.name, &patch.name);
        patch.image.apply_to(&mut self.image);
    }
}
