use serde::{Deserialize, Serialize};

use crate::patch::replace;
use crate::record::{EntityKind, Record};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: String,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdminUserRequest {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdminUserRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
}

impl Record for AdminUser {
    type Create = CreateAdminUserRequest;
    type Update = UpdateAdminUserRequest;

    const KIND: EntityKind = EntityKind::AdminUser;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_create(id: String, input: CreateAdminUserRequest, _now: &str) -> Self {
        Self {
            id,
            username: input.username,
            password_hash: input.password_hash,
        }
    }

    fn apply_update(&mut self, patch: &UpdateAdminUserRequest) {
        replace(&mut self.username, &patch.username);
        replace(&mut self.password_hash, &patch.password_hash);
    }
}
