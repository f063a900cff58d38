use serde_json::{Map, Value};
use std::sync::Arc;
use suzuran_core::admin_user::PasswordHasher;
use suzuran_core::error::{Result, SuzuranError};
use suzuran_core::record::EntityKind;

use super::traits::RecordMigration;

const PLAINTEXT_FIELD: &str = "password";
const HASH_FIELD: &str = "passwordHash";

/// Replaces plaintext `password` fields with a `passwordHash`.
///
/// Records that already carry a hash are left alone.
pub struct HashAdminPasswords {
    hasher: Arc<dyn PasswordHasher>,
}

impl HashAdminPasswords {
    pub fn new(hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { hasher }
    }
}

impl RecordMigration for HashAdminPasswords {
    fn name(&self) -> &'static str {
        "admin-user-hash-password"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::AdminUser
    }

    fn migrate(&self, record: &mut Map<String, Value>) -> Result<bool> {
        if record.get(HASH_FIELD).is_some_and(|hash| !hash.is_null()) {
            return Ok(false);
        }
        let password = match record.get(PLAINTEXT_FIELD) {
            Some(Value::String(password)) => password.clone(),
            Some(Value::Null) | None => return Ok(false),
            Some(_) => {
                return Err(SuzuranError::migration(format!(
                    "admin user {} has a non-string password",
                    record.get("id").and_then(Value::as_str).unwrap_or("?")
                )));
            }
        };

        let hash = self.hasher.hash(&password)?;
        record.insert(HASH_FIELD.to_string(), Value::String(hash));
        record.remove(PLAINTEXT_FIELD);
        Ok(true)
    }
}
