use serde_json::{Map, Value};
use suzuran_core::error::Result;
use suzuran_core::record::EntityKind;
use suzuran_core::tarot::normalize_legacy_icon;

use super::traits::RecordMigration;

/// Rewrites `/uploads/tarot-` icon paths to `/uploads/`.
#[derive(Debug, Default)]
pub struct NormalizeTarotIconPath;

impl RecordMigration for NormalizeTarotIconPath {
    fn name(&self) -> &'static str {
        "tarot-legacy-icon-path"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Tarot
    }

    fn migrate(&self, record: &mut Map<String, Value>) -> Result<bool> {
        let Some(Value::String(icon)) = record.get("icon") else {
            return Ok(false);
        };
        match normalize_legacy_icon(icon) {
            Some(fixed) => {
                record.insert("icon".to_string(), Value::String(fixed));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
