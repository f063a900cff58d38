use serde_json::{Map, Value};
use suzuran_core::error::Result;
use suzuran_core::record::EntityKind;
use suzuran_core::skill_effect::SkillEffectCategory;

use super::traits::RecordMigration;

/// Gives every skill effect without a category the `その他` category.
#[derive(Debug, Default)]
pub struct DefaultSkillEffectCategory;

impl RecordMigration for DefaultSkillEffectCategory {
    fn name(&self) -> &'static str {
        "skill-effect-default-category"
    }

    fn kind(&self) -> EntityKind {
        EntityKind::SkillEffect
    }

    fn migrate(&self, record: &mut Map<String, Value>) -> Result<bool> {
        match record.get("category") {
            Some(Value::Null) | None => {
                record.insert(
                    "category".to_string(),
                    Value::String(SkillEffectCategory::Other.label().to_string()),
                );
                Ok(true)
            }
            Some(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_fills_missing_and_null_category() {
        let migration = DefaultSkillEffectCategory;
        let mut missing = object(json!({"id": "a", "name": "x", "description": ""}));
        let mut null = object(json!({"id": "b", "name": "y", "category": null}));

        assert!(migration.migrate(&mut missing).unwrap());
        assert!(migration.migrate(&mut null).unwrap());
        assert_eq!(missing["category"], "その他");
        assert_eq!(null["category"], "その他");
    }

    #[test]
    fn test_keeps_existing_category() {
        let mut record = object(json!({"id": "a", "name": "x", "category": "バフ"}));
        assert!(!DefaultSkillEffectCategory.migrate(&mut record).unwrap());
        assert_eq!(record["category"], "バフ");
    }
}
