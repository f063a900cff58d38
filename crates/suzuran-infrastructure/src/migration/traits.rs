use serde_json::{Map, Value};
use suzuran_core::error::Result;
use suzuran_core::record::EntityKind;

/// A rewrite applied to every record of one collection.
///
/// Implementations must be idempotent: running a migration over its own
/// output changes nothing.
pub trait RecordMigration: Send + Sync {
    /// Stable name used on the command line and in logs.
    fn name(&self) -> &'static str;

    /// The collection this migration rewrites.
    fn kind(&self) -> EntityKind;

    /// Rewrites `record` in place and reports whether it changed.
    fn migrate(&self, record: &mut Map<String, Value>) -> Result<bool>;
}
