//! Cross-collection reads over an in-memory snapshot of the catalog.
//!
//! Collections reference each other by id without any enforcement. This
//! module resolves those weak references for display (`view`) and reports
//! the ones that no longer resolve (`integrity`). Nothing here performs I/O.

mod integrity;
mod snapshot;
mod view;

pub use integrity::{DanglingReference, dangling_references};
pub use snapshot::CatalogSnapshot;
pub use view::{
    CharacterDetail, EquipmentWithRarity, ResolvedSkillNode, TarotWithRarity,
    UnresolvedReference, character_detail, equipment_with_rarity, tarots_with_rarity,
};
