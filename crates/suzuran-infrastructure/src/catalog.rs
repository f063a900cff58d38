//! Composition root wiring one `JsonRepository` per collection.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use suzuran_core::admin_user::AdminUser;
use suzuran_core::catalog::{
    CatalogSnapshot, CharacterDetail, DanglingReference, EquipmentWithRarity, TarotWithRarity,
    character_detail, dangling_references, equipment_with_rarity, tarots_with_rarity,
};
use suzuran_core::character::Character;
use suzuran_core::clock::{Clock, SystemClock};
use suzuran_core::equipment::Equipment;
use suzuran_core::error::Result;
use suzuran_core::ex_skill::ExSkill;
use suzuran_core::faction::Faction;
use suzuran_core::id::{Base36IdGenerator, IdGenerator};
use suzuran_core::personality_skill::PersonalitySkill;
use suzuran_core::rarity::Rarity;
use suzuran_core::record::Record;
use suzuran_core::repository::Repository;
use suzuran_core::role::Role;
use suzuran_core::skill::Skill;
use suzuran_core::skill_effect::SkillEffect;
use suzuran_core::tarot::Tarot;
use tracing::{info, warn};

use crate::json_repository::JsonRepository;

/// Every repository over one data directory.
///
/// Repositories share the id generator and clock given at construction.
pub struct Catalog {
    data_dir: PathBuf,
    characters: JsonRepository<Character>,
    rarities: JsonRepository<Rarity>,
    roles: JsonRepository<Role>,
    factions: JsonRepository<Faction>,
    skills: JsonRepository<Skill>,
    skill_effects: JsonRepository<SkillEffect>,
    personality_skills: JsonRepository<PersonalitySkill>,
    ex_skills: JsonRepository<ExSkill>,
    equipment: JsonRepository<Equipment>,
    tarots: JsonRepository<Tarot>,
    admin_users: JsonRepository<AdminUser>,
}

impl Catalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self::with_services(data_dir, Arc::new(Base36IdGenerator), Arc::new(SystemClock))
    }

    pub fn with_services(
        data_dir: impl Into<PathBuf>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let data_dir = data_dir.into();
        Self {
            characters: repository(&data_dir, &ids, &clock),
            rarities: repository(&data_dir, &ids, &clock),
            roles: repository(&data_dir, &ids, &clock),
            factions: repository(&data_dir, &ids, &clock),
            skills: repository(&data_dir, &ids, &clock),
            skill_effects: repository(&data_dir, &ids, &clock),
            personality_skills: repository(&data_dir, &ids, &clock),
            ex_skills: repository(&data_dir, &ids, &clock),
            equipment: repository(&data_dir, &ids, &clock),
            tarots: repository(&data_dir, &ids, &clock),
            admin_users: repository(&data_dir, &ids, &clock),
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn characters(&self) -> &JsonRepository<Character> {
        &self.characters
    }

    pub fn rarities(&self) -> &JsonRepository<Rarity> {
        &self.rarities
    }

    pub fn roles(&self) -> &JsonRepository<Role> {
        &self.roles
    }

    pub fn factions(&self) -> &JsonRepository<Faction> {
        &self.factions
    }

    pub fn skills(&self) -> &JsonRepository<Skill> {
        &self.skills
    }

    pub fn skill_effects(&self) -> &JsonRepository<SkillEffect> {
        &self.skill_effects
    }

    pub fn personality_skills(&self) -> &JsonRepository<PersonalitySkill> {
        &self.personality_skills
    }

    pub fn ex_skills(&self) -> &JsonRepository<ExSkill> {
        &self.ex_skills
    }

    pub fn equipment(&self) -> &JsonRepository<Equipment> {
        &self.equipment
    }

    pub fn tarots(&self) -> &JsonRepository<Tarot> {
        &self.tarots
    }

    pub fn admin_users(&self) -> &JsonRepository<AdminUser> {
        &self.admin_users
    }

    /// Creates every missing collection file as an empty array.
    pub async fn ensure_all(&self) -> Result<()> {
        self.characters.ensure_exists().await?;
        self.rarities.ensure_exists().await?;
        self.roles.ensure_exists().await?;
        self.factions.ensure_exists().await?;
        self.skills.ensure_exists().await?;
        self.skill_effects.ensure_exists().await?;
        self.personality_skills.ensure_exists().await?;
        self.ex_skills.ensure_exists().await?;
        self.equipment.ensure_exists().await?;
        self.tarots.ensure_exists().await?;
        self.admin_users.ensure_exists().await?;
        info!(data_dir = %self.data_dir.display(), "Collection files ready");
        Ok(())
    }

    /// Reads every game-data collection.
    ///
    /// Each file is read independently; a concurrent writer may land between
    /// two reads.
    pub async fn snapshot(&self) -> Result<CatalogSnapshot> {
        let (characters, rarities, roles, factions, skills) = tokio::try_join!(
            self.characters.list(),
            self.rarities.list(),
            self.roles.list(),
            self.factions.list(),
            self.skills.list(),
        )?;
        let (skill_effects, personality_skills, ex_skills, equipment, tarots) = tokio::try_join!(
            self.skill_effects.list(),
            self.personality_skills.list(),
            self.ex_skills.list(),
            self.equipment.list(),
            self.tarots.list(),
        )?;
        Ok(CatalogSnapshot {
            characters,
            rarities,
            roles,
            factions,
            skills,
            skill_effects,
            personality_skills,
            ex_skills,
            equipment,
            tarots,
        })
    }

    pub async fn equipment_with_rarity(&self) -> Result<Vec<EquipmentWithRarity>> {
        let (equipment, rarities) =
            tokio::try_join!(self.equipment.list(), self.rarities.list())?;
        Ok(equipment_with_rarity(&CatalogSnapshot {
            equipment,
            rarities,
            ..Default::default()
        }))
    }

    pub async fn tarots_with_rarity(&self) -> Result<Vec<TarotWithRarity>> {
        let (tarots, rarities) = tokio::try_join!(self.tarots.list(), self.rarities.list())?;
        Ok(tarots_with_rarity(&CatalogSnapshot {
            tarots,
            rarities,
            ..Default::default()
        }))
    }

    pub async fn character_detail(&self, id: &str) -> Result<Option<CharacterDetail>> {
        Ok(character_detail(&self.snapshot().await?, id))
    }

    /// Reports every dangling weak reference. Never writes.
    pub async fn check_references(&self) -> Result<Vec<DanglingReference>> {
        let report = dangling_references(&self.snapshot().await?);
        for dangling in &report {
            warn!(
                kind = %dangling.kind,
                record_id = %dangling.record_id,
                field = %dangling.field,
                missing_id = %dangling.missing_id,
                "Dangling reference"
            );
        }
        Ok(report)
    }
}

fn repository<R: Record>(
    data_dir: &Path,
    ids: &Arc<dyn IdGenerator>,
    clock: &Arc<dyn Clock>,
) -> JsonRepository<R> {
    JsonRepository::new(data_dir)
        .with_id_generator(ids.clone())
        .with_clock(clock.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use suzuran_core::equipment::CreateEquipmentRequest;
    use suzuran_core::rarity::CreateRarityRequest;
    use suzuran_core::record::EntityKind;
    use strum::IntoEnumIterator;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_all_creates_every_file() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = Catalog::new(temp_dir.path().join("data"));
        catalog.ensure_all().await.unwrap();

        for kind in EntityKind::iter() {
            let path = catalog.data_dir().join(kind.file_name());
            assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
        }
    }

    #[tokio::test]
    async fn test_equipment_view_resolves_rarity() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = Catalog::new(temp_dir.path());
        let rarity = catalog
            .rarities()
            .create(CreateRarityRequest {
                name: "SR".to_string(),
                image: None,
                value: 4,
            })
            .await
            .unwrap();
        catalog
            .equipment()
            .create(CreateEquipmentRequest {
                name: "銀の槍".to_string(),
                rarity_id: Some(rarity.id.clone()),
                ..Default::default()
            })
            .await
            .unwrap();

        let views = catalog.equipment_with_rarity().await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].rarity.as_ref(), Some(&rarity));
    }
}
