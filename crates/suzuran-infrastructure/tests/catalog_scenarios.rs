//! End-to-end flows over a shared data directory.

use std::fs;
use std::sync::Arc;
use suzuran_core::admin_user::{AdminUserRepository, PasswordHasher};
use suzuran_core::character::{
    CharacterFilter, CharacterRepository, CreateCharacterRequest, WeaponType,
};
use suzuran_core::error::Result;
use suzuran_core::rarity::{CreateRarityRequest, UpdateRarityRequest};
use suzuran_core::record::EntityKind;
use suzuran_core::repository::Repository;
use suzuran_core::role::TerrainSuitability;
use suzuran_core::skill_effect::SkillEffectCategory;
use suzuran_infrastructure::migration::MigrationRunner;
use suzuran_infrastructure::{Catalog, SuzuranPaths};
use tempfile::TempDir;

struct TagHasher;

impl PasswordHasher for TagHasher {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(format!("tag:{}", password.len()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        Ok(self.hash(password)? == hash)
    }
}

fn character(name: &str, weapon: WeaponType, factions: &[&str]) -> CreateCharacterRequest {
    CreateCharacterRequest {
        name: name.to_string(),
        weapon_type: Some(weapon),
        faction_ids: factions.iter().map(|f| f.to_string()).collect(),
        ..Default::default()
    }
}

#[tokio::test]
async fn rarity_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::new(temp_dir.path());
    let rarities = catalog.rarities();

    let created = rarities
        .create(CreateRarityRequest {
            name: "SSR".to_string(),
            image: Some("/img/ssr.png".to_string()),
            value: 5,
        })
        .await
        .unwrap();
    let updated = rarities
        .update(
            &created.id,
            UpdateRarityRequest {
                value: Some(6),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.value, 6);
    assert_eq!(updated.name, "SSR");
    assert_eq!(updated.image.as_deref(), Some("/img/ssr.png"));

    assert!(rarities.delete(&created.id).await.unwrap());
    assert!(rarities.find_by_id(&created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn character_search() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::new(temp_dir.path());
    let characters = catalog.characters();

    characters
        .create(character("Alice", WeaponType::Sword, &["f1"]))
        .await
        .unwrap();
    characters
        .create(character("alicia", WeaponType::Bow, &["f2"]))
        .await
        .unwrap();
    characters
        .create(character("Bob", WeaponType::Sword, &["f1", "f2"]))
        .await
        .unwrap();

    let all = characters.search(&CharacterFilter::new()).await.unwrap();
    assert_eq!(all.len(), 3);

    let names = |found: Vec<suzuran_core::character::Character>| -> Vec<String> {
        found.into_iter().map(|c| c.name).collect()
    };

    let by_name = characters
        .search(&CharacterFilter::new().with_name("ALI"))
        .await
        .unwrap();
    assert_eq!(names(by_name), vec!["Alice", "alicia"]);

    let combined = characters
        .search(
            &CharacterFilter::new()
                .with_weapon_type(WeaponType::Sword)
                .with_faction_id("f2"),
        )
        .await
        .unwrap();
    assert_eq!(names(combined), vec!["Bob"]);
}

#[tokio::test]
async fn default_admin_seeded_once() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::new(temp_dir.path());
    let admins = catalog.admin_users();

    assert!(admins.ensure_default_admin_user("admin", "h1").await.unwrap());
    assert!(!admins.ensure_default_admin_user("admin", "h2").await.unwrap());

    let users = admins.list().await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(
        admins.find_by_username("admin").await.unwrap().unwrap().password_hash,
        "h1"
    );
}

#[tokio::test]
async fn reads_files_written_by_the_admin_ui() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(
        SuzuranPaths::collection_file(dir, EntityKind::Character),
        r#"[
  {
    "id": "m3k2x9c0a1blrx2b8c4",
    "name": "リリィ",
    "rarityId": null,
    "roleId": "",
    "factionIds": [],
    "weaponType": "杖",
    "personalitySkillId": null,
    "skillTree": {"RK1": {"left": "", "right": null}},
    "exSkillIds": [],
    "normalAppearance": null,
    "pixelAvatar": null
  },
  {
    "id": "p8d1w0e7v2alrx2b8c5",
    "name": "ノワール",
    "rarityId": "",
    "roleId": "",
    "factionIds": [],
    "weaponType": ""
  }
]"#,
    )
    .unwrap();

    let catalog = Catalog::new(dir);
    let found = catalog.characters().list().await.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].weapon_type, Some(WeaponType::Staff));
    assert_eq!(found[1].weapon_type, None);

    // Empty-string ids are not reported as dangling.
    assert!(catalog.check_references().await.unwrap().is_empty());
}

#[tokio::test]
async fn reads_rarity_and_role_form_values_written_by_the_admin_ui() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(
        SuzuranPaths::collection_file(dir, EntityKind::Rarity),
        r#"[{"id":"r1","name":"SSR","value":"5"},{"id":"r2","name":"N","value":null}]"#,
    )
    .unwrap();
    fs::write(
        SuzuranPaths::collection_file(dir, EntityKind::Role),
        r#"[{"id":"ro1","name":"Lancer","movementPower":"4","jumpHigh":"2","jumpLow":"","terrainSuitability":null}]"#,
    )
    .unwrap();
    fs::write(
        SuzuranPaths::collection_file(dir, EntityKind::Equipment),
        r#"[{"id":"e1","name":"Blade","rarityId":"r1","createdAt":"2025-01-01T00:00:00.000Z","updatedAt":"2025-01-01T00:00:00.000Z"}]"#,
    )
    .unwrap();

    let catalog = Catalog::new(dir);
    let rarities = catalog.rarities().list().await.unwrap();
    assert_eq!(
        rarities.iter().map(|r| r.value).collect::<Vec<_>>(),
        vec![5, 0]
    );

    let roles = catalog.roles().list().await.unwrap();
    assert_eq!(roles[0].movement_power, 4);
    assert_eq!(roles[0].jump_high, 2);
    assert_eq!(roles[0].jump_low, 0);
    assert_eq!(roles[0].terrain_suitability, TerrainSuitability::Normal);

    let joined = catalog.equipment_with_rarity().await.unwrap();
    assert_eq!(joined[0].rarity.as_ref().map(|r| r.value), Some(5));
    assert!(catalog.check_references().await.unwrap().is_empty());

    // The next write stores the typed values.
    catalog
        .rarities()
        .update(
            "r2",
            UpdateRarityRequest {
                name: Some("Normal".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let raw = fs::read_to_string(SuzuranPaths::collection_file(dir, EntityKind::Rarity)).unwrap();
    let stored: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored[0]["value"], 5);
    assert_eq!(stored[1]["value"], 0);
}

#[tokio::test]
async fn dangling_references_are_reported_not_fixed() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = Catalog::new(temp_dir.path());
    let rarity = catalog
        .rarities()
        .create(CreateRarityRequest {
            name: "R".to_string(),
            image: None,
            value: 1,
        })
        .await
        .unwrap();
    let created = catalog
        .characters()
        .create(CreateCharacterRequest {
            name: "Alice".to_string(),
            rarity_id: Some(rarity.id.clone()),
            ..Default::default()
        })
        .await
        .unwrap();
    catalog.rarities().delete(&rarity.id).await.unwrap();

    let report = catalog.check_references().await.unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].kind, EntityKind::Character);
    assert_eq!(report[0].record_id, created.id);
    assert_eq!(report[0].field, "rarityId");
    assert_eq!(report[0].missing_id, rarity.id);

    let detail = catalog.character_detail(&created.id).await.unwrap().unwrap();
    assert!(detail.rarity.is_none());
    assert_eq!(detail.unresolved.len(), 1);

    // Still stored as-is.
    let stored = catalog.characters().find_by_id(&created.id).await.unwrap().unwrap();
    assert_eq!(stored.rarity_id, Some(rarity.id));
}

#[tokio::test]
async fn migrations_make_legacy_files_loadable() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(
        SuzuranPaths::collection_file(dir, EntityKind::SkillEffect),
        r#"[{"id": "se1", "name": "毒", "description": "毎ターンダメージ"}]"#,
    )
    .unwrap();
    fs::write(
        SuzuranPaths::collection_file(dir, EntityKind::AdminUser),
        r#"[{"id": "u1", "username": "admin", "password": "admin"}]"#,
    )
    .unwrap();
    fs::write(
        SuzuranPaths::collection_file(dir, EntityKind::Tarot),
        r#"[{"id": "t1", "name": "塔", "rarityId": "r1", "icon": "/uploads/tarot-9.png",
            "acquisitionMethods": ["静寂の地-3"],
            "createdAt": "2025-01-31T12:00:00.000Z", "updatedAt": "2025-01-31T12:00:00.000Z"}]"#,
    )
    .unwrap();

    let catalog = Catalog::new(dir);
    assert!(catalog.skill_effects().list().await.unwrap_err().is_corrupt_data());
    assert!(catalog.admin_users().list().await.unwrap_err().is_corrupt_data());

    let runner = MigrationRunner::with_defaults(dir, Arc::new(TagHasher));
    let reports = runner.run_all().await.unwrap();
    assert!(reports.iter().all(|r| r.changed == 1));

    let effects = catalog.skill_effects().list().await.unwrap();
    assert_eq!(effects[0].category, SkillEffectCategory::Other);

    let admin = catalog
        .admin_users()
        .find_by_username("admin")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(admin.password_hash, "tag:5");

    let tarots = catalog.tarots().list().await.unwrap();
    assert_eq!(tarots[0].icon.as_deref(), Some("/uploads/9.png"));
}
