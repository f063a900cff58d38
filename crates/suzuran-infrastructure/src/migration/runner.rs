//! Applies record migrations to collection files.

use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use suzuran_core::admin_user::PasswordHasher;
use suzuran_core::error::{Result, SuzuranError};
use suzuran_core::record::EntityKind;
use tracing::info;

use super::admin_user::HashAdminPasswords;
use super::skill_effect::DefaultSkillEffectCategory;
use super::tarot::NormalizeTarotIconPath;
use super::traits::RecordMigration;
use crate::json_repository::run_blocking;
use crate::paths::SuzuranPaths;
use crate::storage::{JsonCollection, Mutation};

/// Outcome of one migration over one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub name: &'static str,
    pub kind: EntityKind,
    /// Number of records rewritten. Zero means the file was not written.
    pub changed: usize,
}

/// Ordered set of migrations over one data directory.
pub struct MigrationRunner {
    data_dir: PathBuf,
    migrations: Vec<Arc<dyn RecordMigration>>,
}

impl MigrationRunner {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            migrations: Vec::new(),
        }
    }

    /// A runner with every shipped migration registered.
    pub fn with_defaults(data_dir: impl Into<PathBuf>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self::new(data_dir)
            .register(Arc::new(DefaultSkillEffectCategory))
            .register(Arc::new(HashAdminPasswords::new(hasher)))
            .register(Arc::new(NormalizeTarotIconPath))
    }

    pub fn register(mut self, migration: Arc<dyn RecordMigration>) -> Self {
        self.migrations.push(migration);
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.migrations.iter().map(|m| m.name()).collect()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Runs every registered migration in registration order.
    pub async fn run_all(&self) -> Result<Vec<MigrationReport>> {
        let mut reports = Vec::with_capacity(self.migrations.len());
        for migration in &self.migrations {
            reports.push(self.apply(migration.clone()).await?);
        }
        Ok(reports)
    }

    /// Runs the migration called `name`.
    pub async fn run(&self, name: &str) -> Result<MigrationReport> {
        let migration = self
            .migrations
            .iter()
            .find(|m| m.name() == name)
            .cloned()
            .ok_or_else(|| SuzuranError::migration(format!("Unknown migration '{}'", name)))?;
        self.apply(migration).await
    }

    async fn apply(&self, migration: Arc<dyn RecordMigration>) -> Result<MigrationReport> {
        let name = migration.name();
        let kind = migration.kind();
        let collection =
            JsonCollection::<Value>::new(SuzuranPaths::collection_file(&self.data_dir, kind));

        let changed = run_blocking(move || {
            let path = collection.path().display().to_string();
            collection.update(|records| {
                let mut changed = 0;
                for (index, record) in records.iter_mut().enumerate() {
                    let Value::Object(fields) = record else {
                        return Err(SuzuranError::corrupt(
                            path.clone(),
                            format!("record {} is not an object", index),
                        ));
                    };
                    if migration.migrate(fields)? {
                        changed += 1;
                    }
                }
                if changed > 0 {
                    Ok(Mutation::Write(changed))
                } else {
                    Ok(Mutation::Skip(0))
                }
            })
        })
        .await?;

        info!(migration = name, kind = %kind, changed, "Migration finished");
        Ok(MigrationReport {
            name,
            kind,
            changed,
        })
    }
}
