//! Generic per-collection commands.

use anyhow::{Result, bail};
use strum::IntoEnumIterator;
use suzuran_core::record::EntityKind;
use suzuran_core::repository::Repository;
use tracing::info;

use super::{Context, print_json};

/// Binds `$repo` to the repository for `$kind` and evaluates `$body`.
macro_rules! with_repository {
    ($catalog:expr, $kind:expr, $repo:ident => $body:expr) => {
        match $kind {
            EntityKind::Character => {
                let $repo = $catalog.characters();
                $body
            }
            EntityKind::Rarity => {
                let $repo = $catalog.rarities();
                $body
            }
            EntityKind::Role => {
                let $repo = $catalog.roles();
                $body
            }
            EntityKind::Faction => {
                let $repo = $catalog.factions();
                $body
            }
            EntityKind::Skill => {
                let $repo = $catalog.skills();
                $body
            }
            EntityKind::SkillEffect => {
                let $repo = $catalog.skill_effects();
                $body
            }
            EntityKind::PersonalitySkill => {
                let $repo = $catalog.personality_skills();
                $body
            }
            EntityKind::ExSkill => {
                let $repo = $catalog.ex_skills();
                $body
            }
            EntityKind::Equipment => {
                let $repo = $catalog.equipment();
                $body
            }
            EntityKind::Tarot => {
                let $repo = $catalog.tarots();
                $body
            }
            EntityKind::AdminUser => {
                let $repo = $catalog.admin_users();
                $body
            }
        }
    };
}

pub async fn init(ctx: &Context) -> Result<()> {
    ctx.catalog.ensure_all().await?;
    Ok(())
}

pub fn kinds() {
    for kind in EntityKind::iter() {
        println!("{:<18} {}", kind.to_string(), kind.file_name());
    }
}

pub async fn list(ctx: &Context, kind: EntityKind) -> Result<()> {
    with_repository!(ctx.catalog, kind, repo => print_json(&repo.list().await?))
}

pub async fn get(ctx: &Context, kind: EntityKind, id: &str) -> Result<()> {
    with_repository!(ctx.catalog, kind, repo => {
        match repo.find_by_id(id).await? {
            Some(record) => print_json(&record),
            None => bail!(suzuran_core::SuzuranError::not_found(kind.entity_type(), id)),
        }
    })
}

pub async fn delete(ctx: &Context, kind: EntityKind, id: &str) -> Result<()> {
    let removed = with_repository!(ctx.catalog, kind, repo => repo.delete(id).await?);
    if !removed {
        bail!(suzuran_core::SuzuranError::not_found(kind.entity_type(), id));
    }
    info!(kind = %kind, id, "Deleted");
    Ok(())
}
