//! Read-only joined views and the reference report.

use anyhow::{Result, bail};
use suzuran_core::SuzuranError;
use suzuran_core::character::{CharacterFilter, CharacterRepository};
use suzuran_core::record::EntityKind;
use tracing::info;

use super::{Context, print_json};

pub async fn search(ctx: &Context, filter: &CharacterFilter) -> Result<()> {
    let found = ctx.catalog.characters().search(filter).await?;
    print_json(&found)
}

pub async fn character(ctx: &Context, id: &str) -> Result<()> {
    match ctx.catalog.character_detail(id).await? {
        Some(detail) => print_json(&detail),
        None => bail!(SuzuranError::not_found(
            EntityKind::Character.entity_type(),
            id
        )),
    }
}

pub async fn equipment(ctx: &Context) -> Result<()> {
    print_json(&ctx.catalog.equipment_with_rarity().await?)
}

pub async fn tarots(ctx: &Context) -> Result<()> {
    print_json(&ctx.catalog.tarots_with_rarity().await?)
}

pub async fn check_refs(ctx: &Context) -> Result<()> {
    let report = ctx.catalog.check_references().await?;
    for dangling in &report {
        println!("{}", dangling);
    }
    if report.is_empty() {
        info!("No dangling references");
    } else {
        info!(count = report.len(), "Dangling references found");
    }
    Ok(())
}
