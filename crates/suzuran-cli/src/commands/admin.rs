//! Admin seeding and data migrations.

use anyhow::Result;
use std::sync::Arc;
use suzuran_core::admin_user::{AdminUserRepository, PasswordHasher};
use suzuran_infrastructure::migration::MigrationRunner;
use tracing::info;

use super::Context;
use crate::hasher::BcryptHasher;

pub async fn seed(ctx: &Context, username: Option<String>, password: &str) -> Result<()> {
    let username = username.unwrap_or_else(|| ctx.config.default_admin_username.clone());
    let hash = BcryptHasher::new().hash(password)?;
    let inserted = ctx
        .catalog
        .admin_users()
        .ensure_default_admin_user(&username, &hash)
        .await?;
    if !inserted {
        info!(username = %username, "Admin user already exists");
    }
    Ok(())
}

pub async fn migrate(ctx: &Context, name: Option<&str>, list: bool) -> Result<()> {
    let runner =
        MigrationRunner::with_defaults(ctx.config.data_dir.clone(), Arc::new(BcryptHasher::new()));

    if list {
        for name in runner.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let reports = match name {
        Some(name) => vec![runner.run(name).await?],
        None => runner.run_all().await?,
    };
    for report in reports {
        println!("{:<32} {:<18} {} changed", report.name, report.kind.to_string(), report.changed);
    }
    Ok(())
}
