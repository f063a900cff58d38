use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use suzuran_core::character::WeaponType;
use suzuran_core::record::EntityKind;

mod commands;
mod hasher;

#[derive(Parser)]
#[command(name = "suzuran")]
#[command(about = "Suzuran - maintenance tool for the game catalog JSON store", long_about = None)]
struct Cli {
    /// Config file (defaults to $SUZURAN_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the collection files; overrides the config file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing collection file as an empty array
    Init,
    /// List the collection kinds and their file names
    Kinds,
    /// Print every record of one collection as JSON
    List {
        /// Collection kind, e.g. `rarity` or `skill-effect`
        kind: EntityKind,
    },
    /// Print one record as JSON
    Get { kind: EntityKind, id: String },
    /// Delete one record
    Delete { kind: EntityKind, id: String },
    /// Search characters; unset filters match everything
    Search {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        rarity_id: Option<String>,
        #[arg(long)]
        role_id: Option<String>,
        /// One of 剣 槍 斧 杖 弓
        #[arg(long, value_parser = commands::parse_weapon_type)]
        weapon_type: Option<WeaponType>,
        #[arg(long)]
        faction_id: Option<String>,
    },
    /// Print a character with its references resolved
    Character { id: String },
    /// Print equipment or tarots joined with their rarity
    Joined {
        #[command(subcommand)]
        view: JoinedView,
    },
    /// Report stored ids that point at missing records
    CheckRefs,
    /// Create the default admin user unless it already exists
    SeedAdmin {
        /// Defaults to `default_admin_username` from the config
        #[arg(long)]
        username: Option<String>,
        #[arg(long, env = "SUZURAN_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Run data migrations over the collection files
    Migrate {
        /// Run only this migration
        #[arg(long)]
        name: Option<String>,
        /// List the available migrations and exit
        #[arg(long)]
        list: bool,
    },
}

#[derive(Subcommand)]
enum JoinedView {
    Equipment,
    Tarots,
}

#[tokio::main]
async fn main() -> Result<()> {
    commands::init_tracing();

    let cli = Cli::parse();
    let ctx = commands::Context::load(cli.config, cli.data_dir)?;

    match cli.command {
        Commands::Init => commands::store::init(&ctx).await?,
        Commands::Kinds => commands::store::kinds(),
        Commands::List { kind } => commands::store::list(&ctx, kind).await?,
        Commands::Get { kind, id } => commands::store::get(&ctx, kind, &id).await?,
        Commands::Delete { kind, id } => commands::store::delete(&ctx, kind, &id).await?,
        Commands::Search {
            name,
            rarity_id,
            role_id,
            weapon_type,
            faction_id,
        } => {
            let filter = suzuran_core::character::CharacterFilter {
                name,
                rarity_id,
                role_id,
                weapon_type,
                faction_id,
            };
            commands::views::search(&ctx, &filter).await?
        }
        Commands::Character { id } => commands::views::character(&ctx, &id).await?,
        Commands::Joined { view } => match view {
            JoinedView::Equipment => commands::views::equipment(&ctx).await?,
            JoinedView::Tarots => commands::views::tarots(&ctx).await?,
        },
        Commands::CheckRefs => commands::views::check_refs(&ctx).await?,
        Commands::SeedAdmin { username, password } => {
            commands::admin::seed(&ctx, username, &password).await?
        }
        Commands::Migrate { name, list } => {
            commands::admin::migrate(&ctx, name.as_deref(), list).await?
        }
    }

    Ok(())
}
