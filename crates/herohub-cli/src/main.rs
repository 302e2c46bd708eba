//! Character Hub CLI
//!
//! Thin wrapper around herohub-core for browsing the catalog from a terminal.
//!
//! ## Usage
//!
//! ```bash
//! # List every character
//! herohub list
//!
//! # Search by name or description, narrowed by role and rarity
//! herohub list --search frost --role Mage --rarity Epic
//!
//! # Show one character in full
//! herohub show frost-mage
//!
//! # Selector values
//! herohub roles
//! herohub rarities
//!
//! # Use a different catalog file
//! herohub --catalog ./my-heroes.json stats
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use herohub_core::{
    Catalog, CatalogError, CharacterRecord, FilterCriteria, Rarity, Role, StatKind, ALL_LABEL,
};

/// Character Hub - game character catalog
#[derive(Parser)]
#[command(name = "herohub")]
#[command(version = "0.1.0")]
#[command(about = "Character Hub - browse character guides and fan art")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Catalog JSON file (default: built-in catalog)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List characters matching the filters
    List {
        /// Case-insensitive text matched against name and description
        #[arg(short, long, default_value = "")]
        search: String,
        /// Role filter (All, Tank, DPS, Support, Mage, Assassin)
        #[arg(short, long, default_value = ALL_LABEL)]
        role: String,
        /// Rarity filter (All, Common, Rare, Epic, Legendary)
        #[arg(long, default_value = ALL_LABEL)]
        rarity: String,
        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one character's stats, abilities, guide and fan art
    Show {
        /// Character ID
        id: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List role selector values
    Roles,

    /// List rarity selector values
    Rarities,

    /// Catalog summary
    Stats,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Build criteria from the `list` arguments, naming valid values on error
fn resolve_criteria(search: &str, role: &str, rarity: &str) -> Result<FilterCriteria> {
    FilterCriteria::from_selectors(search, role, rarity).map_err(|err| match err {
        CatalogError::InvalidRole(value) => anyhow::anyhow!(
            "Invalid role '{}'. Must be one of: {}",
            value,
            selector_values(Role::ALL.iter().map(Role::label))
        ),
        CatalogError::InvalidRarity(value) => anyhow::anyhow!(
            "Invalid rarity '{}'. Must be one of: {}",
            value,
            selector_values(Rarity::ALL.iter().map(Rarity::label))
        ),
        other => other.into(),
    })
}

fn selector_values<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    std::iter::once(ALL_LABEL)
        .chain(labels)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_character_line(character: &CharacterRecord) {
    println!(
        "  {:<22} {:<9} {:<10} {}",
        character.name, character.role, character.rarity, character.id
    );
}

fn print_character_detail(character: &CharacterRecord) {
    println!("{} {}", character.name, character.avatar);
    println!("  ID: {}", character.id);
    println!("  Role: {}", character.role);
    println!("  Rarity: {}", character.rarity);
    println!();
    println!("{}", character.description);

    println!();
    println!("Stats:");
    for kind in StatKind::ALL {
        println!("  {:<8} {:>3}", kind.label(), character.stats.get(kind));
    }

    println!();
    println!("Abilities:");
    for ability in &character.abilities {
        println!("  {} - {}", ability.name, ability.description);
    }

    println!();
    println!("How to Play {}:", character.name);
    println!("  Early Game: {}", character.guide.early_game);
    println!("  Mid Game: {}", character.guide.mid_game);
    println!("  Late Game: {}", character.guide.late_game);
    if !character.guide.tips.is_empty() {
        println!("  Tips:");
        for tip in &character.guide.tips {
            println!("    - {}", tip);
        }
    }

    println!();
    println!("Fan Art Gallery:");
    if character.fan_art.is_empty() {
        println!("  (no fan art yet)");
    }
    for art in &character.fan_art {
        println!("  {} (★ {})", art.artist, art.likes);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let catalog = Catalog::load(cli.catalog.as_deref()).with_context(|| match &cli.catalog {
        Some(path) => format!("Failed to load catalog from {}", path.display()),
        None => "Failed to load built-in catalog".to_string(),
    })?;
    tracing::info!(
        source = %cli.catalog.as_deref().map_or_else(|| "built-in".to_string(), |p| p.display().to_string()),
        characters = catalog.len(),
        "Catalog ready"
    );

    match cli.command {
        Commands::List {
            search,
            role,
            rarity,
            json,
        } => {
            let criteria = resolve_criteria(&search, &role, &rarity)?;
            tracing::debug!("Resolved criteria: {:?}", criteria);
            let found = catalog.filter(&criteria);

            if json {
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else if found.is_empty() {
                println!("No characters found");
                println!("Try adjusting your filters");
            } else {
                println!("Characters ({} of {}):", found.len(), catalog.len());
                for character in found {
                    print_character_line(character);
                }
            }
        }

        Commands::Show { id, json } => {
            let character = catalog.require(&id)?;
            if json {
                println!("{}", serde_json::to_string_pretty(character)?);
            } else {
                print_character_detail(character);
            }
        }

        Commands::Roles => {
            println!("{}", ALL_LABEL);
            for role in Role::ALL {
                println!("{}", role);
            }
        }

        Commands::Rarities => {
            println!("{}", ALL_LABEL);
            for rarity in Rarity::ALL {
                println!("{}", rarity);
            }
        }

        Commands::Stats => {
            let summary = catalog.summary();
            println!("Characters: {}", summary.total);
            println!("Fan art likes: {}", summary.total_likes);
            println!();
            println!("By role:");
            for (role, count) in &summary.by_role {
                println!("  {:<9} {}", role, count);
            }
            println!();
            println!("By rarity:");
            for (rarity, count) in &summary.by_rarity {
                println!("  {:<10} {}", rarity, count);
            }
        }
    }

    Ok(())
}
