#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use herohub_core::Catalog;

/// Catalog loaded at startup, read-only afterwards
static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

/// The process-wide catalog.
///
/// Falls back to the built-in catalog if called before startup set one.
pub fn get_catalog() -> Arc<Catalog> {
    CATALOG
        .get_or_init(|| match Catalog::builtin() {
            Ok(catalog) => Arc::new(catalog),
            Err(e) => {
                tracing::error!("Built-in catalog is invalid: {}", e);
                Arc::new(Catalog::default())
            }
        })
        .clone()
}

/// Character Hub - game character guides and fan art
#[derive(Parser, Debug)]
#[command(name = "herohub-desktop")]
#[command(about = "Character Hub - discover characters, guides and community fan art")]
struct Args {
    /// Catalog JSON file (default: built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

/// Load the requested catalog, falling back to the built-in one on error.
fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    if let Some(path) = path {
        match Catalog::from_path(&path) {
            Ok(catalog) => return Ok(catalog),
            Err(e) => {
                tracing::error!("Failed to load catalog from {:?}: {}", path, e);
                tracing::warn!("Falling back to built-in catalog");
            }
        }
    }
    Ok(Catalog::builtin()?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let catalog = load_catalog(args.catalog)?;
    tracing::info!("Starting Character Hub with {} characters", catalog.len());
    let _ = CATALOG.set(Arc::new(catalog));

    let window_width = 1200.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Game Character Hub")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
