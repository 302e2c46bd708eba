//! Character Hub Core Library
//!
//! The character catalog, its filtering rules and lookup by id.
//!
//! ## Overview
//!
//! A [`Catalog`] is an ordered, read-only list of [`CharacterRecord`]s loaded
//! once at startup. The UI narrows it with a [`FilterCriteria`] (free-text
//! search plus optional role and rarity) and resolves detail pages with
//! [`Catalog::get`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use herohub_core::{Catalog, FilterCriteria, Role};
//!
//! let catalog = Catalog::builtin()?;
//!
//! let tanks = catalog.filter(&FilterCriteria::new().with_role(Role::Tank));
//! for tank in tanks {
//!     println!("{} ({})", tank.name, tank.rarity);
//! }
//!
//! match catalog.get("frost-mage") {
//!     Some(character) => println!("{}", character.description),
//!     None => println!("Character not found"),
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod filter;
pub mod types;

// Re-exports
pub use catalog::{Catalog, CatalogSummary};
pub use error::{CatalogError, CatalogResult};
pub use filter::{filter_characters, parse_selector, selector_label, FilterCriteria, ALL_LABEL};
pub use types::*;
