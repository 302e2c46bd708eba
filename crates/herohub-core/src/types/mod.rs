//! Core types for Character Hub

pub mod category;
pub mod character;

pub use category::{Rarity, Role};
pub use character::{Ability, CharacterRecord, FanArt, Guide, StatKind, Stats, EXCERPT_LEN};
