//! Categorical character attributes: combat role and rarity tier.
//!
//! Both are closed sets. Their string forms are the exact labels shown in the
//! UI selectors and stored in catalog JSON, and parsing is case-sensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Combat function of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Tank,
    #[serde(rename = "DPS")]
    Dps,
    Support,
    Mage,
    Assassin,
}

impl Role {
    /// Every role, in selector order
    pub const ALL: [Role; 5] = [Role::Tank, Role::Dps, Role::Support, Role::Mage, Role::Assassin];

    /// Display label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Dps => "DPS",
            Role::Support => "Support",
            Role::Mage => "Mage",
            Role::Assassin => "Assassin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Role {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.label() == s)
            .ok_or_else(|| CatalogError::InvalidRole(s.to_string()))
    }
}

/// Prestige tier of a character, ordered from least to most prestigious
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Every rarity, least prestigious first
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Lowercase slug used for CSS modifiers (`rarity-legendary`, ...)
    pub fn slug(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Rarity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|rarity| rarity.label() == s)
            .ok_or_else(|| CatalogError::InvalidRarity(s.to_string()))
    }
}
