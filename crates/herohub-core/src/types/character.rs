//! Character records as loaded from the catalog.

use serde::{Deserialize, Serialize};

use super::category::{Rarity, Role};

/// Length, in characters, of the description shown on card overlays
pub const EXCERPT_LEN: usize = 100;

/// Combat gauges, each a percentage-like value
///
/// The 0-100 range is conventional, not enforced. Fractional and negative
/// values load as-is; use [`Stats::gauge`] for a display width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub hp: f64,
}

/// Which gauge of [`Stats`] to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    Attack,
    Defense,
    Speed,
    Hp,
}

impl StatKind {
    pub const ALL: [StatKind; 4] = [StatKind::Attack, StatKind::Defense, StatKind::Speed, StatKind::Hp];

    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::Speed => "Speed",
            StatKind::Hp => "HP",
        }
    }
}

impl Stats {
    /// Raw value of one gauge
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::Speed => self.speed,
            StatKind::Hp => self.hp,
        }
    }

    /// Gauge fill percentage, clamped to 0..=100
    pub fn gauge(&self, kind: StatKind) -> f64 {
        self.get(kind).clamp(0.0, 100.0)
    }
}

/// A named ability with its effect text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
}

/// How to play the character through each phase of a match
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guide {
    pub early_game: String,
    pub mid_game: String,
    pub late_game: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/// A community fan-art entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanArt {
    pub artist: String,
    pub likes: u32,
}

/// One character in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    /// Stable identifier, used as lookup key and route parameter
    pub id: String,
    pub name: String,
    /// Display glyph for cards and the detail view
    #[serde(default)]
    pub avatar: String,
    pub description: String,
    pub role: Role,
    pub rarity: Rarity,
    pub stats: Stats,
    #[serde(default)]
    pub abilities: Vec<Ability>,
    #[serde(default)]
    pub guide: Guide,
    #[serde(default)]
    pub fan_art: Vec<FanArt>,
}

impl CharacterRecord {
    /// Description cut to `max_chars` Unicode scalar values with a trailing
    /// "...", or the whole description when it already fits.
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.description.char_indices().nth(max_chars) {
            Some((byte_idx, _)) => format!("{}...", &self.description[..byte_idx]),
            None => self.description.clone(),
        }
    }

    /// Sum of likes across all fan art
    pub fn total_likes(&self) -> u64 {
        self.fan_art.iter().map(|art| u64::from(art.likes)).sum()
    }
}
