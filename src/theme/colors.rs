//! Color palette.
//!
//! Night-sky purples with rarity and stat gradients. The same values are
//! exposed as CSS custom properties in `styles.rs`.

use herohub_core::{Rarity, StatKind};

/// Background gradient for a rarity tier (badges, portrait glow)
pub fn rarity_gradient(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Legendary => "linear-gradient(135deg, #eab308, #f97316)",
        Rarity::Epic => "linear-gradient(135deg, #a855f7, #ec4899)",
        Rarity::Rare => "linear-gradient(135deg, #3b82f6, #06b6d4)",
        Rarity::Common => "linear-gradient(135deg, #6b7280, #4b5563)",
    }
}

/// Fill gradient for a stat gauge
pub fn stat_gradient(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Attack => "linear-gradient(90deg, #ef4444, #f97316)",
        StatKind::Defense => "linear-gradient(90deg, #3b82f6, #06b6d4)",
        StatKind::Speed => "linear-gradient(90deg, #eab308, #22c55e)",
        StatKind::Hp => "linear-gradient(90deg, #ec4899, #ef4444)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rarity_has_a_distinct_gradient() {
        let gradients: Vec<&str> = Rarity::ALL.into_iter().map(rarity_gradient).collect();
        for (i, a) in gradients.iter().enumerate() {
            assert!(gradients[i + 1..].iter().all(|b| a != b));
        }
    }
}
