//! Rarity Badge Component

use dioxus::prelude::*;
use herohub_core::Rarity;

use crate::theme::rarity_gradient;

/// Pill in the corner of cards and portraits, colored by rarity tier.
#[component]
pub fn RarityBadge(
    rarity: Rarity,
    /// Larger variant for the detail portrait
    #[props(default = false)]
    large: bool,
) -> Element {
    let gradient = rarity_gradient(rarity);
    let size_class = if large { "rarity-badge rarity-badge--large" } else { "rarity-badge" };

    rsx! {
        div {
            class: "{size_class}",
            style: "background: {gradient};",
            span { "{rarity}" }
        }
    }
}
