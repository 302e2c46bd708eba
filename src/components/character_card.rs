//! Character Card Component
//!
//! Grid card showing avatar, name, role, rarity badge and mini stats.
//! Hovering reveals the description excerpt; clicking opens the detail page.

use dioxus::prelude::*;
use herohub_core::{CharacterRecord, StatKind, EXCERPT_LEN};

use super::{stat_icon, RarityBadge};
use crate::app::Route;

/// Character Card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CharacterCard {
///         character: record.clone(),
///         index: 0,
///     }
/// }
/// ```
#[component]
pub fn CharacterCard(
    /// Character to display
    character: CharacterRecord,
    /// Position in the grid, for staggered animation
    #[props(default = 0)]
    index: usize,
) -> Element {
    let navigator = use_navigator();
    let rarity_class = format!("rarity-{}", character.rarity.slug());
    let excerpt = character.excerpt(EXCERPT_LEN);
    let target = character.id.clone();

    rsx! {
        div {
            class: "character-card {rarity_class}",
            style: "--index: {index}",
            onclick: move |_| {
                navigator.push(Route::CharacterDetail { id: target.clone() });
            },

            div { class: "character-card__glow" }
            RarityBadge { rarity: character.rarity }

            div { class: "character-card__body",
                div { class: "character-card__avatar", "{character.avatar}" }
                h3 { class: "character-card__name", "{character.name}" }
                p { class: "character-card__role", "{character.role}" }

                div { class: "mini-stats",
                    for kind in StatKind::ALL {
                        {
                            let label = kind.label();
                            let icon = stat_icon(kind);
                            let value = character.stats.get(kind);
                            let icon_class = format!("mini-stat__icon stat-{}", label.to_lowercase());

                            rsx! {
                                div { key: "{label}", class: "mini-stat", title: "{label}",
                                    span { class: "{icon_class}", "{icon}" }
                                    span { class: "mini-stat__value", "{value}" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "character-card__overlay",
                p { "{excerpt}" }
            }
        }
    }
}
