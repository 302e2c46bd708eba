//! Character Detail - `/character/:id`
//!
//! Resolves the route id against the catalog. Unknown ids render an explicit
//! "Character not found" state instead of an empty page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{
    AbilityList, EmptyState, FanArtGallery, GuideSection, NavHeader, RarityBadge, StatGauges,
};
use crate::context::use_catalog;
use crate::theme::rarity_gradient;

/// Detail view for a single character.
#[component]
pub fn CharacterDetail(id: String) -> Element {
    let navigator = use_navigator();
    let catalog = use_catalog();

    let Some(character) = catalog.get(&id).cloned() else {
        return rsx! {
            div { class: "page",
                NavHeader {}
                div { class: "not-found",
                    EmptyState { title: "Character not found".to_string() }
                    Link { class: "btn-back", to: Route::Home {}, "← Back to Characters" }
                }
            }
        };
    };

    tracing::debug!("Showing character '{}'", character.id);

    let glow = rarity_gradient(character.rarity);

    rsx! {
        div { class: "page",
            NavHeader {}

            div { class: "detail",
                button {
                    class: "btn-back",
                    onclick: move |_| {
                        navigator.push(Route::Home {});
                    },
                    "← Back to Characters"
                }

                div { class: "detail-grid",
                    // Portrait
                    div { class: "detail-portrait",
                        div { class: "detail-portrait__glow", style: "background: {glow};" }
                        div { class: "detail-portrait__frame",
                            div { class: "detail-portrait__avatar", "{character.avatar}" }
                            RarityBadge { rarity: character.rarity, large: true }
                        }
                    }

                    // Info column
                    div { class: "detail-info",
                        div {
                            h1 { class: "detail-name", "{character.name}" }
                            p { class: "detail-role", "{character.role}" }
                        }
                        p { class: "detail-description", "{character.description}" }

                        StatGauges { stats: character.stats }
                        AbilityList { abilities: character.abilities.clone() }
                    }
                }

                GuideSection { name: character.name.clone(), guide: character.guide.clone() }
                FanArtGallery { fan_art: character.fan_art.clone() }
            }
        }
    }
}
