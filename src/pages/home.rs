//! Home page - searchable, filterable character list.
//!
//! Owns the filter state (search text, role, rarity). Every change rebuilds a
//! `FilterCriteria` and the visible list is recomputed from the catalog.

use dioxus::prelude::*;
use herohub_core::{CharacterRecord, FilterCriteria, Rarity, Role};

use crate::components::{CharacterCard, EmptyState, FilterBar, NavHeader};
use crate::context::use_catalog;

/// Landing page with hero banner, filters and the character grid.
#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let total = catalog.len();

    let mut search = use_signal(String::new);
    let mut role: Signal<Option<Role>> = use_signal(|| None);
    let mut rarity: Signal<Option<Rarity>> = use_signal(|| None);

    let criteria = use_memo(move || FilterCriteria {
        search_term: search(),
        role: role(),
        rarity: rarity(),
    });

    let visible: Memo<Vec<CharacterRecord>> = use_memo(move || {
        let criteria = criteria.read();
        catalog.filter(&criteria).into_iter().cloned().collect()
    });
    let characters = visible();

    rsx! {
        div { class: "page",
            NavHeader {}

            section { class: "hero",
                h1 { class: "page-title",
                    "Master Your "
                    span { class: "gradient-text", "Heroes" }
                }
                p { class: "tagline",
                    "Discover in-depth character guides, strategies, and community fan art to dominate the battlefield"
                }

                div { class: "hero-badges",
                    div { class: "hero-badge",
                        span { class: "hero-badge__icon", "👥" }
                        span { "{total} Characters" }
                    }
                    div { id: "guides", class: "hero-badge",
                        span { class: "hero-badge__icon", "✨" }
                        span { "Expert Guides" }
                    }
                    div { id: "fanart", class: "hero-badge",
                        span { class: "hero-badge__icon", "❤" }
                        span { "Fan Art Gallery" }
                    }
                }

                FilterBar {
                    search: search(),
                    role: role(),
                    rarity: rarity(),
                    on_search: move |term: String| search.set(term),
                    on_role: move |selected: Option<Role>| role.set(selected),
                    on_rarity: move |selected: Option<Rarity>| rarity.set(selected),
                }
            }

            section { class: "character-section",
                if characters.is_empty() {
                    EmptyState {
                        title: "No characters found".to_string(),
                        hint: Some("Try adjusting your filters".to_string()),
                    }
                } else {
                    div { class: "character-grid",
                        for (index, character) in characters.iter().enumerate() {
                            CharacterCard {
                                key: "{character.id}",
                                character: character.clone(),
                                index: index,
                            }
                        }
                    }
                }
            }
        }
    }
}
