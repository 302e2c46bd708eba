//! Filter Bar Component
//!
//! Search box plus role and rarity selects. Each select lists "All" first,
//! then every value in declaration order. The component holds no state; the
//! owning page passes current values in and receives changes through handlers.

use dioxus::prelude::*;
use herohub_core::{parse_selector, selector_label, Rarity, Role, ALL_LABEL};

/// Props for the FilterBar component.
#[derive(Props, Clone, PartialEq)]
pub struct FilterBarProps {
    /// Current search text
    pub search: String,
    /// Selected role, `None` for "All"
    pub role: Option<Role>,
    /// Selected rarity, `None` for "All"
    pub rarity: Option<Rarity>,
    /// Called on every keystroke in the search box
    pub on_search: EventHandler<String>,
    pub on_role: EventHandler<Option<Role>>,
    pub on_rarity: EventHandler<Option<Rarity>>,
}

/// Selector labels: "All" followed by each value
pub fn selector_options<T: ToString>(values: impl IntoIterator<Item = T>) -> Vec<String> {
    std::iter::once(ALL_LABEL.to_string())
        .chain(values.into_iter().map(|v| v.to_string()))
        .collect()
}

/// Search and category filters for the character list.
///
/// # Example
///
/// ```ignore
/// FilterBar {
///     search: search(),
///     role: role(),
///     rarity: rarity(),
///     on_search: move |term| search.set(term),
///     on_role: move |selected| role.set(selected),
///     on_rarity: move |selected| rarity.set(selected),
/// }
/// ```
#[component]
pub fn FilterBar(props: FilterBarProps) -> Element {
    let role_options = selector_options(Role::ALL);
    let rarity_options = selector_options(Rarity::ALL);
    let selected_role = selector_label(props.role);
    let selected_rarity = selector_label(props.rarity);

    let on_search = props.on_search;
    let on_role = props.on_role;
    let on_rarity = props.on_rarity;

    rsx! {
        div { class: "filter-bar",
            div { class: "search-box",
                span { class: "search-box__icon", "🔍" }
                input {
                    class: "search-box__input",
                    r#type: "text",
                    placeholder: "Search characters...",
                    value: "{props.search}",
                    oninput: move |evt: FormEvent| on_search.call(evt.value()),
                }
            }

            div { class: "filter-selects",
                div { class: "filter-select",
                    span { class: "filter-select__icon", "⚙" }
                    select {
                        "aria-label": "Role",
                        value: "{selected_role}",
                        onchange: move |evt: FormEvent| match parse_selector::<Role>(&evt.value()) {
                            Ok(role) => on_role.call(role),
                            Err(e) => tracing::warn!("Ignoring role selection: {}", e),
                        },
                        for label in role_options {
                            option {
                                key: "{label}",
                                value: "{label}",
                                selected: label == selected_role,
                                "{label}"
                            }
                        }
                    }
                }

                div { class: "filter-select",
                    span { class: "filter-select__icon", "✨" }
                    select {
                        "aria-label": "Rarity",
                        value: "{selected_rarity}",
                        onchange: move |evt: FormEvent| match parse_selector::<Rarity>(&evt.value()) {
                            Ok(rarity) => on_rarity.call(rarity),
                            Err(e) => tracing::warn!("Ignoring rarity selection: {}", e),
                        },
                        for label in rarity_options {
                            option {
                                key: "{label}",
                                value: "{label}",
                                selected: label == selected_rarity,
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_options_start_with_all() {
        let options = selector_options(Role::ALL);
        assert_eq!(options, vec!["All", "Tank", "DPS", "Support", "Mage", "Assassin"]);
    }

    #[test]
    fn rarity_options_in_prestige_order() {
        let options = selector_options(Rarity::ALL);
        assert_eq!(options, vec!["All", "Common", "Rare", "Epic", "Legendary"]);
    }

    #[test]
    fn every_option_parses_back() {
        for option in selector_options(Role::ALL) {
            let parsed = parse_selector::<Role>(&option).unwrap();
            assert_eq!(selector_label(parsed), option);
        }
        for option in selector_options(Rarity::ALL) {
            let parsed = parse_selector::<Rarity>(&option).unwrap();
            assert_eq!(selector_label(parsed), option);
        }
    }
}
