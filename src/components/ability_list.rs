use dioxus::prelude::*;
use herohub_core::Ability;

/// Abilities panel on the detail page, in catalog order.
#[component]
pub fn AbilityList(abilities: Vec<Ability>) -> Element {
    rsx! {
        div { class: "panel",
            h3 { class: "panel__title", "Abilities" }
            div { class: "ability-list",
                for (index, ability) in abilities.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "ability",
                        style: "--index: {index}",
                        h4 { class: "ability__name", "{ability.name}" }
                        p { class: "ability__description", "{ability.description}" }
                    }
                }
            }
        }
    }
}
