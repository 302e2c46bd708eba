use dioxus::prelude::*;

/// Centered message for empty results and missing characters.
#[component]
pub fn EmptyState(
    title: String,
    #[props(default = None)]
    hint: Option<String>,
) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "empty-state__title", "{title}" }
            if let Some(hint) = hint {
                p { class: "empty-state__hint", "{hint}" }
            }
        }
    }
}
