use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{EmptyState, NavHeader};

/// Fallback for routes that match nothing.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::warn!("No route for '/{}'", path);

    rsx! {
        div { class: "page",
            NavHeader {}
            div { class: "not-found",
                EmptyState {
                    title: "Page not found".to_string(),
                    hint: Some(format!("Nothing lives at /{path}")),
                }
                Link { class: "btn-back", to: Route::Home {}, "← Back to Characters" }
            }
        }
    }
}
