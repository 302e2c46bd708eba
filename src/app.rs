use dioxus::prelude::*;

use crate::context::provide_catalog;
use crate::pages::{CharacterDetail, Home, PageNotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Character list with search and filters
/// - `/character/:id` - Stats, abilities, guide and fan art for one character
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/character/:id")]
    CharacterDetail { id: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the catalog context, and routing.
#[component]
pub fn App() -> Element {
    provide_catalog();

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
