//! Navigation Header Component
//!
//! Fixed header with the brand link, section links and the "Submit Art"
//! button. Art submission is not wired to anything.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation Header component
///
/// - Left: "Character Hub" brand, links home
/// - Center: Characters / Guides / Fan Art
/// - Right: Submit Art button (inert)
#[component]
pub fn NavHeader() -> Element {
    rsx! {
        header { class: "nav-header",
            div { class: "nav-header__inner",
                Link { class: "nav-brand", to: Route::Home {},
                    span { class: "nav-brand__icon", "✨" }
                    span { class: "nav-brand__title", "Character Hub" }
                }

                nav { class: "nav-links",
                    Link { class: "nav-link", to: Route::Home {}, "Characters" }
                    a { class: "nav-link", href: "#guides", "Guides" }
                    a { class: "nav-link", href: "#fanart", "Fan Art" }
                }

                button {
                    class: "btn-submit",
                    onclick: move |_| tracing::debug!("Submit Art clicked; uploads are not supported"),
                    "Submit Art"
                }
            }
        }
    }
}
