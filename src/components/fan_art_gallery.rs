//! Fan Art Gallery Component
//!
//! Grid of community fan-art tiles (artist and likes), followed by an
//! "Upload Art" tile. Uploading is not supported, so that tile is inert.

use dioxus::prelude::*;
use herohub_core::FanArt;

/// Fan art grid for the detail page
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     FanArtGallery {
///         fan_art: vec![FanArt { artist: "NovaInk".to_string(), likes: 1243 }],
///     }
/// }
/// ```
#[component]
pub fn FanArtGallery(
    /// Entries in catalog order
    fan_art: Vec<FanArt>,
) -> Element {
    rsx! {
        section { class: "fan-art-section",
            h2 { class: "section-header", "Fan Art Gallery" }

            div { class: "fan-art-grid",
                for (index, art) in fan_art.iter().enumerate() {
                    div { key: "{index}", class: "fan-art-tile",
                        div { class: "fan-art-tile__icon", "🖼" }
                        p { class: "fan-art-tile__artist", "{art.artist}" }
                        div { class: "fan-art-tile__likes",
                            span { class: "fan-art-tile__star", "★" }
                            span { "{art.likes}" }
                        }
                    }
                }

                div {
                    class: "fan-art-tile fan-art-tile--upload",
                    onclick: move |_| tracing::debug!("Upload Art clicked; uploads are not supported"),
                    div { class: "fan-art-tile__icon", "🖼" }
                    p { "Upload Art" }
                }
            }
        }
    }
}
