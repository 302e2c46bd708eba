//! Guide Section Component
//!
//! "How to Play" walkthrough: early, mid and late game, then tips.

use dioxus::prelude::*;
use herohub_core::Guide;

#[component]
pub fn GuideSection(
    /// Character name for the heading
    name: String,
    guide: Guide,
) -> Element {
    rsx! {
        section { class: "guide panel",
            h2 { class: "section-header", "How to Play {name}" }
            div { class: "guide__body",
                p {
                    strong { "Early Game: " }
                    "{guide.early_game}"
                }
                p {
                    strong { "Mid Game: " }
                    "{guide.mid_game}"
                }
                p {
                    strong { "Late Game: " }
                    "{guide.late_game}"
                }
                if !guide.tips.is_empty() {
                    div {
                        strong { "Tips:" }
                        ul { class: "guide__tips",
                            for (index, tip) in guide.tips.iter().enumerate() {
                                li { key: "{index}", "{tip}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
