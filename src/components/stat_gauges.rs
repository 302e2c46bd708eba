//! Stat Gauges Component
//!
//! Labelled horizontal bars for attack, defense, speed and HP. Bar widths are
//! clamped to 100% since stat values are not bounded.

use dioxus::prelude::*;
use herohub_core::{StatKind, Stats};

use crate::theme::stat_gradient;

/// Icon glyph for a stat
pub fn stat_icon(kind: StatKind) -> &'static str {
    match kind {
        StatKind::Attack => "⚔",
        StatKind::Defense => "🛡",
        StatKind::Speed => "⚡",
        StatKind::Hp => "❤",
    }
}

/// Stats panel on the detail page.
#[component]
pub fn StatGauges(stats: Stats) -> Element {
    rsx! {
        div { class: "panel",
            h3 { class: "panel__title", "Stats" }
            div { class: "stat-gauges",
                for kind in StatKind::ALL {
                    {
                        let label = kind.label();
                        let icon = stat_icon(kind);
                        let value = stats.get(kind);
                        let width = stats.gauge(kind);
                        let fill = stat_gradient(kind);

                        rsx! {
                            div { key: "{label}", class: "stat-gauge",
                                div { class: "stat-gauge__header",
                                    span { class: "stat-gauge__label", "{icon} {label}" }
                                    span { class: "stat-gauge__value", "{value}" }
                                }
                                div { class: "stat-gauge__track",
                                    div {
                                        class: "stat-gauge__fill",
                                        style: "width: {width}%; background: {fill};",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
