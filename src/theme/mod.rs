//! Visual theme: palette helpers and the global stylesheet.

mod colors;
mod styles;

pub use colors::{rarity_gradient, stat_gradient};
pub use styles::GLOBAL_STYLES;
