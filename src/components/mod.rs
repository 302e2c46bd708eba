//! UI Components for Character Hub.

mod ability_list;
mod character_card;
mod empty_state;
mod fan_art_gallery;
mod filter_bar;
mod guide_section;
mod nav_header;
mod rarity_badge;
mod stat_gauges;

pub use ability_list::AbilityList;
pub use character_card::CharacterCard;
pub use empty_state::EmptyState;
pub use fan_art_gallery::FanArtGallery;
pub use filter_bar::FilterBar;
pub use guide_section::GuideSection;
pub use nav_header::NavHeader;
pub use rarity_badge::RarityBadge;
pub use stat_gauges::{stat_icon, StatGauges};
