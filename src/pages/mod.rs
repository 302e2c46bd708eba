//! Page components for Character Hub.

mod character_detail;
mod home;
mod not_found;

pub use character_detail::CharacterDetail;
pub use home::Home;
pub use not_found::PageNotFound;
