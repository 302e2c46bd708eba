//! Catalog filtering.
//!
//! A record is visible when it passes all three predicates:
//!
//! - **text**: the search term is empty, or the lowercased name or
//!   description contains the lowercased term as a substring
//! - **role**: no role is selected, or the record's role equals it
//! - **rarity**: no rarity is selected, or the record's rarity equals it
//!
//! Filtering is stable: matches come back in catalog order.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{CharacterRecord, Rarity, Role};

/// Selector label meaning "no constraint"
pub const ALL_LABEL: &str = "All";

/// The user's current query against the catalog
///
/// `None` for role or rarity means the selector is on "All".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_term: String,
    pub role: Option<Role>,
    pub rarity: Option<Rarity>,
}

impl FilterCriteria {
    /// Criteria matching every record
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// Build criteria from raw selector strings, where "All" clears a constraint.
    pub fn from_selectors(search_term: &str, role: &str, rarity: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            search_term: search_term.to_string(),
            role: parse_selector(role)?,
            rarity: parse_selector(rarity)?,
        })
    }

    fn matches_with_needle(&self, record: &CharacterRecord, needle: &str) -> bool {
        matches_text(record, needle)
            && self.role.map_or(true, |role| record.role == role)
            && self.rarity.map_or(true, |rarity| record.rarity == rarity)
    }
}

/// Parse a selector value: "All" is `None`, anything else must be a known value.
pub fn parse_selector<T>(value: &str) -> Result<Option<T>, T::Err>
where
    T: FromStr,
{
    if value == ALL_LABEL {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Selector label for an optional category
pub fn selector_label<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| ALL_LABEL.to_string(), |v| v.to_string())
}

// `needle` must already be lowercase
fn matches_text(record: &CharacterRecord, needle: &str) -> bool {
    needle.is_empty()
        || record.name.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}

/// Return the records passing `criteria`, in their original order.
pub fn filter_characters<'a>(
    records: &'a [CharacterRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a CharacterRecord> {
    let needle = criteria.search_term.to_lowercase();
    let visible: Vec<&CharacterRecord> = records
        .iter()
        .filter(|record| criteria.matches_with_needle(record, &needle))
        .collect();

    tracing::debug!(
        search = %criteria.search_term,
        role = ?criteria.role,
        rarity = ?criteria.rarity,
        matched = visible.len(),
        total = records.len(),
        "Filtered catalog"
    );

    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Guide, Stats};

    fn character(id: &str, name: &str, description: &str, role: Role, rarity: Rarity) -> CharacterRecord {
        CharacterRecord {
            id: id.to_string(),
            name: name.to_string(),
            avatar: String::new(),
            description: description.to_string(),
            role,
            rarity,
            stats: Stats::default(),
            abilities: Vec::new(),
            guide: Guide::default(),
            fan_art: Vec::new(),
        }
    }

    fn sample() -> Vec<CharacterRecord> {
        vec![
            character("frost-mage", "Frost Mage", "Freezes enemies solid.", Role::Mage, Rarity::Epic),
            character("iron-guard", "Iron Guard", "Holds the front line.", Role::Tank, Rarity::Common),
            character("shade", "Shade", "A silent blade that hunts MAGES.", Role::Assassin, Rarity::Legendary),
        ]
    }

    fn ids(found: &[&CharacterRecord]) -> Vec<String> {
        found.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn unconstrained_returns_everything_in_order() {
        let catalog = sample();
        let found = filter_characters(&catalog, &FilterCriteria::new());
        assert_eq!(ids(&found), vec!["frost-mage", "iron-guard", "shade"]);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let catalog = sample();
        let found = filter_characters(&catalog, &FilterCriteria::new().with_search("FROST"));
        assert_eq!(ids(&found), vec!["frost-mage"]);
    }

    #[test]
    fn search_matches_description() {
        let catalog = sample();
        let found = filter_characters(&catalog, &FilterCriteria::new().with_search("mage"));
        // "Shade" matches through its description
        assert_eq!(ids(&found), vec!["frost-mage", "shade"]);
    }

    #[test]
    fn search_is_substring_not_token() {
        let catalog = sample();
        let found = filter_characters(&catalog, &FilterCriteria::new().with_search("ont li"));
        assert_eq!(ids(&found), vec!["iron-guard"]);
    }

    #[test]
    fn role_filter_is_exact() {
        let catalog = sample();
        let found = filter_characters(&catalog, &FilterCriteria::new().with_role(Role::Tank));
        assert_eq!(ids(&found), vec!["iron-guard"]);
    }

    #[test]
    fn unused_category_yields_empty() {
        let catalog = sample();
        let found = filter_characters(&catalog, &FilterCriteria::new().with_role(Role::Support));
        assert!(found.is_empty());
    }

    #[test]
    fn predicates_are_conjunctive() {
        let catalog = sample();
        let criteria = FilterCriteria::new()
            .with_role(Role::Mage)
            .with_rarity(Rarity::Legendary);
        assert!(filter_characters(&catalog, &criteria).is_empty());
    }

    #[test]
    fn from_selectors_treats_all_as_unconstrained() {
        let criteria = FilterCriteria::from_selectors("", "All", "All").unwrap();
        assert_eq!(criteria, FilterCriteria::new());

        let criteria = FilterCriteria::from_selectors("x", "DPS", "Rare").unwrap();
        assert_eq!(criteria.role, Some(Role::Dps));
        assert_eq!(criteria.rarity, Some(Rarity::Rare));
    }

    #[test]
    fn from_selectors_rejects_unknown_values() {
        assert!(matches!(
            FilterCriteria::from_selectors("", "Healer", "All"),
            Err(CatalogError::InvalidRole(_))
        ));
        assert!(matches!(
            FilterCriteria::from_selectors("", "All", "all"),
            Err(CatalogError::InvalidRarity(_))
        ));
    }

    #[test]
    fn selector_label_renders_all_for_none() {
        assert_eq!(selector_label::<Role>(None), "All");
        assert_eq!(selector_label(Some(Rarity::Epic)), "Epic");
    }
}
