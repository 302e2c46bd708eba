//! The character catalog.
//!
//! A catalog is loaded whole, validated once, and then only read. Lookups are
//! linear scans, which is fine for catalogs of tens to hundreds of records.

use std::collections::HashSet;
use std::path::Path;

use serde::Serialize;

use crate::error::{CatalogError, CatalogResult};
use crate::filter::{filter_characters, FilterCriteria};
use crate::types::{CharacterRecord, Rarity, Role};

/// Catalog JSON bundled into the binary
const BUILTIN_CATALOG: &str = include_str!("../data/characters.json");

/// Ordered, read-only collection of characters with unique ids
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<CharacterRecord>,
}

/// Aggregate counts over a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub by_role: Vec<(Role, usize)>,
    pub by_rarity: Vec<(Rarity, usize)>,
    pub total_likes: u64,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids.
    pub fn new(records: Vec<CharacterRecord>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if record.id.is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records })
    }

    /// Parse a JSON array of records.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let records: Vec<CharacterRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!("Loaded {} characters from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> CatalogResult<Self> {
        let catalog = Self::from_json_str(BUILTIN_CATALOG)?;
        tracing::debug!("Loaded built-in catalog ({} characters)", catalog.len());
        Ok(catalog)
    }

    /// Load from `path` when given, otherwise the built-in catalog.
    pub fn load(path: Option<&Path>) -> CatalogResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::builtin(),
        }
    }

    /// All records in catalog order
    pub fn records(&self) -> &[CharacterRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find the record with the given id.
    pub fn get(&self, id: &str) -> Option<&CharacterRecord> {
        let found = self.records.iter().find(|record| record.id == id);
        if found.is_none() {
            tracing::warn!("No character with id '{}'", id);
        }
        found
    }

    /// Like [`Catalog::get`], but absence is a [`CatalogError::NotFound`].
    pub fn require(&self, id: &str) -> CatalogResult<&CharacterRecord> {
        self.get(id).ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Records matching `criteria`, in catalog order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&CharacterRecord> {
        filter_characters(&self.records, criteria)
    }

    pub fn summary(&self) -> CatalogSummary {
        let by_role = Role::ALL
            .into_iter()
            .map(|role| (role, self.records.iter().filter(|r| r.role == role).count()))
            .collect();
        let by_rarity = Rarity::ALL
            .into_iter()
            .map(|rarity| (rarity, self.records.iter().filter(|r| r.rarity == rarity).count()))
            .collect();

        CatalogSummary {
            total: self.records.len(),
            by_role,
            by_rarity,
            total_likes: self.records.iter().map(CharacterRecord::total_likes).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Guide, Stats};

    fn character(id: &str, role: Role, rarity: Rarity) -> CharacterRecord {
        CharacterRecord {
            id: id.to_string(),
            name: id.to_uppercase(),
            avatar: String::new(),
            description: String::new(),
            role,
            rarity,
            stats: Stats::default(),
            abilities: Vec::new(),
            guide: Guide::default(),
            fan_art: Vec::new(),
        }
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        for role in Role::ALL {
            assert!(
                catalog.records().iter().any(|r| r.role == role),
                "built-in catalog has no {}",
                role
            );
        }
    }

    #[test]
    fn rejects_duplicate_ids() {
        let records = vec![
            character("a", Role::Tank, Rarity::Common),
            character("a", Role::Mage, Rarity::Epic),
        ];
        let err = Catalog::new(records).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn rejects_empty_ids() {
        let records = vec![
            character("a", Role::Tank, Rarity::Common),
            character("", Role::Mage, Rarity::Epic),
        ];
        assert!(matches!(Catalog::new(records), Err(CatalogError::EmptyId(1))));
    }

    #[test]
    fn get_finds_by_id() {
        let catalog = Catalog::new(vec![
            character("a", Role::Tank, Rarity::Common),
            character("b", Role::Mage, Rarity::Epic),
        ])
        .unwrap();

        assert_eq!(catalog.get("b").map(|r| r.role), Some(Role::Mage));
        assert!(catalog.get("c").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn require_reports_not_found() {
        let catalog = Catalog::new(vec![character("a", Role::Tank, Rarity::Common)]).unwrap();
        let err = catalog.require("missing").unwrap_err();
        assert_eq!(err.to_string(), "Character not found: missing");
    }

    #[test]
    fn summary_counts_each_category() {
        let catalog = Catalog::new(vec![
            character("a", Role::Tank, Rarity::Common),
            character("b", Role::Tank, Rarity::Epic),
            character("c", Role::Mage, Rarity::Epic),
        ])
        .unwrap();

        let summary = catalog.summary();
        assert_eq!(summary.total, 3);
        assert!(summary.by_role.contains(&(Role::Tank, 2)));
        assert!(summary.by_role.contains(&(Role::Support, 0)));
        assert!(summary.by_rarity.contains(&(Rarity::Epic, 2)));
        assert_eq!(summary.total_likes, 0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Catalog::from_json_str("{"), Err(CatalogError::Parse(_))));
        let bad_role = r#"[{"id":"x","name":"X","description":"","role":"Healer","rarity":"Rare",
            "stats":{"attack":1,"defense":1,"speed":1,"hp":1}}]"#;
        assert!(matches!(Catalog::from_json_str(bad_role), Err(CatalogError::Parse(_))));
    }
}
