//! Error types for Character Hub

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No character with the requested id exists in the catalog
    #[error("Character not found: {0}")]
    NotFound(String),

    /// Two records in the same catalog share an id
    #[error("Duplicate character id: {0}")]
    DuplicateId(String),

    /// A record was supplied without an id
    #[error("Character at position {0} has an empty id")]
    EmptyId(usize),

    /// Selector value is neither "All" nor a known role
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Selector value is neither "All" nor a known rarity
    #[error("Invalid rarity: {0}")]
    InvalidRarity(String),

    /// Catalog JSON could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::NotFound("frost-mage".to_string());
        assert_eq!(format!("{}", err), "Character not found: frost-mage");

        let err = CatalogError::EmptyId(3);
        assert_eq!(format!("{}", err), "Character at position 3 has an empty id");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
