//! Catalog context provider for Character Hub.
//!
//! The catalog is loaded once in `main` and shared read-only with every
//! component through Dioxus context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! provide_catalog();
//!
//! // In child components
//! let catalog = use_catalog();
//! let character = catalog.get(&id);
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use herohub_core::Catalog;

/// Shared catalog type for context.
pub type SharedCatalog = Arc<Catalog>;

/// Install the process-wide catalog as context for the component tree.
pub fn provide_catalog() -> SharedCatalog {
    use_context_provider(crate::get_catalog)
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> SharedCatalog {
    use_context::<SharedCatalog>()
}
