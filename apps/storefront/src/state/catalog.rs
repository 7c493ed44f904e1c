//! # Catalog State
//!
//! Shared handle to the loaded catalog. The catalog never changes after
//! startup, so readers need no lock.

use std::sync::Arc;

use tapshop_core::Catalog;

/// Read-only catalog shared by every command.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState {
            catalog: Arc::new(catalog),
        }
    }

    /// The catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
