//! # tapshop-data: Catalog Loading for Tapshop
//!
//! Owns every byte of catalog I/O. The core crate never touches files; it
//! receives an already-built [`Catalog`] from here.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tapshop Data Flow                                │
//! │                                                                         │
//! │  storefront startup (config resolved)                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  tapshop-data (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────────┐        ┌──────────────────────────┐   │   │
//! │  │   │   loader.rs        │        │   data/catalog.json      │   │   │
//! │  │   │   JSON / TOML      │◄───────│   (include_str!)         │   │   │
//! │  │   │   CatalogDocument  │        │   5 categories, 16 items │   │   │
//! │  │   └────────────────────┘        └──────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tapshop_core::Catalog (validated, read-only)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! let catalog = tapshop_data::load_embedded().unwrap();
//! assert!(catalog.get_item("nfc-pro-business-1").is_some());
//! ```
//!
//! [`Catalog`]: tapshop_core::Catalog

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod loader;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DataError, DataResult};
pub use loader::{
    load, load_embedded, load_from_path, parse_json, parse_toml, CatalogDocument, CatalogFormat,
    ItemRecord, EMBEDDED_CATALOG,
};
