//! # tapshop-core: Pure Storefront Logic
//!
//! Catalog store, query engine and cart state machine for the Tapshop NFC
//! card storefront. Everything here is a pure function of its inputs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tapshop Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 tapshop CLI (apps/storefront)                   │   │
//! │  │    categories ──► list ──► show ──► stage (cart)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands + session state               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tapshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   query   │  │   cart    │  │ quantity  │  │   │
//! │  │   │  lookups  │  │  filter   │  │   add     │  │  1 - 10   │  │   │
//! │  │   │  related  │  │   sort    │  │  remove   │  │   clamp   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              tapshop-data (catalog documents)                   │   │
//! │  │           embedded dataset, JSON / TOML loading                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Category, Item, Badge, rating stars
//! - [`catalog`] - Validated, indexed catalog with lookups
//! - [`query`] - Category filter plus sort modes
//! - [`cart`] - Cart quantities and transitions
//! - [`quantity`] - The 1-10 selected quantity
//! - [`gallery`] - Detail view image selection
//! - [`money`] - Integer cents
//! - [`validation`] - Field rules applied at catalog build
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tapshop_core::{clamp_quantity, Cart};
//!
//! let mut cart = Cart::new();
//! cart.add("nfc-pro-business-1", clamp_quantity(15));
//! assert_eq!(cart.total_count(), 10);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod gallery;
pub mod money;
pub mod quantity;
pub mod query;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartAction};
pub use catalog::{Catalog, CategoryCount};
pub use error::{CoreError, CoreResult, ValidationError};
pub use gallery::ImageGallery;
pub use money::Money;
pub use quantity::{clamp_quantity, SelectedQuantity, MAX_SELECTED_QUANTITY, MIN_SELECTED_QUANTITY};
pub use query::{query, CatalogQuery, QuerySummary, SortMode};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum related items shown under a detail view.
pub const RELATED_ITEMS_LIMIT: usize = 4;
