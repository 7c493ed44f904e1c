//! # Commands Module
//!
//! Every operation the presentation layer can invoke. Commands are plain
//! functions over state references returning serializable DTOs or
//! [`ApiError`](crate::error::ApiError).
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Categories, listing, detail view
//! ├── cart.rs      ◄─── Cart sessions and manipulation
//! ├── quantity.rs  ◄─── Quantity field clamping
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn list_categories(catalog: &CatalogState)
//!
//! // Needs catalog and config
//! fn list_items(catalog: &CatalogState, config: &StorefrontConfig, ...)
//!
//! // Needs catalog and cart sessions
//! fn add_to_cart(catalog: &CatalogState, carts: &CartState, ...)
//! ```

pub mod cart;
pub mod catalog;
pub mod config;
pub mod quantity;
