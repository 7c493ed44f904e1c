//! # State Module
//!
//! Application state for the storefront, split into focused types so each
//! command takes only what it needs.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌────────────────────┐  ┌──────────────────────┐    │
//! │  │ CatalogState │  │     CartState      │  │  StorefrontConfig    │    │
//! │  │              │  │                    │  │                      │    │
//! │  │  Arc<        │  │  Arc<Mutex<        │  │  catalog.path        │    │
//! │  │    Catalog   │  │    HashMap<Uuid,   │  │  browse.default_sort │    │
//! │  │  >           │  │      CartSession>  │  │  browse.related_limit│    │
//! │  │              │  │  >>                │  │                      │    │
//! │  └──────────────┘  └────────────────────┘  └──────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: immutable after load, shared by Arc                   │
//! │  • CartState: one Mutex serializes every cart read-modify-write        │
//! │  • StorefrontConfig: read-only after startup                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::{CartSession, CartState};
pub use catalog::CatalogState;
pub use config::{BrowseSettings, CatalogSettings, StorefrontConfig};
