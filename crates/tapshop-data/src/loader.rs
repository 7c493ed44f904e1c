//! # Catalog Loader
//!
//! Reads catalog documents from the embedded dataset or from disk.
//!
//! ## Load Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  --catalog PATH / TAPSHOP_CATALOG_PATH / config [catalog] path          │
//! │       │                                                                 │
//! │       ├── None ─────────► EMBEDDED_CATALOG (include_str!)              │
//! │       │                         │                                       │
//! │       └── Some(path) ──► fs::read_to_string                            │
//! │                │                │                                       │
//! │                ▼                ▼                                       │
//! │         CatalogFormat::from_path   parse (serde_json / toml)           │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                       CatalogDocument::into_catalog                     │
//! │                         • warn: image != images[0]                      │
//! │                         • Catalog::new integrity checks                 │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                          Catalog (immutable)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Document Shape
//! ```json
//! {
//!   "categories": [{ "id": "business", "name": "Business Cards", "description": "..." }],
//!   "items": [{ "id": "nfc-pro-business-1", "priceCents": 2999, "inStock": true, ... }]
//! }
//! ```
//! An item may give `"price": 29.99` in dollars instead of `priceCents`; it is
//! rounded to the nearest cent. When both are present `priceCents` wins.
//!
//! TOML documents use `[[categories]]` and `[[items]]` tables with the same
//! keys.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tapshop_core::{Badge, Catalog, Category, Item, Money};
use tracing::{debug, info, warn};

use crate::error::{DataError, DataResult};

/// The reference dataset: 5 categories, 16 items.
pub const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

// =============================================================================
// Document
// =============================================================================

/// Raw catalog document, before integrity checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

/// One item as written in a document.
///
/// Same keys as [`Item`], except the price may be given either as
/// `priceCents` or as a decimal `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_cents: Option<i64>,

    /// Dollars, e.g. `29.99`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    pub image: String,
    pub images: Vec<String>,
    pub rating: f64,

    #[serde(default)]
    pub badge: Badge,

    pub category: String,
    pub short_desc: String,
    pub full_desc: String,
    pub in_stock: bool,
}

impl ItemRecord {
    /// Resolves the price and produces the domain item.
    pub fn into_item(self) -> DataResult<Item> {
        let price_cents = match (self.price_cents, self.price) {
            (Some(cents), _) => cents,
            (None, Some(dollars)) => Money::from_decimal(dollars)
                .ok_or_else(|| DataError::InvalidPrice {
                    item_id: self.id.clone(),
                    value: dollars,
                })?
                .cents(),
            (None, None) => {
                return Err(DataError::MissingPrice {
                    item_id: self.id.clone(),
                })
            }
        };

        Ok(Item {
            id: self.id,
            name: self.name,
            price_cents,
            image: self.image,
            images: self.images,
            rating: self.rating,
            badge: self.badge,
            category: self.category,
            short_desc: self.short_desc,
            full_desc: self.full_desc,
            in_stock: self.in_stock,
        })
    }
}

// =============================================================================
// Format
// =============================================================================

/// On-disk catalog encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Picks the format from the extension (case-insensitive).
    pub fn from_path(path: &Path) -> DataResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(CatalogFormat::Json),
            "toml" => Ok(CatalogFormat::Toml),
            _ => Err(DataError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn parse(self, text: &str) -> DataResult<CatalogDocument> {
        match self {
            CatalogFormat::Json => CatalogDocument::from_json(text),
            CatalogFormat::Toml => CatalogDocument::from_toml(text),
        }
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Loads the embedded reference dataset.
pub fn load_embedded() -> DataResult<Catalog> {
    debug!("Loading embedded catalog");
    parse_json(EMBEDDED_CATALOG)
}

/// Loads a catalog file, choosing JSON or TOML by extension.
pub fn load_from_path(path: &Path) -> DataResult<Catalog> {
    let format = CatalogFormat::from_path(path)?;
    info!(path = %path.display(), format = ?format, "Loading catalog file");

    let text = fs::read_to_string(path).map_err(|source| DataError::io(path, source))?;
    format.parse(&text)?.into_catalog()
}

/// Loads `path` when given, otherwise the embedded dataset.
pub fn load(path: Option<&Path>) -> DataResult<Catalog> {
    match path {
        Some(path) => load_from_path(path),
        None => load_embedded(),
    }
}

/// Parses and validates a JSON catalog document.
pub fn parse_json(text: &str) -> DataResult<Catalog> {
    CatalogDocument::from_json(text)?.into_catalog()
}

/// Parses and validates a TOML catalog document.
pub fn parse_toml(text: &str) -> DataResult<Catalog> {
    CatalogDocument::from_toml(text)?.into_catalog()
}

// =============================================================================
// Unit Tests
// =============================================================================
