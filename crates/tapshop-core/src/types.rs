//! # Domain Types
//!
//! Catalog records shared by every layer of the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────────┐               │
//! │  │    Category     │◄───────│          Item            │               │
//! │  │  ─────────────  │  1..n  │  ──────────────────────  │               │
//! │  │  id (slug)      │        │  id (slug)               │               │
//! │  │  name           │        │  price_cents             │               │
//! │  │  description    │        │  rating (0.0 - 5.0)      │               │
//! │  └─────────────────┘        │  badge (NEW/POPULAR/"")  │               │
//! │                             │  category ──► Category.id│               │
//! │                             │  image, images[]         │               │
//! │                             │  in_stock                │               │
//! │                             └──────────────────────────┘               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Records are immutable once a [`Catalog`](crate::Catalog) is built.
//! Field names serialize as camelCase (`priceCents`, `shortDesc`, `inStock`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// A named grouping that partitions items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    /// Unique slug, e.g. `"business"`.
    pub id: String,

    /// Display name, e.g. `"Business Cards"`.
    pub name: String,

    pub description: String,
}

// =============================================================================
// Badge
// =============================================================================

/// Merchandising tag shown on item cards.
///
/// The badge never filters anything; it only decides the first tier of the
/// `popularity` sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Badge {
    #[serde(rename = "NEW")]
    New,

    #[serde(rename = "POPULAR")]
    Popular,

    /// No badge (serialized as an empty string).
    #[default]
    #[serde(rename = "")]
    None,
}

impl Badge {
    /// Returns the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Badge::New => "NEW",
            Badge::Popular => "POPULAR",
            Badge::None => "",
        }
    }

    #[inline]
    pub fn is_popular(&self) -> bool {
        matches!(self, Badge::Popular)
    }
}

impl std::fmt::Display for Badge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Item
// =============================================================================

/// A single purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Unique slug, e.g. `"nfc-pro-business-1"`.
    pub id: String,

    pub name: String,

    /// Price in cents (never negative).
    pub price_cents: i64,

    /// Primary image, used on listing cards.
    pub image: String,

    /// Gallery images for the detail view. Never empty; the first entry is
    /// conventionally the primary image.
    pub images: Vec<String>,

    /// Average rating in `[0, 5]`.
    pub rating: f64,

    #[serde(default)]
    pub badge: Badge,

    /// Id of the owning [`Category`].
    pub category: String,

    pub short_desc: String,

    pub full_desc: String,

    pub in_stock: bool,
}

impl Item {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether the item may be added to a cart.
    ///
    /// The cart engine does not check stock itself; callers consult this
    /// before invoking an add.
    #[inline]
    pub fn can_add_to_cart(&self) -> bool {
        self.in_stock
    }

    /// Star breakdown for this item's rating.
    pub fn stars(&self) -> [StarFill; 5] {
        rating_stars(self.rating)
    }
}

// =============================================================================
// Rating Display
// =============================================================================

/// Highest possible rating.
pub const MAX_RATING: f64 = 5.0;

/// Fill state of one star in a five-star rating row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StarFill {
    Full,
    Half,
    Empty,
}

/// Splits a rating into five star fills.
///
/// The rating is clamped to `[0, 5]` first. Star `k` (1-based) is full when
/// `k <= rating`, half when `k - 0.5 <= rating < k`, otherwise empty.
///
/// ```rust
/// use tapshop_core::types::{rating_stars, StarFill::*};
///
/// assert_eq!(rating_stars(3.5), [Full, Full, Full, Half, Empty]);
/// ```
pub fn rating_stars(rating: f64) -> [StarFill; 5] {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    };

    std::array::from_fn(|index| {
        let star = (index + 1) as f64;
        if star <= rating {
            StarFill::Full
        } else if star - 0.5 <= rating {
            StarFill::Half
        } else {
            StarFill::Empty
        }
    })
}

/// Formats a rating with one decimal place, e.g. `4.8`.
pub fn format_rating(rating: f64) -> String {
    let rating = if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    };
    format!("{:.1}", rating)
}

// =============================================================================
// Unit Tests
// =============================================================================
