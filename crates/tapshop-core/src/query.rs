//! # Query Engine
//!
//! Turns the catalog plus the shopper's filter and sort choice into the exact
//! ordered list shown on the listing page.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Catalog (insertion order)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. FILTER   category == selected   (empty selection keeps all)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. SORT     stable, by SortMode                                       │
//! │       │        price-asc    price ↑                                    │
//! │       │        price-desc   price ↓                                    │
//! │       │        rating       rating ↓                                   │
//! │       │        popularity   POPULAR first, then rating ↓   (default)   │
//! │       │        catalog-order  unchanged                                │
//! │       ▼                                                                 │
//! │  Vec<&Item>  (new sequence; the catalog is never touched)              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ties keep their catalog order because `sort_by` is stable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::types::Item;

// =============================================================================
// Sort Mode
// =============================================================================

/// Ordering applied to a filtered item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case", try_from = "String")]
#[ts(export)]
pub enum SortMode {
    /// Cheapest first.
    PriceAsc,

    /// Most expensive first.
    PriceDesc,

    /// Highest rated first.
    Rating,

    /// `POPULAR` badge first, then highest rated first within each tier.
    #[default]
    Popularity,

    /// No reordering. Unrecognized sort parameters land here.
    CatalogOrder,
}

impl SortMode {
    /// Modes offered in the sort picker, in display order.
    pub const ALL: [SortMode; 4] = [
        SortMode::Popularity,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::Rating,
    ];

    /// Maps a request parameter to a mode.
    ///
    /// Total: an unknown name gives [`SortMode::CatalogOrder`], so a bad query
    /// string shows the list unsorted instead of failing.
    ///
    /// ```rust
    /// use tapshop_core::SortMode;
    ///
    /// assert_eq!(SortMode::from_param("price-asc"), SortMode::PriceAsc);
    /// assert_eq!(SortMode::from_param("newest"), SortMode::CatalogOrder);
    /// ```
    pub fn from_param(param: &str) -> Self {
        param.parse().unwrap_or(SortMode::CatalogOrder)
    }

    /// The wire name (`"price-asc"`, `"popularity"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::Rating => "rating",
            SortMode::Popularity => "popularity",
            SortMode::CatalogOrder => "catalog-order",
        }
    }

    /// Label for the sort picker.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::Rating => "Highest Rated",
            SortMode::Popularity => "Most Popular",
            SortMode::CatalogOrder => "Featured",
        }
    }

    /// Stable-sorts `items` in place. `CatalogOrder` leaves them untouched.
    fn sort(self, items: &mut [&Item]) {
        match self {
            SortMode::PriceAsc => items.sort_by(|a, b| a.price_cents.cmp(&b.price_cents)),
            SortMode::PriceDesc => items.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
            SortMode::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortMode::Popularity => items.sort_by(|a, b| {
                popularity_tier(a)
                    .cmp(&popularity_tier(b))
                    .then_with(|| b.rating.total_cmp(&a.rating))
            }),
            SortMode::CatalogOrder => {}
        }
    }
}

/// Primary key of the popularity sort: 0 for `POPULAR`, 1 otherwise.
fn popularity_tier(item: &Item) -> u8 {
    if item.badge.is_popular() {
        0
    } else {
        1
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing, used for configuration values.
impl FromStr for SortMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "price-asc" => Ok(SortMode::PriceAsc),
            "price-desc" => Ok(SortMode::PriceDesc),
            "rating" => Ok(SortMode::Rating),
            "popularity" => Ok(SortMode::Popularity),
            "catalog-order" => Ok(SortMode::CatalogOrder),
            _ => Err(ValidationError::NotAllowed {
                field: "sort".to_string(),
                allowed: [
                    "price-asc",
                    "price-desc",
                    "rating",
                    "popularity",
                    "catalog-order",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            }),
        }
    }
}

impl TryFrom<String> for SortMode {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// =============================================================================
// Query
// =============================================================================

/// Filters by category, then stable-sorts by `sort`.
///
/// An empty `selected_category` keeps every item. A category id that does
/// not exist yields an empty list.
///
/// ```rust
/// use tapshop_core::{query, Catalog, SortMode};
///
/// let catalog = Catalog::default();
/// assert!(query(&catalog, "", SortMode::Popularity).is_empty());
/// ```
pub fn query<'a>(catalog: &'a Catalog, selected_category: &str, sort: SortMode) -> Vec<&'a Item> {
    let mut results: Vec<&Item> = if selected_category.is_empty() {
        catalog.items().iter().collect()
    } else {
        catalog.items_by_category(selected_category)
    };

    sort.sort(&mut results);

    results
}

/// The shopper's current filter and sort selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogQuery {
    /// Selected category id; `None` shows all categories.
    pub category: Option<String>,

    pub sort: SortMode,
}

impl CatalogQuery {
    /// Builds a query from raw request parameters.
    ///
    /// An empty or whitespace category means "all"; the sort parameter goes
    /// through [`SortMode::from_param`].
    pub fn from_params(category: &str, sort: &str) -> Self {
        let category = category.trim();
        CatalogQuery {
            category: (!category.is_empty()).then(|| category.to_string()),
            sort: SortMode::from_param(sort),
        }
    }

    /// Chip-filter click on `category_id`.
    ///
    /// ```text
    /// selected: None        click "social"  → Some("social")
    /// selected: "social"    click "social"  → None          (deselect)
    /// selected: "social"    click "smart"   → Some("smart")
    /// ```
    pub fn toggle_category(&mut self, category_id: &str) {
        if self.category.as_deref() == Some(category_id) {
            self.category = None;
        } else {
            self.category = Some(category_id.to_string());
        }
    }

    /// The "All" chip.
    pub fn clear_category(&mut self) {
        self.category = None;
    }

    /// Runs the query against a catalog.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Item> {
        query(catalog, self.category.as_deref().unwrap_or(""), self.sort)
    }

    /// Result line for a finished query.
    pub fn summarize(&self, catalog: &Catalog, shown: usize) -> QuerySummary {
        QuerySummary {
            shown,
            total: catalog.len(),
            category_name: self
                .category
                .as_deref()
                .and_then(|id| catalog.get_category(id))
                .map(|category| category.name.clone()),
        }
    }
}

// =============================================================================
// Summary
// =============================================================================

/// Counts shown above the result grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QuerySummary {
    /// Items in the filtered result.
    pub shown: usize,

    /// Items in the whole catalog.
    pub total: usize,

    /// Name of the selected category, when it exists.
    pub category_name: Option<String>,
}

impl fmt::Display for QuerySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} products", self.shown, self.total)?;
        if let Some(name) = &self.category_name {
            write!(f, " in {}", name)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{abc_catalog, category, item, sample_catalog};
    use crate::types::Badge;

    fn ids<'a>(items: &[&'a Item]) -> Vec<&'a str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_abc_popularity() {
        let catalog = abc_catalog();
        assert_eq!(ids(&query(&catalog, "x", SortMode::Popularity)), ["B", "C", "A"]);
    }

    #[test]
    fn test_abc_price_asc() {
        let catalog = abc_catalog();
        assert_eq!(ids(&query(&catalog, "x", SortMode::PriceAsc)), ["B", "A", "C"]);
    }

    #[test]
    fn test_abc_other_modes() {
        let catalog = abc_catalog();
        assert_eq!(ids(&query(&catalog, "x", SortMode::PriceDesc)), ["C", "A", "B"]);
        assert_eq!(ids(&query(&catalog, "x", SortMode::Rating)), ["C", "B", "A"]);
        assert_eq!(ids(&query(&catalog, "x", SortMode::CatalogOrder)), ["A", "B", "C"]);
    }

    #[test]
    fn test_filter_only_selected_category() {
        let catalog = sample_catalog();
        for mode in SortMode::ALL {
            let results = query(&catalog, "business", mode);
            assert_eq!(results.len(), 3);
            assert!(results.iter().all(|item| item.category == "business"));
        }
    }

    #[test]
    fn test_empty_selection_returns_all() {
        let catalog = sample_catalog();
        let results = query(&catalog, "", SortMode::CatalogOrder);
        let expected: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids(&results), expected);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = sample_catalog();
        assert!(query(&catalog, "does-not-exist", SortMode::Popularity).is_empty());
        assert!(query(&catalog, "empty", SortMode::Popularity).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(query(&catalog, "", SortMode::Rating).is_empty());
    }

    #[test]
    fn test_sorts_are_stable_on_ties() {
        let catalog = Catalog::new(
            vec![category("x")],
            vec![
                item("p1", "x", 1000, 4.0, Badge::None),
                item("p2", "x", 500, 4.0, Badge::Popular),
                item("p3", "x", 1000, 4.0, Badge::None),
                item("p4", "x", 500, 4.0, Badge::Popular),
            ],
        )
        .unwrap();

        assert_eq!(ids(&query(&catalog, "", SortMode::PriceAsc)), ["p2", "p4", "p1", "p3"]);
        assert_eq!(ids(&query(&catalog, "", SortMode::PriceDesc)), ["p1", "p3", "p2", "p4"]);
        assert_eq!(ids(&query(&catalog, "", SortMode::Rating)), ["p1", "p2", "p3", "p4"]);
        assert_eq!(ids(&query(&catalog, "", SortMode::Popularity)), ["p2", "p4", "p1", "p3"]);
    }

    #[test]
    fn test_popularity_tiers_and_rating_order() {
        let catalog = sample_catalog();
        let results = query(&catalog, "", SortMode::Popularity);

        for pair in results.windows(2) {
            let (x, y) = (pair[0], pair[1]);
            assert!(!(y.badge.is_popular() && !x.badge.is_popular()));
            if x.badge.is_popular() == y.badge.is_popular() {
                assert!(x.rating >= y.rating);
            }
        }
        assert_eq!(results[0].id, "metal");
    }

    #[test]
    fn test_sorted_orders_hold() {
        let catalog = sample_catalog();

        let asc = query(&catalog, "", SortMode::PriceAsc);
        assert!(asc.windows(2).all(|w| w[0].price_cents <= w[1].price_cents));

        let desc = query(&catalog, "", SortMode::PriceDesc);
        assert!(desc.windows(2).all(|w| w[0].price_cents >= w[1].price_cents));

        let rating = query(&catalog, "", SortMode::Rating);
        assert!(rating.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_query_is_idempotent() {
        let catalog = sample_catalog();
        for mode in SortMode::ALL {
            assert_eq!(query(&catalog, "", mode), query(&catalog, "", mode));
        }
        let before: Vec<String> = catalog.items().iter().map(|i| i.id.clone()).collect();
        let _ = query(&catalog, "", SortMode::PriceAsc);
        let after: Vec<String> = catalog.items().iter().map(|i| i.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_mode_params() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_param(mode.as_str()), mode);
        }
        assert_eq!(SortMode::from_param(""), SortMode::CatalogOrder);
        assert_eq!(SortMode::from_param("price_asc"), SortMode::CatalogOrder);
        assert_eq!(SortMode::default(), SortMode::Popularity);
    }

    #[test]
    fn test_sort_mode_strict_parse() {
        assert_eq!("Rating".parse::<SortMode>().unwrap(), SortMode::Rating);
        assert!("newest".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_sort_mode_serde() {
        assert_eq!(
            serde_json::to_string(&SortMode::PriceDesc).unwrap(),
            "\"price-desc\""
        );
        let mode: SortMode = serde_json::from_str("\"popularity\"").unwrap();
        assert_eq!(mode, SortMode::Popularity);

        // Same spellings as FromStr
        let mode: SortMode = serde_json::from_str("\" Price-Asc \"").unwrap();
        assert_eq!(mode, SortMode::PriceAsc);
        assert!(serde_json::from_str::<SortMode>("\"newest\"").is_err());
    }

    #[test]
    fn test_catalog_query_from_params() {
        let q = CatalogQuery::from_params("", "rating");
        assert_eq!(q.category, None);
        assert_eq!(q.sort, SortMode::Rating);

        let q = CatalogQuery::from_params(" social ", "bogus");
        assert_eq!(q.category.as_deref(), Some("social"));
        assert_eq!(q.sort, SortMode::CatalogOrder);
    }

    #[test]
    fn test_toggle_category() {
        let mut q = CatalogQuery::default();
        q.toggle_category("social");
        assert_eq!(q.category.as_deref(), Some("social"));
        q.toggle_category("smart");
        assert_eq!(q.category.as_deref(), Some("smart"));
        q.toggle_category("smart");
        assert_eq!(q.category, None);

        q.toggle_category("social");
        q.clear_category();
        assert_eq!(q.category, None);
    }

    #[test]
    fn test_summary() {
        let catalog = sample_catalog();

        let q = CatalogQuery::from_params("business", "popularity");
        let results = q.run(&catalog);
        let summary = q.summarize(&catalog, results.len());
        assert_eq!(summary.to_string(), "Showing 3 of 6 products in Category business");

        let q = CatalogQuery::default();
        let summary = q.summarize(&catalog, q.run(&catalog).len());
        assert_eq!(summary.to_string(), "Showing 6 of 6 products");

        let q = CatalogQuery::from_params("ghost", "");
        let summary = q.summarize(&catalog, q.run(&catalog).len());
        assert_eq!(summary.shown, 0);
        assert_eq!(summary.category_name, None);
    }
}
