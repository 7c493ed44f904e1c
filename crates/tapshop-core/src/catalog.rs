//! # Catalog Store
//!
//! Immutable, in-memory collection of categories and items.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Vec<Category> + Vec<Item>                                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Catalog::new() ── field validation ── unique ids ── category refs     │
//! │         │                     │                                         │
//! │         │                     └── any failure ──► Err(CoreError)        │
//! │         ▼                                                               │
//! │  Catalog (read-only for the life of the process)                       │
//! │    • get_item / get_category       O(1) via id index                   │
//! │    • items_by_category             O(n), insertion order               │
//! │    • in_stock_items                O(n), insertion order               │
//! │    • related_items                 O(n), insertion order, capped       │
//! │    • category_counts               O(n), one grouping pass             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::types::{Category, Item};
use crate::validation::{validate_category, validate_item};

/// The validated catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: Vec<Category>,
    items: Vec<Item>,
    category_index: HashMap<String, usize>,
    item_index: HashMap<String, usize>,
}

/// Number of items in one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryCount<'a> {
    pub category: &'a Category,
    pub count: usize,
}

impl Catalog {
    /// Builds a catalog, rejecting it as a whole on any integrity failure.
    ///
    /// ## Checks (in order)
    /// 1. Every category passes field validation and has a unique id
    /// 2. Every item passes field validation and has a unique id
    /// 3. Every item's category resolves (`CoreError::InvalidReference`)
    pub fn new(categories: Vec<Category>, items: Vec<Item>) -> CoreResult<Self> {
        let mut category_index = HashMap::with_capacity(categories.len());
        for (position, category) in categories.iter().enumerate() {
            validate_category(category).map_err(|source| CoreError::InvalidCategory {
                category_id: category.id.clone(),
                source,
            })?;

            if category_index.insert(category.id.clone(), position).is_some() {
                return Err(CoreError::DuplicateCategory(category.id.clone()));
            }
        }

        let mut item_index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            validate_item(item).map_err(|source| CoreError::InvalidItem {
                item_id: item.id.clone(),
                source,
            })?;

            if item_index.insert(item.id.clone(), position).is_some() {
                return Err(CoreError::DuplicateItem(item.id.clone()));
            }

            if !category_index.contains_key(&item.category) {
                return Err(CoreError::InvalidReference {
                    item_id: item.id.clone(),
                    category_id: item.category.clone(),
                });
            }
        }

        Ok(Catalog {
            categories,
            items,
            category_index,
            item_index,
        })
    }

    /// All categories, in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by id.
    pub fn get_item(&self, id: &str) -> Option<&Item> {
        self.item_index.get(id).map(|&position| &self.items[position])
    }

    /// Looks up a category by id.
    pub fn get_category(&self, id: &str) -> Option<&Category> {
        self.category_index
            .get(id)
            .map(|&position| &self.categories[position])
    }

    /// The category an item belongs to.
    ///
    /// Always `Some` for items taken from this catalog.
    pub fn category_of(&self, item: &Item) -> Option<&Category> {
        self.get_category(&item.category)
    }

    /// Items in one category, in catalog order.
    ///
    /// Unknown category ids yield an empty list.
    pub fn items_by_category(&self, category_id: &str) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category == category_id)
            .collect()
    }

    /// Items currently in stock, in catalog order.
    pub fn in_stock_items(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.in_stock).collect()
    }

    /// Other items from the same category, in catalog order, at most `limit`.
    ///
    /// ## User Workflow
    /// ```text
    /// Detail page: "Premium Metal Card" (business)
    ///      │
    ///      ▼
    /// related_items(item, 4) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// "Related Products": Classic White, Matte Black   (self excluded)
    /// ```
    pub fn related_items(&self, item: &Item, limit: usize) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|other| other.category == item.category && other.id != item.id)
            .take(limit)
            .collect()
    }

    /// Item count per category, in category order, zero counts included.
    pub fn category_counts(&self) -> Vec<CategoryCount<'_>> {
        let mut counts = vec![0usize; self.categories.len()];
        for item in &self.items {
            if let Some(&position) = self.category_index.get(&item.category) {
                counts[position] += 1;
            }
        }

        self.categories
            .iter()
            .zip(counts)
            .map(|(category, count)| CategoryCount { category, count })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::test_support::{category, item, sample_catalog};
    use crate::types::Badge;

    #[test]
    fn test_lookup_by_id() {
        let catalog = sample_catalog();

        let item = catalog.get_item("metal").unwrap();
        assert_eq!(item.name, "Item metal");
        assert_eq!(catalog.get_category("social").unwrap().name, "Category social");

        assert!(catalog.get_item("missing-id").is_none());
        assert!(catalog.get_category("missing-id").is_none());
    }

    #[test]
    fn test_items_by_category_preserves_order() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog
            .items_by_category("business")
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, ["metal", "classic", "black"]);

        assert!(catalog.items_by_category("nope").is_empty());
    }

    #[test]
    fn test_in_stock_items() {
        let catalog = sample_catalog();
        let in_stock = catalog.in_stock_items();
        assert_eq!(in_stock.len(), catalog.len() - 1);
        assert!(in_stock.iter().all(|item| item.in_stock));
        assert!(!in_stock.iter().any(|item| item.id == "office"));
    }

    #[test]
    fn test_related_items_excludes_self() {
        let catalog = sample_catalog();
        let metal = catalog.get_item("metal").unwrap();

        let related: Vec<&str> = catalog
            .related_items(metal, 4)
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(related, ["classic", "black"]);

        assert_eq!(catalog.related_items(metal, 1).len(), 1);
        assert!(catalog.related_items(metal, 0).is_empty());
    }

    #[test]
    fn test_related_items_capped_at_limit() {
        let categories = vec![category("x")];
        let items = (0..7)
            .map(|n| item(&format!("i{n}"), "x", 100, 4.0, Badge::None))
            .collect();
        let catalog = Catalog::new(categories, items).unwrap();

        let first = catalog.get_item("i3").unwrap();
        let related = catalog.related_items(first, 4);
        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|other| other.id != "i3"));
        assert!(related.iter().all(|other| other.category == "x"));
    }

    #[test]
    fn test_category_counts() {
        let catalog = sample_catalog();
        let counts: Vec<(&str, usize)> = catalog
            .category_counts()
            .iter()
            .map(|c| (c.category.id.as_str(), c.count))
            .collect();
        assert_eq!(
            counts,
            [("business", 3), ("social", 2), ("smart", 1), ("empty", 0)]
        );

        for count in catalog.category_counts() {
            assert_eq!(count.count, catalog.items_by_category(&count.category.id).len());
        }
    }

    #[test]
    fn test_invalid_reference_rejected() {
        let result = Catalog::new(
            vec![category("business")],
            vec![item("wallet", "accessories", 4599, 4.5, Badge::None)],
        );
        match result {
            Err(CoreError::InvalidReference {
                item_id,
                category_id,
            }) => {
                assert_eq!(item_id, "wallet");
                assert_eq!(category_id, "accessories");
            }
            other => panic!("expected InvalidReference, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![category("x"), category("x")], vec![]);
        assert!(matches!(result, Err(CoreError::DuplicateCategory(id)) if id == "x"));

        let result = Catalog::new(
            vec![category("x")],
            vec![
                item("a", "x", 100, 4.0, Badge::None),
                item("a", "x", 200, 3.0, Badge::None),
            ],
        );
        assert!(matches!(result, Err(CoreError::DuplicateItem(id)) if id == "a"));
    }

    #[test]
    fn test_invalid_fields_rejected() {
        let mut bad = item("a", "x", 100, 4.0, Badge::None);
        bad.rating = 6.0;
        let result = Catalog::new(vec![category("x")], vec![bad]);
        assert!(matches!(
            result,
            Err(CoreError::InvalidItem {
                source: ValidationError::OutOfRange { .. },
                ..
            })
        ));

        let mut bad = item("a", "x", 100, 4.0, Badge::None);
        bad.images.clear();
        let result = Catalog::new(vec![category("x")], vec![bad]);
        assert!(matches!(result, Err(CoreError::InvalidItem { .. })));

        let mut bad_category = category("x");
        bad_category.name = String::new();
        let result = Catalog::new(vec![bad_category], vec![]);
        assert!(matches!(result, Err(CoreError::InvalidCategory { .. })));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(vec![], vec![]).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.category_counts().is_empty());
        assert!(catalog.in_stock_items().is_empty());
    }
}
