//! # Catalog Commands
//!
//! Browsing: category chips, the listing grid and the detail view.
//!
//! ## Listing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Listing Page Flow                                    │
//! │                                                                         │
//! │  Shopper clicks chip "Social Cards", picks "Price: Low to High"        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  list_items(category = "social", sort = "price-asc")                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogQuery::from_params ── unknown sort → catalog order             │
//! │       │                       missing sort → configured default        │
//! │       ▼                                                                 │
//! │  CatalogQuery::run (filter, then stable sort)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ItemListResponse { items, summary: "Showing 4 of 16 products in ..." }│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tapshop_core::{
    format_rating, Badge, CatalogQuery, Category, ImageGallery, Item, QuerySummary, SortMode,
    StarFill,
};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CatalogState, StorefrontConfig};

// =============================================================================
// DTOs
// =============================================================================

/// Category as shown in navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    pub description: String,
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        CategoryDto {
            id: c.id.clone(),
            name: c.name.clone(),
            description: c.description.clone(),
        }
    }
}

/// One filter chip with its item count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub id: String,
    pub label: String,
    pub count: usize,
}

/// Item card for grids and related-item rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummaryDto {
    pub id: String,
    pub name: String,
    pub price_cents: i64,
    /// Display price, e.g. `"$29.99"`
    pub price: String,
    pub image: String,
    pub rating: f64,
    /// One decimal place, e.g. `"4.8"`
    pub rating_text: String,
    pub stars: [StarFill; 5],
    pub badge: Badge,
    pub category: String,
    pub short_desc: String,
    pub in_stock: bool,
}

impl From<&Item> for ItemSummaryDto {
    fn from(item: &Item) -> Self {
        ItemSummaryDto {
            id: item.id.clone(),
            name: item.name.clone(),
            price_cents: item.price_cents,
            price: item.price().to_string(),
            image: item.image.clone(),
            rating: item.rating,
            rating_text: format_rating(item.rating),
            stars: item.stars(),
            badge: item.badge,
            category: item.category.clone(),
            short_desc: item.short_desc.clone(),
            in_stock: item.in_stock,
        }
    }
}

/// Filtered, sorted listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemListResponse {
    pub category: Option<String>,
    pub sort: SortMode,
    pub items: Vec<ItemSummaryDto>,
    pub summary: QuerySummary,
    /// Rendered summary line
    pub summary_text: String,
}

/// Gallery thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailDto {
    pub index: usize,
    pub image: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDto {
    pub selected_index: usize,
    pub current: String,
    pub thumbnails: Vec<ThumbnailDto>,
}

impl From<&ImageGallery<'_>> for GalleryDto {
    fn from(gallery: &ImageGallery<'_>) -> Self {
        GalleryDto {
            selected_index: gallery.selected_index(),
            current: gallery.current().to_string(),
            thumbnails: gallery
                .thumbnails()
                .map(|(index, image, selected)| ThumbnailDto {
                    index,
                    image: image.to_string(),
                    selected,
                })
                .collect(),
        }
    }
}

/// Everything the detail page renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetailDto {
    pub item: ItemSummaryDto,
    pub full_desc: String,
    pub category: CategoryDto,
    pub gallery: GalleryDto,
    pub can_add_to_cart: bool,
    pub related: Vec<ItemSummaryDto>,
}

// =============================================================================
// Commands
// =============================================================================

/// Lists all categories in catalog order.
pub fn list_categories(catalog: &CatalogState) -> Vec<CategoryDto> {
    debug!("list_categories command");
    catalog
        .catalog()
        .categories()
        .iter()
        .map(CategoryDto::from)
        .collect()
}

/// Chip options with per-category item counts.
///
/// The "All" chip is not included; it is the absence of a selection.
pub fn category_options(catalog: &CatalogState) -> Vec<CategoryOption> {
    debug!("category_options command");
    catalog
        .catalog()
        .category_counts()
        .into_iter()
        .map(|c| CategoryOption {
            id: c.category.id.clone(),
            label: c.category.name.clone(),
            count: c.count,
        })
        .collect()
}

/// Filtered and sorted listing.
///
/// ## Arguments
/// * `category` - Category id; `None` or empty shows everything
/// * `sort` - Sort mode name; `None` uses the configured default, unknown
///   names keep catalog order
pub fn list_items(
    catalog: &CatalogState,
    config: &StorefrontConfig,
    category: Option<&str>,
    sort: Option<&str>,
) -> ItemListResponse {
    let mut query = CatalogQuery::from_params(category.unwrap_or(""), sort.unwrap_or(""));
    if sort.is_none() {
        query.sort = config.browse.default_sort;
    }
    debug!(category = ?query.category, sort = %query.sort, "list_items command");

    let catalog = catalog.catalog();
    let items: Vec<ItemSummaryDto> = query
        .run(catalog)
        .into_iter()
        .map(ItemSummaryDto::from)
        .collect();
    let summary = query.summarize(catalog, items.len());

    ItemListResponse {
        summary_text: summary.to_string(),
        category: query.category,
        sort: query.sort,
        items,
        summary,
    }
}

/// Detail view for one item.
///
/// ## Arguments
/// * `id` - Item id
/// * `image_index` - Gallery image to show large; out-of-range keeps the first
///
/// ## Returns
/// The detail view, or `NOT_FOUND`
pub fn get_item(
    catalog: &CatalogState,
    config: &StorefrontConfig,
    id: &str,
    image_index: Option<usize>,
) -> Result<ItemDetailDto, ApiError> {
    debug!(id = %id, image_index = ?image_index, "get_item command");

    let catalog = catalog.catalog();
    let item = catalog
        .get_item(id)
        .ok_or_else(|| ApiError::not_found("Item", id))?;
    let category = catalog
        .category_of(item)
        .ok_or_else(|| ApiError::internal(format!("Item {} has no category", id)))?;

    let mut gallery = ImageGallery::new(item);
    if let Some(index) = image_index {
        gallery.select(index);
    }

    Ok(ItemDetailDto {
        item: ItemSummaryDto::from(item),
        full_desc: item.full_desc.clone(),
        category: CategoryDto::from(category),
        gallery: GalleryDto::from(&gallery),
        can_add_to_cart: item.can_add_to_cart(),
        related: catalog
            .related_items(item, config.browse.related_limit)
            .into_iter()
            .map(ItemSummaryDto::from)
            .collect(),
    })
}

/// Items that can be added to a cart right now.
pub fn in_stock_items(catalog: &CatalogState) -> Vec<ItemSummaryDto> {
    debug!("in_stock_items command");
    catalog
        .catalog()
        .in_stock_items()
        .into_iter()
        .map(ItemSummaryDto::from)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn state() -> (CatalogState, StorefrontConfig) {
        let catalog = tapshop_data::load_embedded().unwrap();
        (CatalogState::new(catalog), StorefrontConfig::default())
    }

    fn ids(items: &[ItemSummaryDto]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn test_category_options_counts() {
        let (catalog, _) = state();
        let options = category_options(&catalog);
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].label, "Business Cards");
        assert_eq!(options.iter().map(|o| o.count).sum::<usize>(), 16);
        assert_eq!(list_categories(&catalog).len(), 5);
    }

    #[test]
    fn test_list_items_filtered_and_sorted() {
        let (catalog, config) = state();
        let response = list_items(&catalog, &config, Some("social"), Some("price-asc"));

        assert_eq!(
            ids(&response.items),
            [
                "nfc-tiktok-card",
                "nfc-social-instagram",
                "nfc-youtube-card",
                "nfc-linkedin-card",
            ]
        );
        assert_eq!(response.sort, SortMode::PriceAsc);
        assert_eq!(response.summary_text, "Showing 4 of 16 products in Social Cards");
    }

    #[test]
    fn test_list_items_uses_configured_default_sort() {
        let (catalog, mut config) = state();
        config.browse.default_sort = SortMode::PriceDesc;

        let response = list_items(&catalog, &config, None, None);
        assert_eq!(response.sort, SortMode::PriceDesc);
        assert_eq!(response.items[0].id, "nfc-stand-charging");
        assert_eq!(response.summary_text, "Showing 16 of 16 products");
    }

    #[test]
    fn test_list_items_unknown_sort_keeps_catalog_order() {
        let (catalog, config) = state();
        let response = list_items(&catalog, &config, Some("business"), Some("cheapest"));
        assert_eq!(response.sort, SortMode::CatalogOrder);
        assert_eq!(
            ids(&response.items),
            ["nfc-pro-business-1", "nfc-business-classic", "nfc-business-black"]
        );
    }

    #[test]
    fn test_list_items_unknown_category_is_empty() {
        let (catalog, config) = state();
        let response = list_items(&catalog, &config, Some("nope"), None);
        assert!(response.items.is_empty());
        assert_eq!(response.summary_text, "Showing 0 of 16 products");
    }

    #[test]
    fn test_get_item_detail() {
        let (catalog, config) = state();
        let detail = get_item(&catalog, &config, "nfc-pro-business-1", Some(2)).unwrap();

        assert_eq!(detail.item.price, "$29.99");
        assert_eq!(detail.item.rating_text, "4.8");
        assert_eq!(detail.category.name, "Business Cards");
        assert_eq!(detail.gallery.selected_index, 2);
        assert_eq!(detail.gallery.current, "/images/nfc-metal-business-hand.jpg");
        assert!(detail.gallery.thumbnails[2].selected);
        assert!(detail.can_add_to_cart);
        assert_eq!(
            ids(&detail.related),
            ["nfc-business-classic", "nfc-business-black"]
        );
    }

    #[test]
    fn test_get_item_out_of_range_image_keeps_first() {
        let (catalog, config) = state();
        let detail = get_item(&catalog, &config, "nfc-social-instagram", Some(9)).unwrap();
        assert_eq!(detail.gallery.selected_index, 0);
    }

    #[test]
    fn test_get_item_respects_related_limit() {
        let (catalog, mut config) = state();
        config.browse.related_limit = 1;
        let detail = get_item(&catalog, &config, "nfc-social-instagram", None).unwrap();
        assert_eq!(ids(&detail.related), ["nfc-tiktok-card"]);
    }

    #[test]
    fn test_get_item_missing() {
        let (catalog, config) = state();
        let err = get_item(&catalog, &config, "missing-id", None).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_out_of_stock_item_detail() {
        let (catalog, config) = state();
        let detail = get_item(&catalog, &config, "nfc-smart-tag-office", None).unwrap();
        assert!(!detail.can_add_to_cart);
        assert!(!in_stock_items(&catalog)
            .iter()
            .any(|item| item.id == "nfc-smart-tag-office"));
    }
}
