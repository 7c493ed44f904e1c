//! Shared fixtures for unit tests.

use crate::catalog::Catalog;
use crate::types::{Badge, Category, Item};

pub(crate) fn category(id: &str) -> Category {
    Category {
        id: id.to_string(),
        name: format!("Category {id}"),
        description: format!("All about {id}"),
    }
}

pub(crate) fn item(id: &str, category: &str, price_cents: i64, rating: f64, badge: Badge) -> Item {
    let image = format!("/images/{id}.jpg");
    Item {
        id: id.to_string(),
        name: format!("Item {id}"),
        price_cents,
        image: image.clone(),
        images: vec![image, format!("/images/{id}-back.jpg")],
        rating,
        badge,
        category: category.to_string(),
        short_desc: format!("Short {id}"),
        full_desc: format!("Full {id}"),
        in_stock: true,
    }
}

/// Six items over four categories; `office` is out of stock and `empty` has
/// no items.
pub(crate) fn sample_catalog() -> Catalog {
    let categories = vec![
        category("business"),
        category("social"),
        category("smart"),
        category("empty"),
    ];

    let mut office = item("office", "smart", 3999, 4.6, Badge::None);
    office.in_stock = false;

    let items = vec![
        item("metal", "business", 2999, 4.8, Badge::Popular),
        item("insta", "social", 1999, 4.6, Badge::New),
        item("classic", "business", 1699, 4.4, Badge::None),
        office,
        item("tiktok", "social", 1899, 4.3, Badge::New),
        item("black", "business", 2299, 4.5, Badge::None),
    ];

    Catalog::new(categories, items).expect("sample catalog is valid")
}

/// The A/B/C scenario: all in category `x`.
pub(crate) fn abc_catalog() -> Catalog {
    Catalog::new(
        vec![category("x")],
        vec![
            item("A", "x", 1000, 4.0, Badge::None),
            item("B", "x", 500, 4.5, Badge::Popular),
            item("C", "x", 2000, 4.9, Badge::None),
        ],
    )
    .expect("abc catalog is valid")
}
