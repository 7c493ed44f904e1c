//! # Validation Module
//!
//! Field validators applied to every record when a catalog is built.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog Load Pipeline                              │
//! │                                                                         │
//! │  Step 1: Deserialize (tapshop-data)                                    │
//! │  ├── Shape and types (serde)                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 2: Field validation (THIS MODULE)                                │
//! │  ├── ids, names, prices, ratings, images                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 3: Referential checks (Catalog::new)                             │
//! │  ├── unique ids                                                        │
//! │  └── every item.category resolves to a category                        │
//! │                                                                         │
//! │  Any failure rejects the whole catalog.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{Category, Item, MAX_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length of an item or category id.
pub const MAX_ID_LEN: usize = 64;

/// Maximum length of a display name.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a record id (slug).
///
/// ## Rules
/// - Must not be empty
/// - At most 64 characters
/// - Only ASCII letters, digits, hyphens and underscores
///
/// ```rust
/// use tapshop_core::validation::validate_id;
///
/// assert!(validate_id("nfc-pro-business-1").is_ok());
/// assert!(validate_id("has space").is_err());
/// ```
pub fn validate_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_ID_LEN {
        return Err(ValidationError::OutOfRange {
            field: "id length".to_string(),
            min: "1".to_string(),
            max: MAX_ID_LEN.to_string(),
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a display name.
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::OutOfRange {
            field: "name length".to_string(),
            min: "1".to_string(),
            max: MAX_NAME_LEN.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: "0".to_string(),
            max: i64::MAX.to_string(),
        });
    }

    Ok(())
}

/// Validates a rating: finite and within `[0, 5]`.
///
/// ```rust
/// use tapshop_core::validation::validate_rating;
///
/// assert!(validate_rating(4.9).is_ok());
/// assert!(validate_rating(5.1).is_err());
/// assert!(validate_rating(f64::NAN).is_err());
/// ```
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    if !rating.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "rating".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if !(0.0..=MAX_RATING).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: "0".to_string(),
            max: "5".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates an item's gallery: at least one non-blank image path.
pub fn validate_images(images: &[String]) -> ValidationResult<()> {
    if images.is_empty() {
        return Err(ValidationError::Empty {
            field: "images".to_string(),
        });
    }

    if images.iter().any(|image| image.trim().is_empty()) {
        return Err(ValidationError::Required {
            field: "images[]".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Runs every field validator for a category.
pub fn validate_category(category: &Category) -> ValidationResult<()> {
    validate_id(&category.id)?;
    validate_name(&category.name)?;
    Ok(())
}

/// Runs every field validator for an item.
///
/// The category reference is checked separately by `Catalog::new`, which
/// knows the full category set.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_id(&item.id)?;
    validate_name(&item.name)?;
    validate_price_cents(item.price_cents)?;
    validate_rating(item.rating)?;
    validate_images(&item.images)?;

    if item.image.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "image".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Badge;

    fn test_item() -> Item {
        Item {
            id: "nfc-classic".to_string(),
            name: "Classic Card".to_string(),
            price_cents: 1699,
            image: "/a.jpg".to_string(),
            images: vec!["/a.jpg".to_string()],
            rating: 4.4,
            badge: Badge::None,
            category: "business".to_string(),
            short_desc: String::new(),
            full_desc: String::new(),
            in_stock: true,
        }
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id("business").is_ok());
        assert!(validate_id("nfc_tag-2").is_ok());

        assert!(validate_id("").is_err());
        assert!(validate_id("   ").is_err());
        assert!(validate_id("has space").is_err());
        assert!(validate_id("slash/id").is_err());
        assert!(validate_id(&"a".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("NFC Card Wallet - Leather").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(8999).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_rating() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_images() {
        assert!(validate_images(&["/a.jpg".to_string()]).is_ok());
        assert_eq!(
            validate_images(&[]),
            Err(ValidationError::Empty {
                field: "images".to_string()
            })
        );
        assert!(validate_images(&["/a.jpg".to_string(), " ".to_string()]).is_err());
    }

    #[test]
    fn test_validate_item() {
        assert!(validate_item(&test_item()).is_ok());

        let mut item = test_item();
        item.price_cents = -100;
        assert!(validate_item(&item).is_err());

        let mut item = test_item();
        item.image = String::new();
        assert!(validate_item(&item).is_err());
    }
}
