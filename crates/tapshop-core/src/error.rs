//! # Error Types
//!
//! Domain-specific error types for tapshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tapshop-core errors (this file)                                       │
//! │  ├── CoreError        - Catalog integrity failures (load time)         │
//! │  └── ValidationError  - Field-level validation failures                │
//! │                                                                         │
//! │  tapshop-data errors (separate crate)                                  │
//! │  └── DataError        - Catalog file read / parse failures             │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DataError → startup failure       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Ordinary user-input paths never produce errors here:
//! - Lookups by unknown id return `None`
//! - Unknown categories produce an empty listing
//! - Out-of-range quantities are clamped
//! - Removing an item that is not in the cart is a no-op

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog integrity errors.
///
/// All of these are raised while building a [`Catalog`](crate::Catalog).
/// A catalog that fails any check is rejected as a whole; it is never served
/// partially because every query assumes items resolve to a category.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An item references a category that does not exist.
    ///
    /// ## When This Occurs
    /// ```text
    /// categories: [business, social]
    /// items:      [{ id: "nfc-wallet", category: "accessories" }]
    ///                                              │
    ///                                              ▼
    /// InvalidReference { item_id: "nfc-wallet", category_id: "accessories" }
    /// ```
    #[error("Item {item_id} references unknown category: {category_id}")]
    InvalidReference {
        item_id: String,
        category_id: String,
    },

    /// Two items share the same id.
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    /// Two categories share the same id.
    #[error("Duplicate category id: {0}")]
    DuplicateCategory(String),

    /// An item failed field validation.
    #[error("Invalid item {item_id}: {source}")]
    InvalidItem {
        item_id: String,
        #[source]
        source: ValidationError,
    },

    /// A category failed field validation.
    #[error("Invalid category {category_id}: {source}")]
    InvalidCategory {
        category_id: String,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: String, max: String },

    /// Invalid format (e.g., id with spaces, non-finite rating).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// A list field has no entries.
    #[error("{field} must not be empty")]
    Empty { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
