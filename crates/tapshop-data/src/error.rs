//! # Data Error Types
//!
//! Errors raised while turning a catalog document into a [`Catalog`].
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error / toml::de::Error / CoreError           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataError (this module) ← Adds the file path and format               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StartupError (in storefront app) ← Process exits with a message       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`Catalog`]: tapshop_core::Catalog

use std::path::PathBuf;

use tapshop_core::CoreError;
use thiserror::Error;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum DataError {
    /// The catalog file could not be read.
    ///
    /// ## When This Occurs
    /// - Path doesn't exist
    /// - File permissions issue
    #[error("Failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid catalog JSON.
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is not valid catalog TOML.
    #[error("Invalid catalog TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file extension is neither `.json` nor `.toml`.
    #[error("Unsupported catalog format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),

    /// An item has neither `priceCents` nor `price`.
    #[error("Item {item_id} has no price")]
    MissingPrice { item_id: String },

    /// A decimal `price` cannot be expressed in cents.
    #[error("Item {item_id} has an invalid price: {value}")]
    InvalidPrice { item_id: String, value: f64 },

    /// The document parsed but failed integrity checks.
    #[error("Catalog rejected: {0}")]
    Catalog(#[from] CoreError),
}

impl DataError {
    /// Wraps an I/O failure with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for catalog loading.
pub type DataResult<T> = Result<T, DataError>;
