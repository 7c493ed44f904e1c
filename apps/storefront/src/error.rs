//! # Storefront Error Types
//!
//! Two error types live here:
//! - [`ApiError`]: what a command hands back to the presentation layer
//! - [`StartupError`]: why the process could not start
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tapshop                                │
//! │                                                                         │
//! │  Startup                          Per request                           │
//! │  ───────                          ───────────                           │
//! │                                                                         │
//! │  config file / env               command function                       │
//! │       │                          Result<T, ApiError>                    │
//! │       ▼                               │                                 │
//! │  DataError (catalog) ──┐              ├── unknown item  ── NOT_FOUND   │
//! │  toml / io errors ─────┤              ├── out of stock  ── OUT_OF_STOCK│
//! │                        ▼              ├── bad session   ── NOT_FOUND   │
//! │                  StartupError         └── bad session id ── VALIDATION │
//! │                        │                                                │
//! │                        ▼                    ▼                           │
//! │                 exit code 1          { "code": "...", "message": ... } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ordinary shopper input never fails: out-of-range quantities are clamped
//! and unknown categories give an empty listing.

use std::path::PathBuf;

use serde::Serialize;
use tapshop_data::DataError;
use thiserror::Error;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "OUT_OF_STOCK",
///   "message": "Office NFC Tags (10-Pack) is out of stock"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item, category or cart session not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// The item cannot be added because it is not in stock
    OutOfStock,

    /// Internal error
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::OutOfStock => "OUT_OF_STOCK",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn out_of_stock(name: &str) -> Self {
        ApiError::new(ErrorCode::OutOfStock, format!("{} is out of stock", name))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Error
// =============================================================================

/// Errors that stop the storefront before it serves anything.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Catalog(#[from] DataError),
}

pub type StartupResult<T> = Result<T, StartupError>;
