//! # Storefront Configuration
//!
//! Loaded once at startup, read-only afterwards.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --catalog ./catalog.toml                                           │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TAPSHOP_CATALOG_PATH, TAPSHOP_DEFAULT_SORT, TAPSHOP_RELATED_LIMIT  │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/tapshop/storefront.toml (Linux)                          │
//! │     ~/Library/Application Support/com.tapshop.storefront/... (macOS)   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     embedded catalog, popularity sort, 4 related items                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [catalog]
//! path = "/srv/tapshop/catalog.json"   # omit for the embedded dataset
//!
//! [browse]
//! default_sort = "popularity"          # price-asc | price-desc | rating | popularity | catalog-order
//! related_limit = 4
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tapshop_core::{SortMode, RELATED_ITEMS_LIMIT};
use tracing::{debug, info};

use crate::error::{StartupError, StartupResult};

const ENV_CATALOG_PATH: &str = "TAPSHOP_CATALOG_PATH";
const ENV_DEFAULT_SORT: &str = "TAPSHOP_DEFAULT_SORT";
const ENV_RELATED_LIMIT: &str = "TAPSHOP_RELATED_LIMIT";

// =============================================================================
// Sections
// =============================================================================

/// Where the catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// JSON or TOML catalog file. `None` uses the embedded dataset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Listing and detail page behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseSettings {
    /// Sort mode used when a listing request names none.
    #[serde(default)]
    pub default_sort: SortMode,

    /// Related items shown on a detail view.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_related_limit() -> usize {
    RELATED_ITEMS_LIMIT
}

impl Default for BrowseSettings {
    fn default() -> Self {
        BrowseSettings {
            default_sort: SortMode::default(),
            related_limit: default_related_limit(),
        }
    }
}

// =============================================================================
// Storefront Config
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub browse: BrowseSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file and environment.
    ///
    /// `config_path` overrides the platform default location. A missing file
    /// is not an error; defaults apply.
    pub fn load(config_path: Option<&Path>) -> StartupResult<Self> {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(Self::default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading storefront config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> StartupResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| StartupError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks values that serde cannot.
    pub fn validate(&self) -> StartupResult<()> {
        if self.browse.related_limit == 0 {
            return Err(StartupError::InvalidConfig(
                "related_limit must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `TAPSHOP_*` environment variables.
    pub fn apply_env_overrides(&mut self) -> StartupResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key lookup.
    ///
    /// Unparseable values are rejected rather than ignored, matching how the
    /// config file treats them.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> StartupResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_CATALOG_PATH) {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog.path = Some(PathBuf::from(path));
        }

        if let Some(sort) = lookup(ENV_DEFAULT_SORT) {
            self.browse.default_sort = sort.parse::<SortMode>().map_err(|e| {
                StartupError::InvalidConfig(format!("{}: {}", ENV_DEFAULT_SORT, e))
            })?;
            debug!(sort = %self.browse.default_sort, "Overriding default sort from environment");
        }

        if let Some(limit) = lookup(ENV_RELATED_LIMIT) {
            self.browse.related_limit = limit.trim().parse::<usize>().map_err(|_| {
                StartupError::InvalidConfig(format!(
                    "{} must be a positive integer, got '{}'",
                    ENV_RELATED_LIMIT, limit
                ))
            })?;
        }

        Ok(())
    }

    /// Platform config file location.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tapshop", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
