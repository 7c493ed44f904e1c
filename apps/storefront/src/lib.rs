//! # Tapshop Storefront Library
//!
//! Startup, state and commands for the Tapshop storefront. The `tapshop`
//! binary is a thin wrapper around [`run`].
//!
//! ## Module Organization
//! ```text
//! tapshop_storefront_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap arguments and text/JSON output
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Shared read-only catalog
//! │   ├── cart.rs     ◄─── Cart sessions behind a Mutex
//! │   └── config.rs   ◄─── File + environment configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Category, listing and detail commands
//! │   ├── cart.rs     ◄─── Cart session commands
//! │   ├── quantity.rs ◄─── Quantity field clamp
//! │   └── config.rs   ◄─── Config read command
//! └── error.rs        ◄─── ApiError for commands, StartupError for boot
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod state;

use std::path::Path;

use tapshop_core::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, CliError};
use error::StartupResult;
use state::{CartState, CatalogState, StorefrontConfig};

/// Everything a command needs, built once at startup.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub config: StorefrontConfig,
    pub catalog: CatalogState,
    pub carts: CartState,
}

impl Storefront {
    /// Wraps an already loaded catalog.
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Storefront {
            config,
            catalog: CatalogState::new(catalog),
            carts: CartState::default(),
        }
    }

    /// Resolves configuration and loads the catalog.
    ///
    /// ## Startup Sequence
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────────┐
    /// │                       Storefront Startup                                │
    /// │                                                                         │
    /// │  1. Load Configuration ───────────────────────────────────────────────► │
    /// │     • --config file, else platform config dir, else defaults            │
    /// │     • TAPSHOP_* environment variables on top                            │
    /// │                                                                         │
    /// │  2. Pick Catalog Source ──────────────────────────────────────────────► │
    /// │     • --catalog flag, else catalog.path, else embedded dataset          │
    /// │                                                                         │
    /// │  3. Load & Validate Catalog ──────────────────────────────────────────► │
    /// │     • Unknown category references abort startup                         │
    /// │                                                                         │
    /// │  4. Initialize State Objects ─────────────────────────────────────────► │
    /// │     • CatalogState (Arc), CartState (no sessions yet)                   │
    /// └─────────────────────────────────────────────────────────────────────────┘
    /// ```
    pub fn start(
        config_path: Option<&Path>,
        catalog_override: Option<&Path>,
    ) -> StartupResult<Self> {
        let mut config = StorefrontConfig::load(config_path)?;
        if let Some(path) = catalog_override {
            config.catalog.path = Some(path.to_path_buf());
        }

        let catalog = tapshop_data::load(config.catalog.path.as_deref())?;
        info!(
            items = catalog.len(),
            default_sort = %config.browse.default_sort,
            "Storefront ready"
        );

        Ok(Storefront::new(config, catalog))
    }
}

/// Starts the storefront and runs one CLI command against stdout.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let storefront = Storefront::start(cli.config.as_deref(), cli.catalog.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute(&storefront, &cli.command, cli.json, &mut out)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so command output on stdout stays clean.
///
/// ## Log Levels
/// - `RUST_LOG=warn` - Quiet runs
/// - `RUST_LOG=tapshop_data=trace` - Trace catalog loading only
/// - Default: INFO, DEBUG for tapshop crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tapshop=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tapshop_core::SortMode;

    #[test]
    fn test_start_with_config_and_catalog_override() {
        let mut catalog_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            catalog_file,
            r#"
[[categories]]
id = "tags"
name = "Tags"
description = "Plain tags"

[[items]]
id = "tag-1"
name = "Tag"
priceCents = 500
category = "tags"
image = "/images/tag.jpg"
images = ["/images/tag.jpg"]
rating = 4.0
badge = ""
shortDesc = "A tag"
fullDesc = "A plain NFC tag"
inStock = true
"#
        )
        .unwrap();

        let mut config_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            config_file,
            "[browse]\ndefault_sort = \"price-desc\"\nrelated_limit = 2\n"
        )
        .unwrap();

        let storefront =
            Storefront::start(Some(config_file.path()), Some(catalog_file.path())).unwrap();

        assert_eq!(storefront.config.browse.default_sort, SortMode::PriceDesc);
        assert_eq!(storefront.config.browse.related_limit, 2);
        assert_eq!(
            storefront.config.catalog.path.as_deref(),
            Some(catalog_file.path())
        );
        assert_eq!(storefront.catalog.catalog().len(), 1);
        assert_eq!(storefront.carts.session_count(), 0);
    }

    #[test]
    fn test_start_missing_catalog_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("absent.toml");
        let catalog_path = dir.path().join("absent.json");

        let err = Storefront::start(Some(&config_path), Some(&catalog_path)).unwrap_err();
        assert!(matches!(err, error::StartupError::Catalog(_)));
    }
}
