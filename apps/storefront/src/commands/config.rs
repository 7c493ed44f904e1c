//! # Config Commands
//!
//! Exposes the resolved storefront configuration.

use tracing::debug;

use crate::state::StorefrontConfig;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - Presentation startup (default sort for the sort dropdown)
/// - Diagnosing which catalog file is being served
pub fn get_config(config: &StorefrontConfig) -> StorefrontConfig {
    debug!("get_config command");
    config.clone()
}
