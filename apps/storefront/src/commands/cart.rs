//! # Cart Commands
//!
//! Session-scoped cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │ open_cart│────►│ In Cart  │────►│close_cart│                        │
//! │  │ (uuid)   │     │          │     │          │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_to_cart       (unknown item → NOT_FOUND)         │
//! │                   remove_from_cart  (out of stock → OUT_OF_STOCK)      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tapshop_core::{Cart, Catalog, SelectedQuantity};
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// One line of the cart view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineDto {
    pub item_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
    /// Display total, e.g. `"$59.98"`
    pub line_total: String,
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub session_id: Uuid,
    pub lines: Vec<CartLineDto>,
    /// Badge number: sum of all quantities
    pub total_count: u64,
    pub distinct_items: usize,
    pub subtotal_cents: i64,
    pub subtotal: String,
}

impl CartResponse {
    /// Builds the view of `cart` against `catalog`.
    ///
    /// Lines whose item is no longer in the catalog are left out, matching
    /// `Cart::subtotal`.
    pub fn build(session_id: Uuid, cart: &Cart, catalog: &Catalog) -> Self {
        let lines = cart
            .iter()
            .filter_map(|(item_id, quantity)| {
                let item = catalog.get_item(item_id)?;
                let line_total = item.price().multiply_quantity(quantity);
                Some(CartLineDto {
                    item_id: item_id.to_string(),
                    name: item.name.clone(),
                    quantity,
                    unit_price_cents: item.price_cents,
                    line_total_cents: line_total.cents(),
                    line_total: line_total.to_string(),
                })
            })
            .collect();
        let subtotal = cart.subtotal(catalog);

        CartResponse {
            session_id,
            lines,
            total_count: cart.total_count(),
            distinct_items: cart.distinct_items(),
            subtotal_cents: subtotal.cents(),
            subtotal: subtotal.to_string(),
        }
    }
}

/// Parses a session handle.
pub fn parse_session_id(session_id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(session_id.trim())
        .map_err(|_| ApiError::validation(format!("Invalid cart session id: {}", session_id)))
}

fn session_not_found(session_id: Uuid) -> ApiError {
    ApiError::not_found("Cart session", &session_id.to_string())
}

/// Opens a new session with an empty cart.
pub fn open_cart(catalog: &CatalogState, carts: &CartState) -> CartResponse {
    let session_id = carts.open_session();
    debug!(session_id = %session_id, "open_cart command");
    CartResponse::build(session_id, &Cart::new(), catalog.catalog())
}

/// Gets the current cart contents.
pub fn get_cart(
    catalog: &CatalogState,
    carts: &CartState,
    session_id: &str,
) -> Result<CartResponse, ApiError> {
    let id = parse_session_id(session_id)?;
    debug!(session_id = %id, "get_cart command");

    carts
        .with_session(id, |session| {
            CartResponse::build(id, &session.cart, catalog.catalog())
        })
        .ok_or_else(|| session_not_found(id))
}

/// Adds an item to the cart.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Detail page: [ - ] [ 12 ] [ + ]   [ Add 10 to Cart ]                  │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  add_to_cart(session, "nfc-pro-business-1", Some("12"))                │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Look up item              (missing → NOT_FOUND)            │    │
/// │  │  2. Check in_stock            (false   → OUT_OF_STOCK)         │    │
/// │  │  3. Clamp quantity text       ("12"    → 10, "abc" → 1)        │    │
/// │  │  4. cart.add(item, quantity)  (accumulates, no upper bound)    │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  "✓ 10 item(s) in cart"                                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Arguments
/// * `item_id` - Item to add
/// * `quantity` - Raw quantity field text (default: 1)
pub fn add_to_cart(
    catalog: &CatalogState,
    carts: &CartState,
    session_id: &str,
    item_id: &str,
    quantity: Option<&str>,
) -> Result<CartResponse, ApiError> {
    let id = parse_session_id(session_id)?;
    let quantity = quantity.map(SelectedQuantity::parse).unwrap_or_default();
    debug!(session_id = %id, item_id = %item_id, quantity = quantity.get(), "add_to_cart command");

    let catalog = catalog.catalog();
    let item = catalog
        .get_item(item_id)
        .ok_or_else(|| ApiError::not_found("Item", item_id))?;

    if !item.can_add_to_cart() {
        return Err(ApiError::out_of_stock(&item.name));
    }

    carts
        .with_cart_mut(id, |cart| {
            cart.add(&item.id, quantity.get());
            CartResponse::build(id, cart, catalog)
        })
        .ok_or_else(|| session_not_found(id))
}

/// Removes units of an item from the cart.
///
/// Removing an item that is not in the cart is a no-op, not an error.
///
/// ## Arguments
/// * `item_id` - Item to remove
/// * `amount` - Units to remove (default: 1)
pub fn remove_from_cart(
    catalog: &CatalogState,
    carts: &CartState,
    session_id: &str,
    item_id: &str,
    amount: Option<u32>,
) -> Result<CartResponse, ApiError> {
    let id = parse_session_id(session_id)?;
    let amount = amount.unwrap_or(1);
    debug!(session_id = %id, item_id = %item_id, amount, "remove_from_cart command");

    carts
        .with_cart_mut(id, |cart| {
            cart.remove(item_id, amount);
            CartResponse::build(id, cart, catalog.catalog())
        })
        .ok_or_else(|| session_not_found(id))
}

/// Clears all items from the cart.
pub fn clear_cart(
    catalog: &CatalogState,
    carts: &CartState,
    session_id: &str,
) -> Result<CartResponse, ApiError> {
    let id = parse_session_id(session_id)?;
    debug!(session_id = %id, "clear_cart command");

    carts
        .with_cart_mut(id, |cart| {
            cart.clear();
            CartResponse::build(id, cart, catalog.catalog())
        })
        .ok_or_else(|| session_not_found(id))
}

/// Ends a session and returns its final cart.
pub fn close_cart(
    catalog: &CatalogState,
    carts: &CartState,
    session_id: &str,
) -> Result<CartResponse, ApiError> {
    let id = parse_session_id(session_id)?;
    debug!(session_id = %id, "close_cart command");

    carts
        .close_session(id)
        .map(|cart| CartResponse::build(id, &cart, catalog.catalog()))
        .ok_or_else(|| session_not_found(id))
}

// =============================================================================
// Unit Tests
// =============================================================================
