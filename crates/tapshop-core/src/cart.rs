//! # Cart State Machine
//!
//! A caller-owned mapping from item id to a positive quantity.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   (absent) ──add(n)──► qty = n ──add(m)──► qty = n + m                 │
//! │      ▲                   │                                              │
//! │      │                   │ remove(k)                                    │
//! │      │                   ▼                                              │
//! │      └──── qty - k <= 0 ─┴─ qty - k > 0 ──► qty = qty - k              │
//! │                                                                         │
//! │   remove on (absent)  → no-op                                          │
//! │   add(0)              → no-op                                          │
//! │   quantity 0 is never stored; the key is removed instead               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! There is no global cart. Each session, page or test holds its own `Cart`
//! value; two carts never share state. Stored quantities have no upper bound
//! (the 1-10 limit belongs to [`SelectedQuantity`](crate::SelectedQuantity),
//! applied before an add).
//!
//! ## Stock
//! `add` does not consult the catalog. Callers must not add items whose
//! `in_stock` flag is false.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::money::Money;

/// Per-item quantities, keyed by item id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: BTreeMap<String, u32>,
}

/// A cart transition, for callers that prefer a reducer-style API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum CartAction {
    Add { item_id: String, amount: u32 },
    Remove { item_id: String, amount: u32 },
    Clear,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` units of an item and returns the new quantity.
    ///
    /// Adding zero units changes nothing. Quantities saturate at `u32::MAX`.
    pub fn add(&mut self, item_id: &str, amount: u32) -> u32 {
        if amount == 0 {
            return self.quantity_of(item_id);
        }

        let quantity = self.lines.entry(item_id.to_string()).or_insert(0);
        *quantity = quantity.saturating_add(amount);
        *quantity
    }

    /// Removes up to `amount` units and returns the remaining quantity.
    ///
    /// No-op when the item is not in the cart. When the result would reach
    /// zero the line is deleted.
    pub fn remove(&mut self, item_id: &str, amount: u32) -> u32 {
        let Some(quantity) = self.lines.get_mut(item_id) else {
            return 0;
        };

        if *quantity <= amount {
            self.lines.remove(item_id);
            0
        } else {
            *quantity -= amount;
            *quantity
        }
    }

    /// Removes a single unit.
    pub fn remove_one(&mut self, item_id: &str) -> u32 {
        self.remove(item_id, 1)
    }

    /// Quantity of one item, 0 when absent.
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.lines.get(item_id).copied().unwrap_or(0)
    }

    /// Sum of all quantities (the cart badge number).
    pub fn total_count(&self) -> u64 {
        self.lines.values().map(|&quantity| u64::from(quantity)).sum()
    }

    /// Number of distinct items.
    pub fn distinct_items(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.lines.contains_key(item_id)
    }

    /// Lines ordered by item id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.lines
            .iter()
            .map(|(item_id, &quantity)| (item_id.as_str(), quantity))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Applies a transition in place.
    pub fn apply(&mut self, action: &CartAction) {
        match action {
            CartAction::Add { item_id, amount } => {
                self.add(item_id, *amount);
            }
            CartAction::Remove { item_id, amount } => {
                self.remove(item_id, *amount);
            }
            CartAction::Clear => self.clear(),
        }
    }

    /// Returns the state after `action`, leaving `self` untouched.
    #[must_use]
    pub fn applied(&self, action: &CartAction) -> Cart {
        let mut next = self.clone();
        next.apply(action);
        next
    }

    /// Sum of price × quantity over lines found in `catalog`.
    ///
    /// Lines whose item is not in the catalog contribute nothing.
    pub fn subtotal(&self, catalog: &Catalog) -> Money {
        self.iter()
            .filter_map(|(item_id, quantity)| {
                catalog
                    .get_item(item_id)
                    .map(|item| item.price().multiply_quantity(quantity))
            })
            .sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;

    #[test]
    fn test_add_accumulates() {
        let mut cart = Cart::new();
        assert_eq!(cart.add("metal", 2), 2);
        assert_eq!(cart.add("metal", 3), 5);
        assert_eq!(cart.quantity_of("metal"), 5);
        assert_eq!(cart.distinct_items(), 1);
    }

    #[test]
    fn test_total_count_law() {
        let mut cart = Cart::new();
        cart.add("insta", 4);
        let before = cart.total_count();

        cart.add("metal", 2);
        cart.add("metal", 3);
        assert_eq!(cart.total_count(), before + 5);
    }

    #[test]
    fn test_add_then_remove_deletes_key() {
        let mut cart = Cart::new();
        cart.add("metal", 1);
        assert_eq!(cart.remove("metal", 1), 0);
        assert_eq!(cart.quantity_of("metal"), 0);
        assert!(!cart.contains("metal"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_from_empty_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.remove("metal", 1), 0);
        assert_eq!(cart, Cart::new());
    }

    #[test]
    fn test_remove_partial_and_overshoot() {
        let mut cart = Cart::new();
        cart.add("metal", 5);
        assert_eq!(cart.remove_one("metal"), 4);
        assert_eq!(cart.remove("metal", 2), 2);
        assert_eq!(cart.remove("metal", 10), 0);
        assert!(!cart.contains("metal"));
    }

    #[test]
    fn test_add_zero_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.add("metal", 0), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_no_upper_bound_on_stored_quantity() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add("metal", 10);
        }
        assert_eq!(cart.quantity_of("metal"), 50);

        cart.add("metal", u32::MAX);
        assert_eq!(cart.quantity_of("metal"), u32::MAX);
    }

    #[test]
    fn test_carts_are_independent() {
        let mut first = Cart::new();
        let mut second = Cart::new();
        first.add("metal", 2);
        second.add("insta", 1);

        assert_eq!(first.quantity_of("insta"), 0);
        assert_eq!(second.quantity_of("metal"), 0);
    }

    #[test]
    fn test_applied_leaves_input_untouched() {
        let mut cart = Cart::new();
        cart.add("metal", 1);

        let next = cart.applied(&CartAction::Add {
            item_id: "metal".to_string(),
            amount: 2,
        });
        assert_eq!(cart.quantity_of("metal"), 1);
        assert_eq!(next.quantity_of("metal"), 3);

        let cleared = next.applied(&CartAction::Clear);
        assert!(cleared.is_empty());

        let removed = next.applied(&CartAction::Remove {
            item_id: "metal".to_string(),
            amount: 3,
        });
        assert!(removed.is_empty());
    }

    #[test]
    fn test_iter_is_ordered_by_id() {
        let mut cart = Cart::new();
        cart.add("tiktok", 1);
        cart.add("classic", 2);
        let lines: Vec<(&str, u32)> = cart.iter().collect();
        assert_eq!(lines, [("classic", 2), ("tiktok", 1)]);
    }

    #[test]
    fn test_subtotal() {
        let catalog = sample_catalog();
        let mut cart = Cart::new();
        cart.add("metal", 2); // 2 x $29.99
        cart.add("classic", 1); // 1 x $16.99
        cart.add("ghost", 7); // not in catalog

        assert_eq!(cart.subtotal(&catalog), Money::from_cents(7697));
        assert_eq!(Cart::new().subtotal(&catalog), Money::zero());
    }

    #[test]
    fn test_action_serde_shape() {
        let json = serde_json::to_string(&CartAction::Add {
            item_id: "metal".to_string(),
            amount: 2,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"add","item_id":"metal","amount":2}"#);
    }
}
