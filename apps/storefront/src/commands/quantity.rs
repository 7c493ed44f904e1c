//! # Quantity Commands
//!
//! Normalizes the detail page quantity field.

use serde::Serialize;
use tapshop_core::{SelectedQuantity, MAX_SELECTED_QUANTITY, MIN_SELECTED_QUANTITY};
use tracing::debug;

/// Clamped quantity plus the state of the -/+ buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityDto {
    pub value: u32,
    pub min: u32,
    pub max: u32,
    pub can_increment: bool,
    pub can_decrement: bool,
}

impl From<SelectedQuantity> for QuantityDto {
    fn from(quantity: SelectedQuantity) -> Self {
        QuantityDto {
            value: quantity.get(),
            min: MIN_SELECTED_QUANTITY,
            max: MAX_SELECTED_QUANTITY,
            can_increment: quantity.can_increment(),
            can_decrement: quantity.can_decrement(),
        }
    }
}

/// Clamps raw field text to `[1, 10]`. Never fails.
pub fn clamp_quantity(input: &str) -> QuantityDto {
    let quantity = SelectedQuantity::parse(input);
    debug!(input = %input, value = quantity.get(), "clamp_quantity command");
    QuantityDto::from(quantity)
}
