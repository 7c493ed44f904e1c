//! # Selected Quantity
//!
//! The pending "how many to add" value on the detail page, always in
//! `[1, 10]`.
//!
//! ## Clamping Points
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   [ - ]  [  3  ]  [ + ]      [ Add 3 to Cart ]                         │
//! │     │       │       │                                                   │
//! │     │       │       └── increment()   4, ..., stops at 10              │
//! │     │       └────────── parse(text)   "12" → 10, "abc" → 1, "" → 1     │
//! │     └────────────────── decrement()   2, ..., stops at 1               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every path is total: bad input is defaulted, never reported.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Smallest quantity that can be added at once.
pub const MIN_SELECTED_QUANTITY: u32 = 1;

/// Largest quantity that can be added at once.
pub const MAX_SELECTED_QUANTITY: u32 = 10;

/// Clamps a requested quantity to `[1, 10]`.
///
/// ```rust
/// use tapshop_core::clamp_quantity;
///
/// assert_eq!(clamp_quantity(0), 1);
/// assert_eq!(clamp_quantity(15), 10);
/// assert_eq!(clamp_quantity(5), 5);
/// ```
pub fn clamp_quantity(requested: i64) -> u32 {
    requested.clamp(
        i64::from(MIN_SELECTED_QUANTITY),
        i64::from(MAX_SELECTED_QUANTITY),
    ) as u32
}

/// A quantity in `[1, 10]`.
///
/// Deserializes from any integer and clamps it, so the range holds for
/// values read back from a client too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(from = "i64")]
#[ts(export)]
pub struct SelectedQuantity(u32);

impl SelectedQuantity {
    /// Clamps `requested` into range.
    pub fn new(requested: i64) -> Self {
        SelectedQuantity(clamp_quantity(requested))
    }

    /// Reads a quantity from free-form field text.
    ///
    /// Leading whitespace and an optional sign are accepted, then the longest
    /// run of digits; anything after it is ignored. Text with no digits gives
    /// the minimum. Numbers too large for `i64` saturate to the nearest bound.
    ///
    /// ```rust
    /// use tapshop_core::SelectedQuantity;
    ///
    /// assert_eq!(SelectedQuantity::parse("4").get(), 4);
    /// assert_eq!(SelectedQuantity::parse("12abc").get(), 10);
    /// assert_eq!(SelectedQuantity::parse("abc").get(), 1);
    /// ```
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['+', '-']));
        let digits_len = trimmed[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();

        if digits_len == 0 {
            return Self::default();
        }

        match trimmed[..sign_len + digits_len].parse::<i64>() {
            Ok(value) => Self::new(value),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                SelectedQuantity(MAX_SELECTED_QUANTITY)
            }
            Err(_) => Self::default(),
        }
    }

    #[inline]
    pub fn get(&self) -> u32 {
        self.0
    }

    /// One more, capped at 10.
    #[must_use]
    pub fn increment(self) -> Self {
        Self::new(i64::from(self.0) + 1)
    }

    /// One fewer, floored at 1.
    #[must_use]
    pub fn decrement(self) -> Self {
        Self::new(i64::from(self.0) - 1)
    }

    /// Whether the "+" button is enabled.
    pub fn can_increment(&self) -> bool {
        self.0 < MAX_SELECTED_QUANTITY
    }

    /// Whether the "-" button is enabled.
    pub fn can_decrement(&self) -> bool {
        self.0 > MIN_SELECTED_QUANTITY
    }
}

impl Default for SelectedQuantity {
    fn default() -> Self {
        SelectedQuantity(MIN_SELECTED_QUANTITY)
    }
}

impl From<i64> for SelectedQuantity {
    fn from(requested: i64) -> Self {
        SelectedQuantity::new(requested)
    }
}

impl From<SelectedQuantity> for u32 {
    fn from(quantity: SelectedQuantity) -> Self {
        quantity.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
