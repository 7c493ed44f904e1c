//! # Money Module
//!
//! Provides the `Money` type for item prices and cart subtotals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog prices like 29.99 and 16.99 are not exact in binary floating   │
//! │  point. Sorting by price and summing cart lines must be exact, so      │
//! │  every price is carried in cents:                                      │
//! │                                                                         │
//! │    "priceCents": 2999   →   Money(2999)   →   "$29.99"                 │
//! │                                                                         │
//! │  Decimal prices in catalog documents are rounded to the nearest cent    │
//! │  once, on load. Only the Display impl converts back to a decimal.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tapshop_core::money::Money;
//!
//! let price = Money::from_cents(2999);
//! assert_eq!(price.to_string(), "$29.99");
//! assert_eq!(price.multiply_quantity(3).cents(), 8997);
//! assert_eq!(Money::from_decimal(29.99), Some(price));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use ts_rs::TS;

/// A price or subtotal in cents. Single currency; no currency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Converts a decimal dollar amount, rounding half away from zero.
    ///
    /// Returns `None` for NaN, infinities and amounts outside the `i64`
    /// cent range.
    pub fn from_decimal(dollars: f64) -> Option<Self> {
        let cents = (dollars * 100.0).round();
        // i64::MAX is not exactly representable; 2^63 is the first value out of range
        if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
            Some(Money(cents as i64))
        } else {
            None
        }
    }

    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Unit price times a cart quantity, saturating on overflow.
    ///
    /// ```text
    /// Premium Metal Card $29.99  x 3  ──►  line total $89.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Saturating sum, used for cart subtotals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |total, line| {
            Money(total.0.saturating_add(line.0))
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(8999).to_string(), "$89.99");
        assert_eq!(Money::from_cents(500).to_string(), "$5.00");
        assert_eq!(Money::from_cents(7).to_string(), "$0.07");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(i64::MIN).to_string(), "-$92233720368547758.08");
    }

    #[test]
    fn test_from_decimal_rounds_to_nearest_cent() {
        assert_eq!(Money::from_decimal(29.99), Some(Money::from_cents(2999)));
        assert_eq!(Money::from_decimal(16.99), Some(Money::from_cents(1699)));
        assert_eq!(Money::from_decimal(10.0), Some(Money::from_cents(1000)));
        assert_eq!(Money::from_decimal(0.125), Some(Money::from_cents(13)));
        assert_eq!(Money::from_decimal(4.004), Some(Money::from_cents(400)));
        assert_eq!(Money::from_decimal(-1.5), Some(Money::from_cents(-150)));
    }

    #[test]
    fn test_from_decimal_rejects_non_finite() {
        assert_eq!(Money::from_decimal(f64::NAN), None);
        assert_eq!(Money::from_decimal(f64::INFINITY), None);
        assert_eq!(Money::from_decimal(1e300), None);
    }

    #[test]
    fn test_sum_of_lines() {
        let lines = [
            Money::from_cents(2999).multiply_quantity(2),
            Money::from_cents(1699),
            Money::zero(),
        ];
        let total: Money = lines.into_iter().sum();
        assert_eq!(total.cents(), 7697);
    }

    #[test]
    fn test_sum_saturates() {
        let total: Money = [Money::from_cents(i64::MAX), Money::from_cents(1)]
            .into_iter()
            .sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_multiply_quantity_saturates() {
        let price = Money::from_cents(i64::MAX / 2);
        assert_eq!(price.multiply_quantity(3).cents(), i64::MAX);
    }

    #[test]
    fn test_ordering_is_by_cents() {
        assert!(Money::from_cents(1699) < Money::from_cents(2999));
    }
}
