//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic is done with `Decimal` internally, then converted
//! back to `f64` for storage and serialization. Totals are always recomputed
//! from the current line items, never adjusted incrementally.

use crate::models::CartLineItem;
use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Display tax rate applied on top of an order subtotal (10%)
///
/// The tax rate is never persisted on an order; only the subtotal is stored,
/// and every display site recomputes the surcharge through [`display_total`].
pub const TAX_RATE_PERCENT: u32 = 10;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Line total: unit price × quantity
pub fn line_total(price: f64, quantity: i32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// Subtotal over a list of line items
///
/// This is the single reduction behind cart totals and checkout subtotals:
/// `Σ(unit price × quantity)` over the current items.
pub fn items_subtotal(items: &[CartLineItem]) -> f64 {
    let total: Decimal = items
        .iter()
        .map(|item| line_total(item.price, item.quantity))
        .sum();
    to_f64(total)
}

/// Grand total for display: subtotal plus the fixed tax surcharge
pub fn display_total(subtotal: f64) -> f64 {
    let rate = Decimal::ONE + Decimal::from(TAX_RATE_PERCENT) / Decimal::ONE_HUNDRED;
    to_f64(to_decimal(subtotal) * rate)
}
