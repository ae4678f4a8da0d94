//! Prices

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso::Currency;

use crate::{discounts::line_total, items::Item};

/// Formats an amount as the currency symbol followed by the amount with exactly
/// as many fraction digits as the currency's exponent.
///
/// There is no grouping and the decimal separator is always `.`, so
/// `999000` becomes `$999000.00`. Midpoints round to even.
pub fn format_money(amount: Decimal, currency: &Currency) -> String {
    let mut rounded =
        amount.round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(currency.exponent);

    format!("{}{rounded}", currency.symbol)
}

/// Calculates the total paid for a list of items after their discounts.
///
/// An empty list totals zero. The sum saturates at `Decimal::MAX`.
pub fn total_price(items: &[Item]) -> Decimal {
    items
        .iter()
        .map(line_total)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
