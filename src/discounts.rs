//! Discounts

use rust_decimal::Decimal;

use crate::items::{Item, ItemType};

/// Highest discount, in percent, any item can receive.
pub const MAX_DISCOUNT: u8 = 80;

/// Every full block of this many units adds one percent of bulk discount.
const BULK_STEP: u32 = 10;

/// Calculates the discount percentage for an item type bought in the given quantity.
///
/// - `New` items are never discounted, whatever the quantity.
/// - `SecondFree` items start at 50% when more than one is bought.
/// - `Sale` items start at 70%.
/// - `Regular` items start at 0%.
///
/// Every type except `New` then gains 1% per full 10 units, capped at [`MAX_DISCOUNT`].
pub fn calculate_discount(item_type: ItemType, quantity: u32) -> u8 {
    let base: u32 = match item_type {
        ItemType::New => return 0,
        ItemType::SecondFree if quantity > 1 => 50,
        ItemType::Sale => 70,
        ItemType::SecondFree | ItemType::Regular => 0,
    };

    let discount = base.saturating_add(quantity / BULK_STEP);

    u8::try_from(discount).map_or(MAX_DISCOUNT, |discount| discount.min(MAX_DISCOUNT))
}

/// Calculates the amount paid for an item line after its discount.
///
/// The result is exact; rounding only happens when it is formatted. Item
/// limits keep it well inside `Decimal`'s range, and it saturates at
/// `Decimal::MAX` rather than overflowing.
pub fn line_total(item: &Item) -> Decimal {
    let discount = calculate_discount(item.item_type(), item.quantity());
    let retained = Decimal::from(100 - discount) / Decimal::ONE_HUNDRED;

    item.price()
        .saturating_mul(Decimal::from(item.quantity()))
        .saturating_mul(retained)
}
