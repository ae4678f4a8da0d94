//! Items

use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::cart::CartError;

/// Longest title, in characters, an item may carry.
pub const MAX_TITLE_LENGTH: usize = 32;

/// Lowest accepted unit price (one cent).
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Highest accepted unit price (one trillion).
pub const MAX_PRICE: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Item type, which decides the discount policy applied to the item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemType {
    /// Newly stocked item, never discounted.
    New,

    /// Buy one, get the second free (50% off when more than one is bought).
    SecondFree,

    /// On sale at 70% off.
    Sale,

    /// Regular item with only the bulk discount.
    Regular,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ItemType::New => "NEW",
            ItemType::SecondFree => "SECOND_FREE",
            ItemType::Sale => "SALE",
            ItemType::Regular => "REGULAR",
        })
    }
}

/// A validated cart line item
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    title: String,
    price: Decimal,
    quantity: u32,
    item_type: ItemType,
}

impl Item {
    /// Creates a new item, checking the title, price and quantity constraints.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidTitle`]: the title is empty or longer than [`MAX_TITLE_LENGTH`] characters.
    /// - [`CartError::InvalidPrice`]: the price is below [`MIN_PRICE`] or above [`MAX_PRICE`].
    /// - [`CartError::InvalidQuantity`]: the quantity is zero, negative or does not fit a `u32`.
    pub fn new(
        title: &str,
        price: Decimal,
        quantity: i64,
        item_type: ItemType,
    ) -> Result<Self, CartError> {
        let length = title.chars().count();

        if length == 0 || length > MAX_TITLE_LENGTH {
            return Err(CartError::InvalidTitle { length });
        }

        if !(MIN_PRICE..=MAX_PRICE).contains(&price) {
            return Err(CartError::InvalidPrice(price));
        }

        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|quantity| *quantity > 0)
            .ok_or(CartError::InvalidQuantity(quantity))?;

        Ok(Self {
            title: title.to_string(),
            price,
            quantity,
            item_type,
        })
    }

    /// Returns the title of the item
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity bought
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the item type
    pub fn item_type(&self) -> ItemType {
        self.item_type
    }
}
