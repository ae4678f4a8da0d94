//! Fixtures
//!
//! Carts described in YAML, e.g.
//!
//! ```yaml
//! items:
//!   - title: Apple
//!     price: "0.99"
//!     quantity: 5
//!     type: NEW
//! ```

use std::{fs, path::Path};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    items::ItemType,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// An item was rejected by the cart
    #[error("Invalid item {index}: {source}")]
    InvalidItem {
        /// 1-based position of the item in the fixture
        index: usize,

        /// Why the cart rejected it
        source: CartError,
    },
}

/// Wrapper for cart items in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Items in the order they are added to the cart
    pub items: Vec<ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item title
    pub title: String,

    /// Unit price (e.g., "0.99" or "$0.99")
    pub price: String,

    /// Quantity bought
    pub quantity: i64,

    /// Item type (`NEW`, `SECOND_FREE`, `SALE` or `REGULAR`)
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

impl CartFixture {
    /// Parse a cart fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML does not describe a cart.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Load a cart fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Build a cart by adding every fixture item in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a price cannot be parsed or the cart rejects an item.
    pub fn into_cart(self) -> Result<Cart, FixtureError> {
        let mut cart = Cart::new();

        for (idx, item) in self.items.into_iter().enumerate() {
            let price = parse_price(&item.price)?;

            cart.add_item(&item.title, price, item.quantity, item.item_type)
                .map_err(|source| FixtureError::InvalidItem {
                    index: idx + 1,
                    source,
                })?;
        }

        Ok(cart)
    }
}

/// Parse a price string (e.g., "2.99" or "$2.99") into a decimal amount.
///
/// # Errors
///
/// Returns an error if the amount cannot be parsed as a decimal.
pub fn parse_price(s: &str) -> Result<Decimal, FixtureError> {
    let trimmed = s.trim();
    let amount = trimmed.strip_prefix('$').unwrap_or(trimmed);

    amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))
}

/// The demonstration cart: one item of every type.
///
/// # Errors
///
/// Never fails in practice; every item is within the cart's limits.
pub fn sample_cart() -> Result<Cart, CartError> {
    let mut cart = Cart::new();

    cart.add_item("Apple", Decimal::new(99, 2), 5, ItemType::New)?;
    cart.add_item("Banana", Decimal::new(2000, 2), 4, ItemType::SecondFree)?;
    cart.add_item(
        "A long piece of toilet paper",
        Decimal::new(1720, 2),
        1,
        ItemType::Sale,
    )?;
    cart.add_item("Nails", Decimal::new(200, 2), 500, ItemType::Regular)?;

    Ok(cart)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::items::Item;

    #[test]
    fn parse_price_cases() -> TestResult {
        assert_eq!(parse_price("0.99")?, Decimal::new(99, 2));
        assert_eq!(parse_price("$17.20")?, Decimal::new(1720, 2));
        assert_eq!(parse_price(" 2 ")?, Decimal::new(2, 0));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99 USD");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(price)) if price == "2.99 USD"));
    }

    #[test]
    fn from_yaml_builds_cart_in_order() -> TestResult {
        let yaml = r#"
items:
  - title: Apple
    price: "0.99"
    quantity: 5
    type: NEW
  - title: Banana
    price: "$20.00"
    quantity: 4
    type: SECOND_FREE
"#;

        let cart = CartFixture::from_yaml(yaml)?.into_cart()?;

        let types: Vec<_> = cart.items().iter().map(Item::item_type).collect();

        assert_eq!(types, [ItemType::New, ItemType::SecondFree]);
        assert_eq!(
            cart.items().last().map(Item::price),
            Some(Decimal::new(20, 0))
        );

        Ok(())
    }

    #[test]
    fn into_cart_reports_rejected_item() -> TestResult {
        let yaml = r#"
items:
  - title: Apple
    price: "0.99"
    quantity: 5
    type: NEW
  - title: Nails
    price: "2.00"
    quantity: 0
    type: REGULAR
"#;

        let result = CartFixture::from_yaml(yaml)?.into_cart();

        assert!(matches!(
            result,
            Err(FixtureError::InvalidItem {
                index: 2,
                source: CartError::InvalidQuantity(0)
            })
        ));

        Ok(())
    }

    #[test]
    fn from_yaml_rejects_unknown_type() {
        let yaml = r#"
items:
  - title: Apple
    price: "0.99"
    quantity: 5
    type: CLEARANCE
"#;

        assert!(matches!(
            CartFixture::from_yaml(yaml),
            Err(FixtureError::Yaml(_))
        ));
    }

    #[test]
    fn sample_cart_has_one_item_of_each_type() -> TestResult {
        let cart = sample_cart()?;

        let types: Vec<_> = cart.items().iter().map(Item::item_type).collect();

        assert_eq!(
            types,
            [
                ItemType::New,
                ItemType::SecondFree,
                ItemType::Sale,
                ItemType::Regular
            ]
        );

        Ok(())
    }
}
