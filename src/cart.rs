//! Cart

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::{
    items::{Item, ItemType, MAX_PRICE, MAX_TITLE_LENGTH, MIN_PRICE},
    ticket::{Ticket, format_ticket},
};

/// Invalid arguments rejected when adding an item to a cart.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// Title is empty or too long.
    #[error("Illegal title: expected 1 to {max} characters, got {length}", max = MAX_TITLE_LENGTH)]
    InvalidTitle {
        /// Length of the rejected title, in characters
        length: usize,
    },

    /// Unit price is outside the accepted range.
    #[error("Illegal price {0}: must be between {min} and {max}", min = MIN_PRICE, max = MAX_PRICE)]
    InvalidPrice(Decimal),

    /// Quantity is zero, negative or too large.
    #[error("Illegal quantity {0}: must be at least 1")]
    InvalidQuantity(i64),
}

/// Shopping cart holding items in the order they were added.
#[derive(Debug, Default, Clone)]
pub struct Cart {
    items: Vec<Item>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a new item and append it to the end of the cart.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the title, price or quantity is out of range.
    /// The cart is left unchanged.
    pub fn add_item(
        &mut self,
        title: &str,
        price: Decimal,
        quantity: i64,
        item_type: ItemType,
    ) -> Result<(), CartError> {
        let item = Item::new(title, price, quantity, item_type).inspect_err(|err| {
            debug!(title, %price, quantity, %item_type, %err, "rejected item");
        })?;

        debug!(title, %price, quantity, %item_type, "added item");

        self.items.push(item);

        Ok(())
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Get the number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Price the current items.
    pub fn ticket(&self) -> Ticket {
        Ticket::new(&self.items)
    }

    /// Render the ticket for the current items, or `No items.` for an empty cart.
    pub fn format_ticket(&self) -> String {
        format_ticket(&self.items)
    }
}
