//! Cart Ticket
//!
//! A shopping cart that prices its items with per-type discounts and prints
//! them as a fixed-width text receipt.

pub mod cart;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod ticket;
pub mod utils;
