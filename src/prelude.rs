//! Cart Ticket prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    discounts::{MAX_DISCOUNT, calculate_discount, line_total},
    fixtures::{CartFixture, FixtureError, sample_cart},
    items::{Item, ItemType},
    pricing::{format_money, total_price},
    ticket::{
        EMPTY_TICKET, Ticket, TicketRow, format_ticket,
        table::{Alignment, Table, append_formatted},
    },
};
