//! Ticket
//!
//! Renders the items of a cart as a plain-text receipt: a header, one row per
//! item with its discount and line total, and a footer holding the item count
//! and the grand total.

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, USD};
use tracing::debug;

use crate::{
    discounts::{calculate_discount, line_total},
    items::Item,
    pricing::format_money,
};

pub mod table;

use table::{Alignment, Table};

/// Text returned instead of a table when there is nothing to list.
pub const EMPTY_TICKET: &str = "No items.";

/// Number of columns on a ticket.
pub const COLUMNS: usize = 6;

const HEADER: [&str; COLUMNS] = ["#", "Item", "Price", "Quan.", "Discount", "Total"];

const ALIGNMENTS: [Alignment; COLUMNS] = [
    Alignment::Right,
    Alignment::Left,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
    Alignment::Right,
];

/// One priced line of a ticket, derived from a cart item.
#[derive(Clone, Debug, PartialEq)]
pub struct TicketRow {
    index: usize,
    title: String,
    price: Decimal,
    quantity: u32,
    discount: u8,
    total: Decimal,
}

impl TicketRow {
    /// Price an item appearing at the given 1-based position.
    pub fn new(index: usize, item: &Item) -> Self {
        Self {
            index,
            title: item.title().to_string(),
            price: item.price(),
            quantity: item.quantity(),
            discount: calculate_discount(item.item_type(), item.quantity()),
            total: line_total(item),
        }
    }

    /// 1-based position of the row on the ticket
    pub fn index(&self) -> usize {
        self.index
    }

    /// Item title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Unit price
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Quantity bought
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Discount percentage, `None` when the item is not discounted.
    pub fn discount(&self) -> Option<u8> {
        (self.discount > 0).then_some(self.discount)
    }

    /// Amount paid for the line after the discount, unrounded.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Discount as shown on the ticket: `-` for none, otherwise e.g. `50%`.
    pub fn discount_label(&self) -> String {
        self.discount()
            .map_or_else(|| "-".to_string(), |discount| format!("{discount}%"))
    }

    fn cells(&self, currency: &Currency) -> [String; COLUMNS] {
        [
            self.index.to_string(),
            self.title.clone(),
            format_money(self.price, currency),
            self.quantity.to_string(),
            self.discount_label(),
            format_money(self.total, currency),
        ]
    }
}

/// Priced rows and grand total for a list of items, in US dollars.
#[derive(Clone, Debug)]
pub struct Ticket {
    rows: Vec<TicketRow>,
    total: Decimal,
}

impl Ticket {
    /// Price every item, in order.
    pub fn new(items: &[Item]) -> Self {
        let rows: Vec<TicketRow> = items
            .iter()
            .enumerate()
            .map(|(idx, item)| TicketRow::new(idx + 1, item))
            .collect();

        let total = rows
            .iter()
            .map(TicketRow::total)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        debug!(rows = rows.len(), %total, "built ticket");

        Self { rows, total }
    }

    /// Rows in cart order
    pub fn rows(&self) -> &[TicketRow] {
        &self.rows
    }

    /// Sum of every row total, unrounded.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the ticket has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Lay the ticket out as a table. Returns `None` for an empty ticket.
    pub fn table(&self) -> Option<Table<COLUMNS>> {
        if self.is_empty() {
            return None;
        }

        let mut table = Table::new(HEADER, ALIGNMENTS);

        for row in &self.rows {
            table.push_row(row.cells(USD));
        }

        table.set_footer([
            self.len().to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            format_money(self.total, USD),
        ]);

        Some(table)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.table() {
            Some(table) => f.write_str(&table.render()),
            None => f.write_str(EMPTY_TICKET),
        }
    }
}

/// Renders the ticket for a list of items.
///
/// Returns [`EMPTY_TICKET`] when there are no items.
pub fn format_ticket(items: &[Item]) -> String {
    if items.is_empty() {
        return EMPTY_TICKET.to_string();
    }

    Ticket::new(items).to_string()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::items::ItemType;

    #[test]
    fn empty_ticket() {
        assert_eq!(format_ticket(&[]), "No items.");
        assert_eq!(Ticket::new(&[]).to_string(), "No items.");
        assert!(Ticket::new(&[]).table().is_none());
    }

    #[test]
    fn rows_follow_item_order() -> TestResult {
        let items = [
            Item::new("Banana", Decimal::new(2000, 2), 4, ItemType::SecondFree)?,
            Item::new("Apple", Decimal::new(99, 2), 5, ItemType::New)?,
        ];

        let ticket = Ticket::new(&items);
        let titles: Vec<_> = ticket.rows().iter().map(TicketRow::title).collect();
        let indexes: Vec<_> = ticket.rows().iter().map(TicketRow::index).collect();

        assert_eq!(titles, ["Banana", "Apple"]);
        assert_eq!(indexes, [1, 2]);

        Ok(())
    }

    #[test]
    fn discount_label() -> TestResult {
        let apple = Item::new("Apple", Decimal::ONE, 5, ItemType::New)?;
        let banana = Item::new("Banana", Decimal::ONE, 4, ItemType::SecondFree)?;

        let apple = TicketRow::new(1, &apple);
        let banana = TicketRow::new(2, &banana);

        assert_eq!(apple.discount(), None);
        assert_eq!(apple.discount_label(), "-");
        assert_eq!(banana.discount(), Some(50));
        assert_eq!(banana.discount_label(), "50%");

        Ok(())
    }

    #[test]
    fn total_is_sum_of_row_totals() -> TestResult {
        let items = [
            Item::new("Gum", Decimal::new(333, 2), 1, ItemType::Sale)?,
            Item::new("Gum", Decimal::new(333, 2), 1, ItemType::Sale)?,
        ];

        let ticket = Ticket::new(&items);

        assert_eq!(ticket.total(), Decimal::new(1998, 3));
        assert!(ticket.to_string().ends_with("$2.00 \n"));

        Ok(())
    }

    #[test]
    fn footer_widens_total_column() -> TestResult {
        let items = [
            Item::new("A", Decimal::new(500, 2), 1, ItemType::New)?,
            Item::new("B", Decimal::new(500, 2), 1, ItemType::New)?,
        ];

        let rendered = format_ticket(&items);
        let lines: Vec<&str> = rendered.lines().collect();

        let expected = [
            "# Item Price Quan. Discount  Total ",
            "----------------------------------",
            "1 A    $5.00     1        -  $5.00 ",
            "2 B    $5.00     1        -  $5.00 ",
            "----------------------------------",
            "2                           $10.00 ",
        ];

        assert_eq!(lines, expected);
        assert!(rendered.ends_with('\n'));

        Ok(())
    }
}
