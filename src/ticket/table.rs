//! Fixed-width text tables
//!
//! Tables are laid out in two passes: every column is first sized to its
//! longest cell across the header, the rows and the footer, then each cell is
//! padded to that width and followed by a single space.

use std::{fmt, iter};

/// Character emitted after every cell.
const CELL_SEPARATOR: char = ' ';

/// Character the horizontal rules are drawn with.
const RULE: &str = "-";

/// Horizontal alignment of a column's cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Alignment {
    /// Pad on the right.
    Left,

    /// Split the padding, with the odd space going after the value.
    Center,

    /// Pad on the left.
    Right,
}

/// A table with `N` columns, an optional footer and dashed rules.
#[derive(Clone, Debug)]
pub struct Table<const N: usize> {
    header: [String; N],
    alignments: [Alignment; N],
    rows: Vec<[String; N]>,
    footer: Option<[String; N]>,
}

impl<const N: usize> Table<N> {
    /// Create an empty table with the given column headers and alignments.
    pub fn new(header: [&str; N], alignments: [Alignment; N]) -> Self {
        Self {
            header: header.map(str::to_string),
            alignments,
            rows: Vec::new(),
            footer: None,
        }
    }

    /// Append a data row.
    pub fn push_row(&mut self, row: [String; N]) {
        self.rows.push(row);
    }

    /// Set the footer row, rendered below a second rule.
    pub fn set_footer(&mut self, footer: [String; N]) {
        self.footer = Some(footer);
    }

    /// Number of data rows, excluding the header and footer.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of every column: the longest cell, in characters, of the header,
    /// the data rows and the footer.
    pub fn column_widths(&self) -> [usize; N] {
        let mut widths = [0; N];

        let all_rows = iter::once(&self.header)
            .chain(&self.rows)
            .chain(&self.footer);

        for row in all_rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        widths
    }

    /// Render the table as text, one newline-terminated line per row or rule.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let rule_length = rule_length(&widths);

        let mut out = String::new();

        self.write_row(&mut out, &self.header, &widths);
        write_rule(&mut out, rule_length);

        for row in &self.rows {
            self.write_row(&mut out, row, &widths);
        }

        if let Some(footer) = &self.footer {
            write_rule(&mut out, rule_length);
            self.write_row(&mut out, footer, &widths);
        }

        out
    }

    fn write_row(&self, out: &mut String, row: &[String; N], widths: &[usize; N]) {
        let cells = row.iter().zip(&self.alignments).zip(widths);

        for ((value, alignment), width) in cells {
            append_formatted(out, value, *alignment, *width);
        }

        out.push('\n');
    }
}

impl<const N: usize> fmt::Display for Table<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Length of a horizontal rule: the column widths plus one separator between
/// each pair of columns. The trailing separator after the last cell is not
/// counted.
pub fn rule_length(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + widths.len().saturating_sub(1)
}

fn write_rule(out: &mut String, length: usize) {
    out.push_str(&RULE.repeat(length));
    out.push('\n');
}

/// Appends `value` padded to `width` characters, followed by one separator space.
///
/// Values longer than `width` are truncated, never wrapped.
pub fn append_formatted(out: &mut String, value: &str, alignment: Alignment, width: usize) {
    let value = value
        .char_indices()
        .nth(width)
        .and_then(|(end, _)| value.get(..end))
        .unwrap_or(value);

    let padding = width.saturating_sub(value.chars().count());

    let before = match alignment {
        Alignment::Left => 0,
        Alignment::Center => padding / 2,
        Alignment::Right => padding,
    };

    out.extend(iter::repeat_n(' ', before));
    out.push_str(value);
    out.extend(iter::repeat_n(' ', padding - before));
    out.push(CELL_SEPARATOR);
}
