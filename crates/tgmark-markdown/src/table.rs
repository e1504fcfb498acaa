// SPDX-FileCopyrightText: 2026 Tgmark Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-width text tables rendered as MarkdownV2 code.
//!
//! Cells are padded to their column's width and margin when a row is added.
//! The separator between cells and the code escaping are applied when the
//! table is rendered, so the separator can be changed at any point and every
//! row picks it up.
//!
//! A row is bound to the columns that exist when it is added: a column added
//! later never adds a cell to an earlier row, and cells beyond the current
//! column count are dropped.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::trace;

use crate::escape::escape_code;
use crate::styled::StyledText;

/// Horizontal alignment of a cell within its column width.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Right,
    Center,
    Left,
}

/// A table column: fixed width, alignment, and symmetric outer margin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub header: Option<String>,
    pub align: Alignment,
    pub width: usize,
    pub margin: usize,
}

impl Column {
    /// A right-aligned column of `width` characters with no margin.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Formats one cell for this column.
    pub fn format_cell(&self, text: &str) -> String {
        pad_cell(text, self.width, self.align, self.margin)
    }
}

/// Pads `text` to `width` characters according to `align`, then adds
/// `margin` spaces on both sides.
///
/// Width is counted in `char`s. Text longer than `width` is kept whole.
/// Centered text puts the odd space on the right.
pub fn pad_cell(text: &str, width: usize, align: Alignment, margin: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    let (left, right) = match align {
        Alignment::Right => (fill, 0),
        Alignment::Left => (0, fill),
        Alignment::Center => (fill / 2, fill - fill / 2),
    };

    let mut cell = String::with_capacity(text.len() + fill + 2 * margin);
    push_spaces(&mut cell, margin + left);
    cell.push_str(text);
    push_spaces(&mut cell, right + margin);
    cell
}

fn push_spaces(buf: &mut String, n: usize) {
    buf.extend(std::iter::repeat_n(' ', n));
}

/// Render-time settings of a [`Table`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOptions {
    /// Placed between adjacent cells of every row when rendering.
    pub separator: String,
    /// Render the whole table as one fenced code block instead of one inline
    /// code span per row.
    pub code_block: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    options: TableOptions,
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
    header: Option<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TableOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut TableOptions {
        &mut self.options
    }

    /// Changes the separator used by every later render, including for rows
    /// that were added before the change.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.options.separator = separator.into();
    }

    pub fn set_code_block(&mut self, code_block: bool) {
        self.options.code_block = code_block;
    }

    pub fn add_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn add_columns(&mut self, columns: impl IntoIterator<Item = Column>) {
        self.columns.extend(columns);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Appends a row, formatting each cell for the column at its position.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let row = self.format_row(cells);
        self.rows.push(row);
    }

    /// Sets the header row, formatted like any other row and rendered first.
    pub fn set_header<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.header = Some(self.format_row(cells));
    }

    /// Sets the header row from the columns' header labels. Columns without
    /// a label contribute an empty cell.
    pub fn set_header_from_columns(&mut self) {
        let labels: Vec<String> = self
            .columns
            .iter()
            .map(|c| c.header.clone().unwrap_or_default())
            .collect();
        self.set_header(labels);
    }

    fn format_row<I, S>(&self, cells: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut row = Vec::with_capacity(self.columns.len());
        let mut cells = cells.into_iter();
        for column in &self.columns {
            match cells.next() {
                Some(cell) => row.push(column.format_cell(cell.as_ref())),
                None => break,
            }
        }

        if cells.next().is_some() {
            trace!(
                columns = self.columns.len(),
                "dropping cells beyond the column count"
            );
        }
        row
    }

    /// Renders the table as MarkdownV2.
    pub fn render(&self) -> String {
        if self.options.code_block {
            self.render_block()
        } else {
            self.render_per_row()
        }
    }

    /// Renders the table as an escaped value that can be combined with other
    /// styled text.
    pub fn to_styled(&self) -> StyledText {
        StyledText::from_escaped(self.render())
    }

    fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.header
            .iter()
            .filter(|header| !header.is_empty())
            .chain(self.rows.iter())
            .map(|row| escape_code(&row.join(self.options.separator.as_str())))
    }

    fn render_per_row(&self) -> String {
        self.lines()
            .map(|line| format!("`{line}`"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_block(&self) -> String {
        let mut out = String::from("```\n");
        for line in self.lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("```");
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn pad_right_is_default() {
        assert_eq!(Column::new(4).format_cell("a"), "   a");
    }

    #[test]
    fn pad_left() {
        assert_eq!(pad_cell("a", 4, Alignment::Left, 0), "a   ");
    }

    #[test]
    fn pad_center_puts_odd_space_right() {
        assert_eq!(pad_cell("a", 4, Alignment::Center, 0), " a  ");
        assert_eq!(pad_cell("ab", 4, Alignment::Center, 0), " ab ");
    }

    #[test]
    fn pad_with_margin() {
        assert_eq!(pad_cell("a", 4, Alignment::Right, 1), "    a ");
        assert_eq!(pad_cell("b", 4, Alignment::Left, 1), " b    ");
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad_cell("abcdef", 4, Alignment::Right, 0), "abcdef");
    }

    #[test]
    fn pad_zero_width() {
        assert_eq!(pad_cell("", 0, Alignment::Left, 0), "");
        assert_eq!(pad_cell("", 0, Alignment::Left, 2), "    ");
    }

    #[test]
    fn pad_counts_chars_not_bytes() {
        assert_eq!(pad_cell("é", 3, Alignment::Right, 0), "  é");
    }

    #[test]
    fn alignment_parses_case_insensitively() {
        assert_eq!(Alignment::from_str("LEFT").unwrap(), Alignment::Left);
        assert_eq!(Alignment::from_str("center").unwrap(), Alignment::Center);
        assert_eq!(Alignment::Right.to_string(), "right");
    }

    #[test]
    fn empty_table_renders_empty() {
        assert_eq!(Table::new().render(), "");
    }

    #[test]
    fn empty_table_block_renders_bare_fences() {
        let mut table = Table::new();
        table.set_code_block(true);
        assert_eq!(table.render(), "```\n```");
    }

    #[test]
    fn zero_columns_yield_empty_rows() {
        let mut table = Table::new();
        table.add_row(["a", "b"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.render(), "``");
    }

    #[test]
    fn empty_header_is_not_rendered() {
        let mut table = Table::new();
        table.add_column(Column::new(2));
        table.set_header(Vec::<String>::new());
        table.add_row(["a"]);
        assert_eq!(table.render(), "` a`");
    }

    #[test]
    fn header_from_columns() {
        let mut table = Table::new();
        table.add_columns([
            Column::new(4).align(Alignment::Left).header("id"),
            Column::new(4),
            Column::new(5).header("name"),
        ]);
        table.set_separator("|");
        table.set_header_from_columns();
        assert_eq!(table.render(), "`id  |    | name`");
    }

    #[test]
    fn render_is_repeatable() {
        let mut table = Table::new();
        table.add_column(Column::new(3));
        table.add_row(["x"]);
        assert_eq!(table.render(), table.render());
        assert_eq!(table.to_string(), table.render());
    }

    #[test]
    fn to_styled_is_not_escaped_again() {
        let mut table = Table::new();
        table.add_column(Column::new(3));
        table.add_row(["a.b"]);
        assert_eq!(table.to_styled(), "`a.b`");
    }

    #[test]
    #[traced_test]
    fn excess_cells_are_traced() {
        let mut table = Table::new();
        table.add_column(Column::new(1));
        table.add_row(["a", "b", "c"]);
        assert_eq!(table.render(), "`a`");
        assert!(logs_contain("dropping cells beyond the column count"));
    }

    #[test]
    fn unbounded_row_is_cut_at_column_count() {
        let mut table = Table::new();
        table.add_columns([Column::new(1), Column::new(1)]);
        table.add_row(std::iter::repeat("x"));
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.render(), "`xx`");
    }
}
