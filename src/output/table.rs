//! Column-aligned text table

use crossterm::style::{Stylize, style};
use std::io::{self, Write};

const DEFAULT_SEPARATOR: &str = "  ";

/// Text style of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanStyle {
    #[default]
    Plain,
    Dim,
    Bold,
}

/// A run of text with one style
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    fn write_styled(&self, out: &mut String, color: bool) {
        if !color || self.text.is_empty() {
            out.push_str(&self.text);
            return;
        }
        let styled = match self.style {
            SpanStyle::Plain => self.text.clone(),
            SpanStyle::Dim => style(&self.text).dark_grey().to_string(),
            SpanStyle::Bold => style(&self.text).bold().to_string(),
        };
        out.push_str(&styled);
    }
}

/// One table cell made of styled spans
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub spans: Vec<Span>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::new(text, SpanStyle::Plain)],
        }
    }

    pub fn push(mut self, text: impl Into<String>, style: SpanStyle) -> Self {
        self.spans.push(Span::new(text, style));
        self
    }

    /// Visible width in characters, ignoring styling
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.text.chars().count()).sum()
    }

    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::plain(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::plain(text)
    }
}

/// Rows of cells, printed with every column padded to its widest cell
#[derive(Debug, Clone)]
pub struct Table {
    separator: String,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            rows: Vec::new(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn add_row<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.width();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// Render all rows; the last cell of a row is never padded
    pub fn render(&self, color: bool) -> String {
        let widths = self.column_widths();
        let mut lines = Vec::with_capacity(self.rows.len());

        for row in &self.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                for span in &cell.spans {
                    span.write_styled(&mut line, color);
                }
                if i + 1 < row.len() {
                    let pad = widths[i].saturating_sub(cell.width());
                    line.push_str(&" ".repeat(pad));
                    line.push_str(&self.separator);
                }
            }
            lines.push(line);
        }

        lines.join("\n")
    }

    pub fn write_to<W: Write>(&self, out: &mut W, color: bool) -> io::Result<()> {
        writeln!(out, "{}", self.render(color))
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_are_aligned() {
        let mut table = Table::new();
        table.add_row(["A", "LONG HEADER", "C"]);
        table.add_row(["wide value", "x", "y"]);

        assert_eq!(
            table.render(false),
            "A           LONG HEADER  C\nwide value  x            y"
        );
    }

    #[test]
    fn test_width_counts_characters_not_bytes() {
        let cell = Cell::default()
            .push("│ └─", SpanStyle::Dim)
            .push("Kind/", SpanStyle::Plain)
            .push("name", SpanStyle::Bold);
        assert_eq!(cell.width(), 13);
        assert_eq!(cell.text(), "│ └─Kind/name");
    }

    #[test]
    fn test_color_adds_escape_codes_without_changing_alignment() {
        let mut table = Table::new();
        table.add_row(vec![
            Cell::default().push("bold", SpanStyle::Bold),
            Cell::plain("end"),
        ]);
        table.add_row(vec![Cell::plain("longer cell"), Cell::plain("end")]);

        let plain = table.render(false);
        let colored = table.render(true);
        assert!(colored.contains('\u{1b}'));
        assert!(!plain.contains('\u{1b}'));
        assert!(plain.starts_with("bold         end"));
    }

    #[test]
    fn test_custom_separator() {
        let mut table = Table::new().with_separator(" | ");
        table.add_row(["a", "b"]);
        assert_eq!(table.render(false), "a | b");
        assert_eq!(table.len(), 1);
    }
}
