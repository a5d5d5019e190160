//! Table output for rendered trees

mod table;

pub use table::{Cell, Span, SpanStyle, Table};

use crate::tree::DisplayRow;

/// Column headers of the tree table
pub const TREE_HEADER: [&str; 4] = ["NAMESPACE", "NAME", "READY/REASON", "AGE"];

/// Empty table with the tree header row
pub fn tree_table() -> Table {
    let mut table = Table::new();
    table.add_row(TREE_HEADER);
    table
}

/// Append rendered rows; the prefix is dimmed and the name emphasised
pub fn add_tree_rows(table: &mut Table, rows: &[DisplayRow]) {
    for row in rows {
        let label = Cell::default()
            .push(row.prefix.clone(), SpanStyle::Dim)
            .push(format!("{}/", row.kind), SpanStyle::Plain)
            .push(row.name.clone(), SpanStyle::Bold);
        table.add_row(vec![
            Cell::plain(row.namespace.clone()),
            label,
            Cell::plain(row.status.clone()),
            Cell::plain(row.age.clone()),
        ]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_cell_matches_row_label() {
        let row = DisplayRow {
            namespace: "ns1".to_string(),
            prefix: "└─".to_string(),
            kind: "Subscription".to_string(),
            name: "opA".to_string(),
            status: "AtLatestKnown".to_string(),
            age: "5m".to_string(),
        };
        let mut table = tree_table();
        add_tree_rows(&mut table, std::slice::from_ref(&row));

        assert_eq!(table.len(), 2);
        let rendered = table.render(false);
        let last_line = rendered.lines().last().unwrap();
        assert!(last_line.contains(&row.label()));
        assert!(last_line.ends_with("5m"));
    }
}
