//! Bordered text tables with wrapped cells and a stable descending sort.

use comfy_table::presets::ASCII_FULL;
use comfy_table::{ColumnConstraint, Table as Grid, TableComponent, Width};

/// Widest a cell's text may grow before it is wrapped onto another line.
pub const MAX_TABLE_WIDTH: usize = 20;

const PADDING: usize = 1;

/// A table with left-aligned cells, upper-case headers and a rule under every row.
///
/// ```text
/// +-------------+----------+
/// | TYPE        | LOCATION |
/// +-------------+----------+
/// | Node/Master | 10.0.0.1 |
/// +-------------+----------+
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    sort_column: Option<usize>,
    max_width: usize,
}

impl Table {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            sort_column: None,
            max_width: MAX_TABLE_WIDTH,
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = width.max(1);
        self
    }

    /// Sort rows descending by the named column when rendering. Unknown names leave rows unsorted.
    pub fn sort_by(mut self, column: &str) -> Self {
        self.sort_column = self.columns.iter().position(|c| c == column);
        self
    }

    /// Missing trailing cells render empty; extra cells are dropped.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells: Vec<String> = row
            .into_iter()
            .map(Into::into)
            .take(self.columns.len())
            .collect();
        cells.resize(self.columns.len(), String::new());
        self.rows.push(cells);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut rows: Vec<&Vec<String>> = self.rows.iter().collect();
        if let Some(idx) = self.sort_column {
            sort_descending_by(&mut rows, |r| r[idx].as_str());
        }

        let mut grid = Grid::new();
        grid.load_preset(ASCII_FULL)
            .set_style(TableComponent::HeaderLines, '-')
            .set_style(TableComponent::MiddleHeaderIntersections, '+')
            .set_style(TableComponent::LeftBorderIntersections, '+')
            .set_style(TableComponent::RightBorderIntersections, '+')
            .set_header(self.columns.iter().map(|c| c.to_uppercase()));
        for row in rows {
            grid.add_row(row.iter().map(String::as_str));
        }

        // constraint widths include the padding on both sides
        let limit = u16::try_from(self.max_width + 2 * PADDING).unwrap_or(u16::MAX);
        for idx in 0..self.columns.len() {
            if let Some(column) = grid.column_mut(idx) {
                column.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(limit)));
            }
        }
        grid.to_string()
    }
}

/// Stable sort, largest key first; equal keys keep their current order.
pub fn sort_descending_by<T, K, F>(items: &mut [T], key: F)
where
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    items.sort_by(|a, b| key(b).cmp(key(a)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_borders_and_upper_headers() {
        let mut t = Table::new(["Type", "Location"]);
        t.add_row(["Node/Master", "10.0.0.1"]);
        let expected = "\
+-------------+----------+
| TYPE        | LOCATION |
+-------------+----------+
| Node/Master | 10.0.0.1 |
+-------------+----------+";
        assert_eq!(t.render(), expected);
    }

    #[test]
    fn rule_after_every_row() {
        let mut t = Table::new(["Name"]);
        t.add_row(["b"]);
        t.add_row(["a"]);
        let expected = "\
+------+
| NAME |
+------+
| b    |
+------+
| a    |
+------+";
        assert_eq!(t.render(), expected);
    }

    #[test]
    fn empty_table_has_header_only() {
        let t = Table::new(["Name"]);
        let rendered = t.render();
        assert!(rendered.starts_with("+------+\n| NAME |\n+------+"));
        assert!(rendered.lines().all(|l| l == "+------+" || l == "| NAME |"));
        assert!(t.is_empty());
    }

    #[test]
    fn long_cells_wrap_into_taller_rows() {
        let mut t = Table::new(["Service", "Description"]);
        t.add_row(["Kubelet API", "The Kubelet is the main component in every Node"]);
        let expected = "\
+-------------+----------------------+
| SERVICE     | DESCRIPTION          |
+-------------+----------------------+
| Kubelet API | The Kubelet is the   |
|             | main component in    |
|             | every Node           |
+-------------+----------------------+";
        assert_eq!(t.render(), expected);
    }

    #[test]
    fn wide_characters_keep_borders_aligned() {
        let mut t = Table::new(["Name", "X"]);
        t.add_row(["節点", "a"]);
        t.add_row(["abcd", "b"]);
        let expected = "\
+------+---+
| NAME | X |
+------+---+
| 節点 | a |
+------+---+
| abcd | b |
+------+---+";
        assert_eq!(t.render(), expected);
    }

    #[test]
    fn narrower_width_policy() {
        let mut t = Table::new(["Id"]).max_width(4);
        t.add_row(["KHV0051"]);
        let rendered = t.render();
        assert!(rendered.contains("| KHV0 |"));
        assert!(rendered.contains("| 051  |"));
    }

    #[test]
    fn sorts_descending_and_keeps_ties_in_order() {
        let mut t = Table::new(["Category", "Name"]).sort_by("Category");
        t.add_row(["Access Risk", "first"]);
        t.add_row(["Remote Code Exec", "rce"]);
        t.add_row(["Access Risk", "second"]);
        t.add_row(["Info Disclosure", "info"]);
        let names: Vec<String> = t
            .render()
            .lines()
            .filter(|l| l.starts_with('|'))
            .skip(1)
            .map(|l| l.split('|').nth(2).unwrap_or("").trim().to_string())
            .collect();
        assert_eq!(names, ["rce", "info", "first", "second"]);
    }

    #[test]
    fn generic_sort_is_stable() {
        let mut items = vec![("b", 1), ("a", 2), ("b", 3), ("c", 4), ("a", 5)];
        sort_descending_by(&mut items, |i| i.0);
        assert_eq!(items, [("c", 4), ("b", 1), ("b", 3), ("a", 2), ("a", 5)]);
    }

    #[test]
    fn short_rows_are_padded() {
        let mut t = Table::new(["A", "B"]);
        t.add_row(["x"]);
        assert!(t.render().contains("| x |   |"));
    }
}
