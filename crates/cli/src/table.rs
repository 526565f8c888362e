//! Plain text tables for `list` and `info`.

use std::io::{stdout, IsTerminal};

use crossterm::style::Stylize;
use itertools::Itertools;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<S: ToString>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(|cell| cell.to_string()).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        (0..self.headers.len())
            .map(|column| {
                std::iter::once(&self.headers)
                    .chain(self.rows.iter())
                    .filter_map(|row| row.get(column))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Renders the table with a border; headers are bold when `styled`.
    pub fn render(&self, styled: bool) -> String {
        let widths = self.widths();
        let border = format!(
            "+{}+",
            widths.iter().map(|width| "-".repeat(width + 2)).join("+")
        );

        let format_row = |row: &[String], bold: bool| {
            let cells = widths.iter().enumerate().map(|(column, &width)| {
                let cell = row.get(column).map(String::as_str).unwrap_or_default();
                let padded = format!("{cell:<width$}");
                if bold {
                    padded.bold().to_string()
                } else {
                    padded
                }
            });
            format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
        };

        let mut lines = vec![border.clone(), format_row(&self.headers, styled), border.clone()];
        lines.extend(self.rows.iter().map(|row| format_row(row, false)));
        if !self.rows.is_empty() {
            lines.push(border);
        }

        lines.join("\n")
    }

    /// Renders for stdout, styling only when it is a terminal.
    pub fn render_for_stdout(&self) -> String {
        self.render(stdout().is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let mut table = Table::new(["#", "Name"]);
        table.push_row(["1", "build"]);
        table.push_row(["2", "deploy_prod"]);

        let expected = "\
+---+-------------+
| # | Name        |
+---+-------------+
| 1 | build       |
| 2 | deploy_prod |
+---+-------------+";
        assert_eq!(table.render(false), expected);
    }

    #[test]
    fn test_render_counts_characters_not_bytes() {
        let mut table = Table::new(["Value"]);
        table.push_row(["héllo"]);
        assert!(table.render(false).contains("| héllo |"));
    }

    #[test]
    fn test_render_styled_headers() {
        let table = Table::new(["Name"]);
        let rendered = table.render(true);
        assert!(rendered.contains("\u{1b}["));
        assert!(table.is_empty());
    }
}
