//! Box-drawn tables with centred headers and right-aligned cells.
//!
//! ```text
//! ╭──────────┬──────────╮
//! │          │  Value   │
//! ├──────────┼──────────┤
//! │      a+b │        4 │
//! ╰──────────┴──────────╯
//! ```

use serde::{Deserialize, Serialize};
use unc_core::NumFormat;

use crate::error::{TableError, TableResult};

/// Default column width when neither the style nor the header asks for more.
pub const DEFAULT_WIDTH: usize = 8;

/// Default float rendering: five significant digits, `%g` style.
pub const DEFAULT_FLOAT_FORMAT: &str = ".5g";

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        Cell::Number(x)
    }
}

/// Presentation settings, loadable from a config file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// One width per column. `None` sizes each column from its header.
    pub widths: Option<Vec<usize>>,
    /// Format spec for numeric cells, e.g. `".5g"` or `".3e"`.
    pub float_format: String,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            widths: None,
            float_format: DEFAULT_FLOAT_FORMAT.to_string(),
        }
    }
}

impl TableStyle {
    pub fn number_format(&self) -> TableResult<NumFormat> {
        Ok(self.float_format.parse::<NumFormat>()?)
    }
}

#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    widths: Vec<usize>,
    float_format: NumFormat,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<H: Into<String>>(headers: impl IntoIterator<Item = H>) -> Self {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let widths = headers
            .iter()
            .map(|h| h.chars().count().max(DEFAULT_WIDTH))
            .collect();
        Self {
            headers,
            widths,
            float_format: NumFormat::general(5),
            rows: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: &TableStyle) -> TableResult<Self> {
        if let Some(widths) = &style.widths {
            self.check_columns(widths.len())?;
            self.widths = widths.clone();
        }
        self.float_format = style.number_format()?;
        Ok(self)
    }

    pub fn columns(&self) -> usize {
        self.headers.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    fn check_columns(&self, found: usize) -> TableResult<()> {
        if found != self.columns() {
            return Err(TableError::ColumnCount {
                expected: self.columns(),
                found,
            });
        }
        Ok(())
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> TableResult<()> {
        self.check_columns(row.len())?;
        self.rows.push(row);
        Ok(())
    }

    fn cell_text(&self, cell: &Cell) -> String {
        match cell {
            Cell::Text(s) => s.clone(),
            Cell::Number(x) => self.float_format.format(*x),
        }
    }

    fn rule(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        let mid = mid.to_string();
        format!("{}{}{}", left, segments.join(mid.as_str()), right)
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.rule('╭', '┬', '╮'));

        let header: Vec<String> = self
            .headers
            .iter()
            .zip(&self.widths)
            .map(|(h, &w)| format!(" {:^w$} ", h))
            .collect();
        lines.push(format!("│{}│", header.join("│")));
        lines.push(self.rule('├', '┼', '┤'));

        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&self.widths)
                .map(|(c, &w)| format!(" {:>w$} ", self.cell_text(c)))
                .collect();
            lines.push(format!("│{}│", cells.join("│")));
        }

        lines.push(self.rule('╰', '┴', '╯'));
        lines.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let style = TableStyle {
            widths: Some(vec![8, 8, 12]),
            ..TableStyle::default()
        };
        let mut table = Table::new([" ", "Value", "Uncertainty"])
            .with_style(&style)
            .unwrap();
        table
            .push_row(vec!["a".into(), 1.0.into(), 0.5.into()])
            .unwrap();
        table
            .push_row(vec!["a/b".into(), (1.0 / 3.0).into(), 0.213437.into()])
            .unwrap();
        table
    }

    #[test]
    fn renders_box_with_aligned_cells() {
        let expected = "\
╭──────────┬──────────┬──────────────╮
│          │  Value   │ Uncertainty  │
├──────────┼──────────┼──────────────┤
│        a │        1 │          0.5 │
│      a/b │  0.33333 │      0.21344 │
╰──────────┴──────────┴──────────────╯";
        assert_eq!(sample().render(), expected);
    }

    #[test]
    fn rejects_ragged_rows() {
        let mut table = sample();
        let err = table.push_row(vec!["x".into()]).unwrap_err();
        assert_eq!(
            err,
            TableError::ColumnCount {
                expected: 3,
                found: 1
            }
        );
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn widths_default_from_headers() {
        let table = Table::new(["x", "a long header"]);
        let first = table.render().lines().next().unwrap().to_string();
        // 8 + 2 and 13 + 2 dashes plus three box characters
        assert_eq!(first.chars().count(), 10 + 15 + 3);
    }

    #[test]
    fn style_validation() {
        let style = TableStyle {
            widths: Some(vec![4]),
            ..TableStyle::default()
        };
        assert!(Table::new(["a", "b"]).with_style(&style).is_err());

        let style = TableStyle {
            float_format: "nope".into(),
            ..TableStyle::default()
        };
        assert!(matches!(
            Table::new(["a"]).with_style(&style),
            Err(TableError::Format(_))
        ));
    }

    #[test]
    fn custom_float_format() {
        let style = TableStyle {
            widths: None,
            float_format: ".2e".into(),
        };
        let mut table = Table::new(["v"]).with_style(&style).unwrap();
        table.push_row(vec![1234.5.into()]).unwrap();
        assert!(table.render().contains("│ 1.23e+03 │"));
    }
}
