//! In-memory statement table: a fixed column schema with explicit absent cells.
//!
//! Upstream stages hand the cleaning core a header-normalized, merged-cell
//! expanded table; downstream stages consume the cleaned one. Nothing here
//! touches files or spreadsheet formats.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// One cell of a statement table.
///
/// `Empty` is the absent marker. Whitespace-only text is NOT absent — upstream
/// normalization decides what gets blanked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    #[serde(rename = "empty")]
    Empty,
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "number")]
    Number(f64),
}

impl Cell {
    /// True iff this cell is the absent marker.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text form used for header comparison and keyword matching.
    /// Absent cells stringify to the empty string.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// One record of a table, aligned with its column list.
pub type Row = Vec<Cell>;

/// An ordered row set with a schema that is fixed at any point in the
/// pipeline. Row order is insertion order and is preserved except for
/// dropped rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build an empty table with the given column schema.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Declared column names, in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows, in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Append a row. The row must match the schema arity.
    pub fn push_row(&mut self, row: Row) -> Result<()> {
        if row.len() != self.columns.len() {
            bail!(
                "row arity {} does not match schema arity {}",
                row.len(),
                self.columns.len()
            );
        }
        self.rows.push(row);
        Ok(())
    }

    /// Cell at (row, column index), if both exist.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// New table with the same schema containing only the rows the predicate
    /// keeps, in their original relative order.
    pub fn retain_rows<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Row) -> bool,
    {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Assign a full column of values: replaces an existing column with the
    /// same name, otherwise appends a new one. `values` must have one cell
    /// per row.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) -> Result<()> {
        if values.len() != self.rows.len() {
            bail!(
                "column '{name}' has {} values for {} rows",
                values.len(),
                self.rows.len()
            );
        }
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut t = Table::new(vec!["date".into(), "amount".into()]);
        t.push_row(vec!["2024-01-01".into(), "$5.00".into()]).unwrap();
        t.push_row(vec![Cell::Empty, Cell::Number(3.5)]).unwrap();
        t
    }

    #[test]
    fn test_push_row_rejects_arity_mismatch() {
        let mut t = Table::new(vec!["date".into(), "amount".into()]);
        assert!(t.push_row(vec!["only one".into()]).is_err());
    }

    #[test]
    fn test_cell_to_text() {
        assert_eq!(Cell::Empty.to_text(), "");
        assert_eq!(Cell::Text("  hi ".into()).to_text(), "  hi ");
        assert_eq!(Cell::Number(5.0).to_text(), "5");
        assert_eq!(Cell::Number(5.25).to_text(), "5.25");
    }

    #[test]
    fn test_set_column_appends_new() {
        let mut t = sample();
        t.set_column("currency", vec!["USD".into(), "USD".into()])
            .unwrap();
        assert_eq!(t.columns(), &["date", "amount", "currency"]);
        assert_eq!(t.cell(0, 2), Some(&Cell::Text("USD".into())));
    }

    #[test]
    fn test_set_column_replaces_existing() {
        let mut t = sample();
        t.set_column("amount", vec![Cell::Number(5.0), Cell::Number(3.5)])
            .unwrap();
        assert_eq!(t.columns().len(), 2);
        assert_eq!(t.cell(0, 1), Some(&Cell::Number(5.0)));
    }

    #[test]
    fn test_set_column_rejects_wrong_length() {
        let mut t = sample();
        assert!(t.set_column("currency", vec!["USD".into()]).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let t = sample();
        let json = serde_json::to_string(&t).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
