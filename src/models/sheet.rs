//! Sheet Models
//!
//! A spreadsheet-agnostic grid of cells, and the display snapshot of the
//! order table.

use serde::{Deserialize, Serialize};

use group_order_core::{format_price, OrderTable};

/// One spreadsheet cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Read a cell from plain text: blank, a number, or text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Cell::Empty;
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Cell::Number(n),
            _ => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }

    /// Cell text as a person would read it; whole numbers have no decimals.
    pub fn display(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Number(n) if n.fract() == 0.0 => format_price(*n),
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
        }
    }
}

/// Rows of cells; row 0 is the header row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetGrid {
    pub rows: Vec<Vec<Cell>>,
}

impl SheetGrid {
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Cell at (`row`, `col`), `Empty` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Widest row length
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// One buyer row of a [`TableSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub buyer: String,
    /// Rendered cell per column, blank when the buyer has no entry
    pub cells: Vec<String>,
}

/// The order table laid out for display or export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub columns: Vec<String>,
    pub rows: Vec<SnapshotRow>,
}

impl TableSnapshot {
    /// Build from the table, buyers and items in display order.
    pub fn from_table(table: &OrderTable) -> Self {
        let columns = table.items();
        let rows = table
            .buyers()
            .into_iter()
            .map(|buyer| {
                let cells = columns
                    .iter()
                    .map(|item| table.get(&buyer, item).to_string())
                    .collect();
                SnapshotRow { buyer, cells }
            })
            .collect();
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
