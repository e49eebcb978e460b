//! Spreadsheet Import/Export
//!
//! The order sheet layout shared by import and export:
//!
//! | row | column 0 | column 1     | columns 2..      |
//! |-----|----------|--------------|------------------|
//! | 0   |          | header label | item names       |
//! | 1   |          | price label  | price per item   |
//! | 2.. |          | buyer name   | quantity cells   |
//!
//! Workbooks (xlsx/xls/ods) are read through calamine; anything else is
//! read as tab-separated text, which is also the export format.

use std::fs;
use std::path::Path;

use calamine::{Data, Reader};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use group_order_core::{format_price, CoreError, OrderTable, PriceRow, RawValue};

use crate::models::sheet::{Cell, SheetGrid};
use crate::utils::error::{AppError, AppResult};

/// Extensions opened with calamine
const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// First column holding an item
const FIRST_ITEM_COL: usize = 2;
/// Column holding buyer names
const NAME_COL: usize = 1;
/// Row holding prices
const PRICE_ROW: usize = 1;
/// First row holding a buyer
const FIRST_BUYER_ROW: usize = 2;

/// Header label written above the buyer names on export
pub const NAME_HEADER: &str = "姓名";
/// Label written in the price row on export
pub const PRICE_LABEL: &str = "單價";

/// Result of importing an order sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedSheet {
    pub table: OrderTable,
    pub prices: PriceRow,
    /// Item names in sheet column order
    pub items: Vec<String>,
    /// Items whose price cell could not be read; they render without price
    pub malformed_prices: Vec<String>,
}

/// Read the first worksheet (or a TSV file) into a grid.
pub fn read_grid(path: &Path) -> AppResult<SheetGrid> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        read_workbook(path)
    } else {
        Ok(parse_tsv(&fs::read_to_string(path)?))
    }
}

fn read_workbook(path: &Path) -> AppResult<SheetGrid> {
    let mut workbook = calamine::open_workbook_auto(path)?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AppError::spreadsheet(format!("{} has no sheets", path.display())))?;
    let range = workbook.worksheet_range(&sheet_name)?;

    // calamine ranges start at the first used cell; pad back to A1.
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(cell_from_data));
        rows.push(cells);
    }

    info!(sheet = %sheet_name, rows = rows.len(), "read workbook");
    Ok(SheetGrid::new(rows))
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Float(n) => Cell::Number(*n),
        Data::String(s) => Cell::parse(s),
        other => Cell::Text(other.to_string()),
    }
}

/// Split tab-separated text into a grid.
pub fn parse_tsv(text: &str) -> SheetGrid {
    let mut lines: Vec<&str> = text.lines().map(|line| line.trim_end_matches('\r')).collect();
    // Blank rows in the middle keep their position; trailing ones are dropped.
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    let rows = lines
        .into_iter()
        .map(|line| line.split('\t').map(Cell::parse).collect())
        .collect();
    SheetGrid::new(rows)
}

/// Read a price cell. Blank is no price; text that is not a number is an
/// error the caller degrades to no price.
fn read_price(item: &str, cell: &Cell) -> Result<Option<f64>, CoreError> {
    match cell {
        Cell::Empty => Ok(None),
        Cell::Number(n) => Ok(Some(*n)),
        Cell::Text(s) if s.trim().is_empty() => Ok(None),
        Cell::Text(s) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| CoreError::malformed_price(item, s.trim())),
    }
}

/// Turn a quantity cell into an incoming merge value.
///
/// Numbers at or below zero are not orders. Fractional quantities stay
/// numeric text so they still count toward message totals.
fn read_quantity(cell: &Cell) -> Option<RawValue> {
    match cell {
        Cell::Empty => None,
        Cell::Number(n) if *n <= 0.0 => None,
        Cell::Number(n) if n.fract() == 0.0 => Some(RawValue::Int(*n as u64)),
        Cell::Number(_) => Some(RawValue::Text(cell.display())),
        Cell::Text(s) if s.trim().is_empty() => None,
        Cell::Text(s) => Some(RawValue::Text(s.clone())),
    }
}

/// Build the order table and price row from a sheet grid.
///
/// Fails fast when the grid cannot hold an order sheet at all.
pub fn import_order_sheet(grid: &SheetGrid) -> AppResult<ImportedSheet> {
    if grid.row_count() <= PRICE_ROW {
        return Err(CoreError::invalid_input("sheet needs a header row and a price row").into());
    }
    if grid.column_count() <= FIRST_ITEM_COL {
        return Err(CoreError::invalid_input(format!(
            "sheet needs at least {} columns (blank, name, items...)",
            FIRST_ITEM_COL + 1
        ))
        .into());
    }

    let mut imported = ImportedSheet::default();
    let mut columns: Vec<(usize, String)> = Vec::new();

    for col in FIRST_ITEM_COL..grid.column_count() {
        let item = grid.cell(0, col).display();
        if item.is_empty() {
            warn!(column = col, "skipping column without an item name");
            continue;
        }

        let price = match read_price(&item, grid.cell(PRICE_ROW, col)) {
            Ok(price) => price,
            Err(err) => {
                warn!(error = %err, "using no price");
                imported.malformed_prices.push(item.clone());
                None
            }
        };
        imported.prices.set(item.clone(), price);
        if !imported.items.contains(&item) {
            imported.items.push(item.clone());
        }
        columns.push((col, item));
    }

    if columns.is_empty() {
        return Err(CoreError::invalid_input("sheet has no item columns").into());
    }

    for row in FIRST_BUYER_ROW..grid.row_count() {
        let buyer = grid.cell(row, NAME_COL).display();
        if buyer.is_empty() {
            continue;
        }
        // Registers the buyer even if every cell is blank.
        imported
            .table
            .merge_cell(&buyer, &columns[0].1, RawValue::Text(String::new()));
        for (col, item) in &columns {
            if let Some(value) = read_quantity(grid.cell(row, *col)) {
                imported.table.merge_cell(&buyer, item, value);
            }
        }
    }

    info!(
        buyers = imported.table.buyer_count(),
        items = imported.items.len(),
        "imported order sheet"
    );
    Ok(imported)
}

/// Read and import an order sheet file.
pub fn import_order_sheet_file(path: &Path) -> AppResult<ImportedSheet> {
    import_order_sheet(&read_grid(path)?)
}

fn sanitize(cell: &str) -> String {
    cell.replace(['\t', '\r', '\n'], " ")
}

/// Lay the table out as tab-separated text readable by [`import_order_sheet`].
pub fn export_tsv(table: &OrderTable, prices: &PriceRow) -> String {
    let items = table.items();
    let mut lines: Vec<String> = Vec::with_capacity(table.buyer_count() + 2);

    let mut header = vec![String::new(), NAME_HEADER.to_string()];
    header.extend(items.iter().map(|item| sanitize(item)));
    lines.push(header.join("\t"));

    let mut price_row = vec![String::new(), PRICE_LABEL.to_string()];
    price_row.extend(
        items
            .iter()
            .map(|item| prices.get(item).map(format_price).unwrap_or_default()),
    );
    lines.push(price_row.join("\t"));

    for buyer in table.buyers() {
        let mut row = vec![String::new(), sanitize(&buyer)];
        row.extend(
            items
                .iter()
                .map(|item| sanitize(&table.get(&buyer, item).to_string())),
        );
        lines.push(row.join("\t"));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Write [`export_tsv`] output to `path`.
pub fn export_tsv_file(path: &Path, table: &OrderTable, prices: &PriceRow) -> AppResult<()> {
    fs::write(path, export_tsv(table, prices))?;
    Ok(())
}
