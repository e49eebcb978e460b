//! Spreadsheet Integration Tests
//!
//! Order sheets on disk:
//! - TSV import with prices, blank cells, and malformed prices
//! - Workbook import through calamine (`fixtures/orders.xlsx`)
//! - Export followed by import gives the same table
//! - Layout errors

use group_order::services::messages::render_messages;
use group_order::services::spreadsheet::{export_tsv_file, import_order_sheet_file, read_grid};
use group_order::{AppError, Cell, CoreError, MessageTemplate, OrderSheet, OrderValue};

fn write_sheet(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_import_tsv_sheet() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write_sheet(
        temp_dir.path(),
        "orders.tsv",
        "\t姓名\t蛋糕\t麵包\n\t單價\t120\t免費\n\t王小明\t2\t\n\tAmy\t\tM+1\n",
    );

    let imported = import_order_sheet_file(&path).unwrap();
    assert_eq!(imported.items, vec!["蛋糕", "麵包"]);
    assert_eq!(imported.prices.get("蛋糕"), Some(120.0));
    assert_eq!(imported.prices.get("麵包"), None);
    assert_eq!(imported.malformed_prices, vec!["麵包"]);
    assert_eq!(imported.table.get("王小明", "蛋糕"), &OrderValue::Numeric(2));
    assert_eq!(
        imported.table.get("Amy", "麵包"),
        &OrderValue::Composite("M".to_string(), 1)
    );
}

#[test]
fn test_sheet_quantities_drive_message_totals() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write_sheet(
        temp_dir.path(),
        "orders.tsv",
        "\t姓名\t蛋糕\t果醬\n\t單價\t100\t10\n\t王小明\t-1\t\n\tAmy\t\t1.5\n",
    );

    let imported = import_order_sheet_file(&path).unwrap();
    let messages = render_messages(
        &imported.table,
        &imported.prices,
        "10/19",
        &MessageTemplate::default(),
    );
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].buyer, "Amy");
    assert_eq!(messages[0].total, 15.0);
    assert!(messages[0].text.contains("品項單價：10\n數量品項：1.5\n"));
}

#[test]
fn test_export_then_import() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("export.tsv");

    let mut sheet = OrderSheet::new();
    sheet.add_item("A", "王小明 +2\nAmy\nM+1").unwrap();
    sheet.add_item("B", "bob +3").unwrap();
    sheet.set_price("A", Some(45.5));
    export_tsv_file(&path, sheet.table(), sheet.prices()).unwrap();

    let imported = import_order_sheet_file(&path).unwrap();
    assert_eq!(&imported.table, sheet.table());
    assert_eq!(imported.prices.get("A"), Some(45.5));
    assert_eq!(imported.prices.get("B"), None);
}

#[test]
fn test_sheet_without_item_columns_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = write_sheet(temp_dir.path(), "bad.tsv", "\t姓名\n\t單價\n\t王小明\n");
    let err = import_order_sheet_file(&path).unwrap_err();
    assert!(matches!(err, AppError::Core(CoreError::InvalidInput(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let err = import_order_sheet_file(&temp_dir.path().join("missing.tsv")).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}

fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("integration")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_read_workbook_pads_to_first_column() {
    // Data starts at B1; column A is blank.
    let grid = read_grid(&fixture("orders.xlsx")).unwrap();
    assert_eq!(grid.row_count(), 4);
    assert_eq!(grid.cell(0, 0), &Cell::Empty);
    assert_eq!(grid.cell(0, 1), &Cell::Text("姓名".to_string()));
    assert_eq!(grid.cell(1, 2), &Cell::Number(120.0));
    assert_eq!(grid.cell(2, 3), &Cell::Text("M+1".to_string()));
}

#[test]
fn test_import_workbook() {
    let imported = import_order_sheet_file(&fixture("orders.xlsx")).unwrap();

    assert_eq!(imported.items, vec!["蛋糕", "果醬"]);
    assert_eq!(imported.prices.get("蛋糕"), Some(120.0));
    assert_eq!(imported.prices.get("果醬"), Some(35.5));
    assert!(imported.malformed_prices.is_empty());

    let table = &imported.table;
    assert_eq!(table.buyers(), vec!["Amy", "王小明"]);
    assert_eq!(table.get("王小明", "蛋糕"), &OrderValue::Numeric(2));
    assert_eq!(
        table.get("王小明", "果醬"),
        &OrderValue::Composite("M".to_string(), 1)
    );
    assert_eq!(table.get("Amy", "蛋糕"), &OrderValue::Empty);
    assert_eq!(table.get("Amy", "果醬"), &OrderValue::Numeric(1));
}
