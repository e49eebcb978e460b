//! Order Message Integration Tests
//!
//! Messages rendered from a table built out of pasted comments:
//! - Exact text layout for a single buyer
//! - Price sentinel and totals
//! - Listing, searching, sorting, and exporting

use group_order::services::messages::{render_message, MessageBook};
use group_order::{MessageTemplate, OrderSheet};

// ============================================================================
// Helpers
// ============================================================================

fn build_sheet() -> OrderSheet {
    let mut sheet = OrderSheet::new();
    sheet.add_item("A", "王小明 +2\nAmy\nM+1").unwrap();
    sheet.add_item("B", "bob +3\n王小明 +1").unwrap();
    sheet.set_price("A", Some(100.0));
    sheet
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_single_item_message() {
    let mut sheet = OrderSheet::new();
    sheet.add_item("A", "王小明 +2").unwrap();

    let message = render_message(
        sheet.table(),
        sheet.prices(),
        "王小明",
        "10/19",
        &MessageTemplate::default(),
    )
    .unwrap();

    assert!(message.text.contains("訂購人：王小明\n訂購商品：A\n品項單價：無價格\n數量品項：2\n"));
    assert!(message.text.starts_with("*熊熊媽團團轉10/19訂購清單*\n\n"));
    assert!(message.text.ends_with("----------------\n已讀請回覆訊息喔~"));
}

#[test]
fn test_total_counts_priced_numeric_items() {
    let sheet = build_sheet();
    let book = MessageBook::render(
        sheet.table(),
        sheet.prices(),
        "10/19",
        &MessageTemplate::default(),
    );
    assert_eq!(book.get("王小明").unwrap().total, 200.0);
    assert_eq!(book.get("Amy").unwrap().total, 0.0);
    assert_eq!(book.get("bob").unwrap().lines[0].price, "無價格");
}

#[test]
fn test_custom_template() {
    let sheet = build_sheet();
    let template = MessageTemplate {
        title: "Orders {date}".to_string(),
        notice_lines: Vec::new(),
        footer: "Thanks".to_string(),
        show_total: true,
        ..Default::default()
    };
    let message =
        render_message(sheet.table(), sheet.prices(), "王小明", "Oct 19", &template).unwrap();
    assert!(message.text.starts_with("Orders Oct 19\n\n================\n"));
    assert!(message.text.ends_with("總金額：200\nThanks"));
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_listing_operations() {
    let sheet = build_sheet();
    let book = MessageBook::render(
        sheet.table(),
        sheet.prices(),
        "10/19",
        &MessageTemplate::default(),
    );

    assert_eq!(book.names(), vec!["Amy", "bob", "王小明"]);
    assert_eq!(book.filter("王"), vec!["王小明"]);
    assert!(book.filter("nobody").is_empty());
    assert_eq!(book.sort_by_product("B"), vec!["bob", "王小明", "Amy"]);
}

#[test]
fn test_export_to_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("messages.txt");
    let template = MessageTemplate::default();
    let sheet = build_sheet();
    let book = MessageBook::render(sheet.table(), sheet.prices(), "10/19", &template);

    book.export_to_file(&path, &template).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.matches("已讀請回覆訊息喔~").count(), 3);
    assert!(content.starts_with("訂購人：Amy\n"));
}
