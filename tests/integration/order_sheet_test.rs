//! Order Sheet Integration Tests
//!
//! Pasted comment blocks merged into the order table across several items:
//! - Noise filtering (reply markers, timestamps, edited comments)
//! - Name/quantity and name/continuation layouts
//! - Full-width input
//! - Merging repeated buyers and repeated items

use group_order::{CoreError, OrderSheet, OrderValue};
use group_order_parser::parse_orders;

// ============================================================================
// Helpers
// ============================================================================

const FACEBOOK_PASTE: &str = "\
王小明 +2
3天
回覆
翻譯年糕
Amy
M+1
5小時
回覆
林小美
+1
2
陳大文 +1 · 已編輯
";

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_noise_lines_never_produce_buyers() {
    let orders = parse_orders(FACEBOOK_PASTE);
    let buyers: Vec<&str> = orders.keys().map(String::as_str).collect();
    assert_eq!(buyers.len(), 3);
    assert!(orders.contains_key("王小明"));
    assert!(orders.contains_key("Amy"));
    assert!(orders.contains_key("林小美"));
    assert!(!orders.contains_key("陳大文"));
}

#[test]
fn test_paste_values() {
    let orders = parse_orders(FACEBOOK_PASTE);
    assert_eq!(orders["王小明"], OrderValue::Numeric(2));
    assert_eq!(orders["Amy"], OrderValue::Composite("M".to_string(), 1));
    assert_eq!(orders["林小美"], OrderValue::Numeric(3));
}

#[test]
fn test_full_width_input_is_folded() {
    let orders = parse_orders("王小明　＋２\nＡｍｙ\nＭ＋１");
    assert_eq!(orders["王小明"], OrderValue::Numeric(2));
    assert_eq!(orders["Amy"], OrderValue::Composite("M".to_string(), 1));
}

#[test]
fn test_repeated_buyer_in_one_block_merges() {
    let orders = parse_orders("王小明 +2\n王小明 +3");
    assert_eq!(orders["王小明"], OrderValue::Numeric(5));
}

#[test]
fn test_lines_before_any_name_are_dropped() {
    let orders = parse_orders("+3\nM+1\n王小明 +1");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders["王小明"], OrderValue::Numeric(1));
}

// ============================================================================
// Table building
// ============================================================================

#[test]
fn test_items_accumulate_per_buyer() {
    let mut sheet = OrderSheet::new();
    sheet.add_item("蛋糕", FACEBOOK_PASTE).unwrap();
    sheet.add_item("麵包", "王小明 +1\nbob +4").unwrap();
    sheet.add_item("蛋糕", "王小明 +1\nAmy\nM+2").unwrap();

    let table = sheet.table();
    assert_eq!(table.get("王小明", "蛋糕"), &OrderValue::Numeric(3));
    assert_eq!(table.get("王小明", "麵包"), &OrderValue::Numeric(1));
    assert_eq!(
        table.get("Amy", "蛋糕"),
        &OrderValue::Composite("M".to_string(), 3)
    );
    assert_eq!(table.get("Amy", "麵包"), &OrderValue::Empty);
    assert_eq!(table.buyers(), vec!["Amy", "bob", "林小美", "王小明"]);
}

#[test]
fn test_mismatched_prefixes_keep_both_texts() {
    let mut sheet = OrderSheet::new();
    sheet.add_item("T恤", "Amy\nM+1").unwrap();
    sheet.add_item("T恤", "Amy\nL+2").unwrap();
    assert_eq!(
        sheet.table().get("Amy", "T恤"),
        &OrderValue::FreeText("L+2 M+1".to_string())
    );
}

#[test]
fn test_blank_item_name_is_rejected() {
    let mut sheet = OrderSheet::new();
    let err = sheet.add_item("   ", "王小明 +2").unwrap_err();
    assert_eq!(err.to_string(), CoreError::missing_field("item name").to_string());
    assert!(sheet.table().is_empty());
}

#[test]
fn test_noise_only_block_is_no_match() {
    let mut sheet = OrderSheet::new();
    let err = sheet.add_item("蛋糕", "回覆\n3天\n\n").unwrap_err();
    assert!(matches!(err, group_order::AppError::Core(CoreError::NoMatch)));
}
