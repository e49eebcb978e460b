//! Counter Integration Tests

use group_order::StatsMode;
use group_order_parser::{compute_stats, count_by_product, count_total};

const COMMENTS: &str = "A+1\nb 2\nC*3\na+4\n謝謝";

#[test]
fn test_product_mode_merges_case() {
    assert_eq!(
        count_by_product(COMMENTS),
        vec![
            ("A".to_string(), 5),
            ("B".to_string(), 2),
            ("C".to_string(), 3)
        ]
    );
}

#[test]
fn test_total_mode_counts_marked_numbers_only() {
    assert_eq!(count_total(COMMENTS), 8);
    assert_eq!(count_total("A+1\nb 2\nC*3"), 4);
}

#[test]
fn test_clipboard_text() {
    assert_eq!(
        compute_stats(COMMENTS, StatsMode::Product).clipboard_text(),
        "A.5,B.2,C.3"
    );
    assert_eq!(compute_stats(COMMENTS, StatsMode::Total).clipboard_text(), "8");
}

#[test]
fn test_empty_text() {
    assert!(compute_stats("", StatsMode::Product).rows().is_empty());
    assert_eq!(compute_stats("", StatsMode::Total).clipboard_text(), "0");
}

#[test]
fn test_mode_from_str() {
    assert_eq!("total".parse::<StatsMode>().unwrap(), StatsMode::Total);
    assert!("bogus".parse::<StatsMode>().is_err());
}
