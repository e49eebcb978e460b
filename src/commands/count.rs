//! Counter Command
//!
//! Flat product/total counts over pasted comments.

use group_order_parser::{compute_stats, StatsMode};

/// Count `text` and format the result table plus the clipboard string.
pub fn run(text: &str, mode: StatsMode) -> String {
    let report = compute_stats(text, mode);
    let mut lines: Vec<String> = report
        .rows()
        .into_iter()
        .map(|(code, count)| format!("{}\t{}", code, count))
        .collect();
    lines.push(String::new());
    lines.push(format!("clipboard: {}", report.clipboard_text()));
    lines.join("\n")
}
