//! Order Sheet Commands
//!
//! Build the order table across invocations: add an item from pasted
//! comments, set prices, show, export, and clear.

use std::path::Path;

use crate::models::sheet::TableSnapshot;
use crate::services::order_sheet::OrderSheet;
use crate::services::spreadsheet::export_tsv_file;
use crate::storage::session::SessionStore;
use crate::utils::error::AppResult;

/// Parse `text` for `item` and merge it into the stored session.
pub fn add_item(store: &SessionStore, item: &str, text: &str) -> AppResult<String> {
    let mut sheet = OrderSheet::from_session(store.load()?);
    let summary = sheet.add_item(item, text)?;
    store.save(&sheet.to_session())?;
    Ok(format!(
        "Added '{}' for {} buyer(s), {} new; table has {} buyer(s)",
        summary.item,
        summary.buyers,
        summary.new_buyers,
        sheet.table().buyer_count()
    ))
}

/// Record a unit price used when rendering messages from the session.
pub fn set_price(store: &SessionStore, item: &str, price: Option<f64>) -> AppResult<String> {
    let mut sheet = OrderSheet::from_session(store.load()?);
    sheet.set_price(item, price);
    store.save(&sheet.to_session())?;
    Ok(match price {
        Some(price) => format!("Price of '{}' set to {}", item.trim(), price),
        None => format!("Price of '{}' cleared", item.trim()),
    })
}

/// Render the current table as tab-separated lines.
pub fn show(store: &SessionStore) -> AppResult<String> {
    let sheet = OrderSheet::from_session(store.load()?);
    Ok(format_snapshot(&sheet.snapshot()))
}

/// Write the table to a TSV file that `messages --sheet` can read back.
pub fn export(store: &SessionStore, out: &Path) -> AppResult<String> {
    let sheet = OrderSheet::from_session(store.load()?);
    if sheet.table().is_empty() {
        return Ok("Nothing to export".to_string());
    }
    export_tsv_file(out, sheet.table(), sheet.prices())?;
    Ok(format!(
        "Exported {} buyer(s) to {}",
        sheet.table().buyer_count(),
        out.display()
    ))
}

/// Drop the stored session.
pub fn clear(store: &SessionStore) -> AppResult<String> {
    store.clear()?;
    Ok("Order sheet cleared".to_string())
}

fn format_snapshot(snapshot: &TableSnapshot) -> String {
    if snapshot.is_empty() {
        return "Order sheet is empty".to_string();
    }
    let mut lines = Vec::with_capacity(snapshot.rows.len() + 1);
    let mut header = vec!["姓名".to_string()];
    header.extend(snapshot.columns.iter().cloned());
    lines.push(header.join("\t"));
    for row in &snapshot.rows {
        let mut line = vec![row.buyer.clone()];
        line.extend(row.cells.iter().cloned());
        lines.push(line.join("\t"));
    }
    lines.join("\n")
}
