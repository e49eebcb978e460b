//! Order Table Builder
//!
//! Drives the line classifier over a comment block and collects one value
//! per buyer, then merges those values into the shared order table under a
//! single item name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use group_order_core::{merge_into, CoreError, CoreResult, OrderTable, OrderValue, RawValue};

use crate::classify::{classify, interpret_continuation, LineEvent};
use crate::normalize::{normalize, split_lines};

/// Buyer → value for one parsed comment block.
pub type ParsedOrders = BTreeMap<String, OrderValue>;

/// Result of merging one item into the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemSummary {
    /// Item name as stored
    pub item: String,
    /// Buyers whose cell was merged
    pub buyers: usize,
    /// Buyers seen for the first time
    pub new_buyers: usize,
}

/// Parse a comment block into per-buyer values.
///
/// Returns an empty map when nothing recognizable is found; callers decide
/// how to report that.
pub fn parse_orders(text: &str) -> ParsedOrders {
    let text = normalize(text);
    let mut orders = ParsedOrders::new();
    let mut current: Option<String> = None;

    for raw in split_lines(&text) {
        match classify(raw) {
            LineEvent::Noise => {}
            LineEvent::NameWithQuantity { name, qty } => {
                merge_into(orders.entry(name).or_default(), qty);
                current = None;
            }
            LineEvent::NameOnly { name } => {
                current = Some(name);
            }
            LineEvent::Continuation { line } => match &current {
                Some(buyer) => {
                    let value = interpret_continuation(&line);
                    merge_into(orders.entry(buyer.clone()).or_default(), value);
                }
                None => debug!(line = %line, "dropping line with no buyer"),
            },
        }
    }

    // A buyer whose only continuation was blank text never got a value.
    orders.retain(|_, value| !value.is_empty());
    orders
}

/// Merge parsed values into `table[buyer][item]`.
pub fn add_item(
    table: &mut OrderTable,
    item: &str,
    parsed: &ParsedOrders,
) -> CoreResult<AddItemSummary> {
    let item = item.trim();
    if item.is_empty() {
        return Err(CoreError::missing_field("item name"));
    }
    if parsed.is_empty() {
        return Err(CoreError::NoMatch);
    }

    let mut new_buyers = 0;
    for (buyer, value) in parsed {
        if !table.contains_buyer(buyer) {
            new_buyers += 1;
        }
        table.merge_cell(buyer, item, RawValue::from(value.clone()));
    }

    info!(item, buyers = parsed.len(), new_buyers, "merged item into order table");
    Ok(AddItemSummary {
        item: item.to_string(),
        buyers: parsed.len(),
        new_buyers,
    })
}

/// Validate the item name, parse `text`, and merge the result.
///
/// The item name is checked before any parsing happens.
pub fn add_item_from_text(
    table: &mut OrderTable,
    item: &str,
    text: &str,
) -> CoreResult<AddItemSummary> {
    if item.trim().is_empty() {
        return Err(CoreError::missing_field("item name"));
    }
    let parsed = parse_orders(text);
    add_item(table, item, &parsed)
}
