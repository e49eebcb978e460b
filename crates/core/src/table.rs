//! Order Table
//!
//! Sparse buyer × item table and the per-item price row.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::merge::merge;
use crate::sort::sort_for_display;
use crate::value::{OrderValue, RawValue};

/// Buyer → Item → value. Missing cells are `Empty`; `Empty` is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTable {
    rows: BTreeMap<String, BTreeMap<String, OrderValue>>,
}

impl OrderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `incoming` into the cell at (`buyer`, `item`).
    ///
    /// The buyer row is created on first sighting even when the merged
    /// value turns out empty, so buyer keys never disappear.
    pub fn merge_cell(&mut self, buyer: &str, item: &str, incoming: RawValue) {
        let row = self.rows.entry(buyer.trim().to_string()).or_default();
        let current = row.get(item).cloned().unwrap_or_default();
        let merged = merge(&current, incoming);
        if merged.is_empty() {
            return;
        }
        row.insert(item.to_string(), merged);
    }

    /// Cell value, `Empty` when absent.
    pub fn get(&self, buyer: &str, item: &str) -> &OrderValue {
        static EMPTY: OrderValue = OrderValue::Empty;
        self.rows
            .get(buyer)
            .and_then(|row| row.get(item))
            .unwrap_or(&EMPTY)
    }

    /// All stored cells of one buyer.
    pub fn row(&self, buyer: &str) -> Option<&BTreeMap<String, OrderValue>> {
        self.rows.get(buyer)
    }

    pub fn contains_buyer(&self, buyer: &str) -> bool {
        self.rows.contains_key(buyer)
    }

    /// Buyers in display order.
    pub fn buyers(&self) -> Vec<String> {
        sort_for_display(self.rows.keys().cloned())
    }

    /// Union of items across all buyers, in display order.
    pub fn items(&self) -> Vec<String> {
        let items: BTreeSet<String> = self
            .rows
            .values()
            .flat_map(|row| row.keys().cloned())
            .collect();
        sort_for_display(items)
    }

    pub fn buyer_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, OrderValue>)> {
        self.rows.iter()
    }

    /// Drop every row. Only called on an explicit user request.
    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

/// Item → price. `None` means the sheet had no usable price.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    prices: BTreeMap<String, Option<f64>>,
}

impl PriceRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, item: impl Into<String>, price: Option<f64>) {
        self.prices.insert(item.into(), price);
    }

    pub fn get(&self, item: &str) -> Option<f64> {
        self.prices.get(item).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Price text as shown in messages, `None` when there is no price.
    pub fn label(&self, item: &str) -> Option<String> {
        self.get(item).map(format_price)
    }
}

/// Whole prices print without decimals, others with two.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 && price.abs() < 1e15 {
        format!("{}", price as i64)
    } else {
        format!("{:.2}", price)
    }
}
