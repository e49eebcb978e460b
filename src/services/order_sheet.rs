//! Order Sheet Service
//!
//! Owns the order table for one session. Each "add item" call parses a
//! pasted comment block and merges it into the table; nothing is ever
//! overwritten wholesale.

use tracing::info;

use group_order_core::{OrderTable, PriceRow};
use group_order_parser::{add_item_from_text, AddItemSummary};

use crate::models::sheet::TableSnapshot;
use crate::storage::session::SessionData;
use crate::utils::error::AppResult;

/// The buyer × item table being built in a session
#[derive(Debug, Clone, Default)]
pub struct OrderSheet {
    table: OrderTable,
    prices: PriceRow,
}

impl OrderSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from stored session data
    pub fn from_session(data: SessionData) -> Self {
        Self {
            table: data.table,
            prices: data.prices,
        }
    }

    /// Parse `text` and merge every buyer's value under `item`.
    ///
    /// Fails with `MissingField` before parsing when `item` is blank, and
    /// with `NoMatch` when the text has no recognizable orders. The table
    /// is unchanged in both cases.
    pub fn add_item(&mut self, item: &str, text: &str) -> AppResult<AddItemSummary> {
        let summary = add_item_from_text(&mut self.table, item, text)?;
        info!(
            item = %summary.item,
            buyers = self.table.buyer_count(),
            "order sheet updated"
        );
        Ok(summary)
    }

    /// Record a price for an item, used when rendering messages.
    pub fn set_price(&mut self, item: &str, price: Option<f64>) {
        self.prices.set(item.trim(), price);
    }

    pub fn table(&self) -> &OrderTable {
        &self.table
    }

    pub fn prices(&self) -> &PriceRow {
        &self.prices
    }

    /// Display layout of the current table
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::from_table(&self.table)
    }

    /// Explicitly drop all buyers, items, and prices.
    pub fn clear(&mut self) {
        self.table.clear();
        self.prices = PriceRow::new();
    }

    pub fn to_session(&self) -> SessionData {
        SessionData {
            table: self.table.clone(),
            prices: self.prices.clone(),
        }
    }
}
