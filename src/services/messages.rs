//! Order Message Service
//!
//! Renders one order message per buyer from the order table and the price
//! row, and provides the listing operations used when sending them out
//! (search, sort by product, export).
//!
//! Messages are a pure projection of the table: rendering again after the
//! table changes is always safe.

use std::fs;
use std::path::Path;

use tracing::debug;

use group_order_core::{format_price, OrderTable, OrderValue, PriceRow};

use crate::models::message::{MessageTemplate, OrderLine, OrderMessage};
use crate::utils::error::AppResult;

/// Render messages for every buyer with at least one ordered item.
///
/// Buyers come out in display order; items inside a message are sorted by
/// name. `today` replaces `{date}` in the title.
pub fn render_messages(
    table: &OrderTable,
    prices: &PriceRow,
    today: &str,
    template: &MessageTemplate,
) -> Vec<OrderMessage> {
    table
        .buyers()
        .into_iter()
        .filter_map(|buyer| render_message(table, prices, &buyer, today, template))
        .collect()
}

/// Render a single buyer's message, `None` when they ordered nothing.
pub fn render_message(
    table: &OrderTable,
    prices: &PriceRow,
    buyer: &str,
    today: &str,
    template: &MessageTemplate,
) -> Option<OrderMessage> {
    let row = table.row(buyer)?;
    let mut ordered: Vec<(&String, &OrderValue)> =
        row.iter().filter(|(_, value)| value.is_ordered()).collect();
    if ordered.is_empty() {
        debug!(buyer, "no ordered items, skipping message");
        return None;
    }
    ordered.sort_by(|a, b| a.0.cmp(b.0));

    let mut total = 0.0;
    let lines: Vec<OrderLine> = ordered
        .into_iter()
        .map(|(item, value)| {
            if let (Some(price), Some(qty)) = (prices.get(item), value.quantity()) {
                total += price * qty;
            }
            OrderLine {
                item: item.clone(),
                price: prices
                    .label(item)
                    .unwrap_or_else(|| template.no_price.clone()),
                quantity: value.to_string(),
            }
        })
        .collect();

    let text = compose_text(buyer, &lines, total, today, template);
    Some(OrderMessage {
        buyer: buyer.to_string(),
        lines,
        total,
        text,
    })
}

fn compose_text(
    buyer: &str,
    lines: &[OrderLine],
    total: f64,
    today: &str,
    template: &MessageTemplate,
) -> String {
    let mut out: Vec<String> = vec![template.title.replace("{date}", today), String::new()];
    out.extend(template.notice_lines.iter().cloned());
    out.push(template.divider.clone());
    out.push(format!("{}{}", template.buyer_label, buyer));

    for line in lines {
        out.push(format!("{}{}", template.item_label, line.item));
        out.push(format!("{}{}", template.price_label, line.price));
        out.push(format!("{}{}", template.quantity_label, line.quantity));
        out.push(template.item_separator.clone());
    }

    if template.show_total {
        out.push(format!("{}{}", template.total_label, format_price(total)));
    }
    out.push(template.footer.clone());
    out.join("\n")
}

/// Rendered messages plus the listing operations over them
#[derive(Debug, Clone, Default)]
pub struct MessageBook {
    messages: Vec<OrderMessage>,
}

impl MessageBook {
    pub fn new(messages: Vec<OrderMessage>) -> Self {
        Self { messages }
    }

    /// Render and collect in one step
    pub fn render(
        table: &OrderTable,
        prices: &PriceRow,
        today: &str,
        template: &MessageTemplate,
    ) -> Self {
        Self::new(render_messages(table, prices, today, template))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[OrderMessage] {
        &self.messages
    }

    pub fn get(&self, buyer: &str) -> Option<&OrderMessage> {
        self.messages.iter().find(|m| m.buyer == buyer)
    }

    /// Buyer names in display order
    pub fn names(&self) -> Vec<&str> {
        self.messages.iter().map(|m| m.buyer.as_str()).collect()
    }

    /// Buyers whose name contains `term`, ignoring case
    pub fn filter(&self, term: &str) -> Vec<&str> {
        let term = term.trim().to_lowercase();
        self.messages
            .iter()
            .map(|m| m.buyer.as_str())
            .filter(|name| name.to_lowercase().contains(&term))
            .collect()
    }

    /// Buyers who ordered `item` first, then the rest; each group by name.
    pub fn sort_by_product(&self, item: &str) -> Vec<&str> {
        let mut names: Vec<(bool, &str)> = self
            .messages
            .iter()
            .map(|m| (!m.lines.iter().any(|line| line.item == item), m.buyer.as_str()))
            .collect();
        names.sort();
        names.into_iter().map(|(_, name)| name).collect()
    }

    /// All messages as one text file body
    pub fn export_text(&self, template: &MessageTemplate) -> String {
        let mut out = String::new();
        for message in &self.messages {
            out.push_str(&format!("{}{}\n", template.buyer_label, message.buyer));
            out.push_str(&message.text);
            out.push('\n');
            out.push_str(&"=".repeat(40));
            out.push('\n');
        }
        out
    }

    /// Write [`export_text`](Self::export_text) to `path`.
    pub fn export_to_file(&self, path: &Path, template: &MessageTemplate) -> AppResult<()> {
        fs::write(path, self.export_text(template))?;
        Ok(())
    }
}
