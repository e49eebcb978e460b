//! Order Message Models
//!
//! Rendered per-buyer order messages and the template strings used to
//! build them.

use serde::{Deserialize, Serialize};

/// Fixed strings of an order message. `{date}` in `title` is replaced with
/// the day the messages are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplate {
    pub title: String,
    pub notice_lines: Vec<String>,
    pub divider: String,
    pub buyer_label: String,
    pub item_label: String,
    pub price_label: String,
    pub quantity_label: String,
    pub item_separator: String,
    pub footer: String,
    /// Shown instead of a price when the sheet has none
    pub no_price: String,
    /// Append a total line after the items
    pub show_total: bool,
    pub total_label: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            title: "*熊熊媽團團轉{date}訂購清單*".to_string(),
            notice_lines: vec![
                "#取貨時間三點到七點".to_string(),
                "#本日到貨狀況請留意公告".to_string(),
            ],
            divider: "================".to_string(),
            buyer_label: "訂購人：".to_string(),
            item_label: "訂購商品：".to_string(),
            price_label: "品項單價：".to_string(),
            quantity_label: "數量品項：".to_string(),
            item_separator: "----------------".to_string(),
            footer: "已讀請回覆訊息喔~".to_string(),
            no_price: "無價格".to_string(),
            show_total: false,
            total_label: "總金額：".to_string(),
        }
    }
}

/// One ordered item inside a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: String,
    /// Price text, or the no-price sentinel
    pub price: String,
    /// Rendered cell value
    pub quantity: String,
}

/// A buyer's rendered order message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMessage {
    pub buyer: String,
    pub lines: Vec<OrderLine>,
    /// Sum of price × quantity over numeric quantities with a price
    pub total: f64,
    pub text: String,
}
