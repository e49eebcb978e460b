//! Order Values
//!
//! Tagged cell values for the buyer × item order table, plus the raw
//! incoming side of a merge.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Generic `<text>+<digits>` shape, e.g. `M+1` or `紅色 L + 2`.
fn composite_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(.*?)\s*\+\s*([0-9]+)$").expect("composite pattern is valid")
    })
}

/// Split a trimmed string into `(prefix, quantity)` if it has the
/// `<text>+<digits>` shape.
pub fn split_composite(text: &str) -> Option<(String, u64)> {
    let caps = composite_pattern().captures(text.trim())?;
    let qty = caps.get(2)?.as_str().parse::<u64>().ok()?;
    Some((caps.get(1)?.as_str().to_string(), qty))
}

/// A single cell of the order table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OrderValue {
    /// Plain non-negative count
    Numeric(u64),
    /// Label plus count, rendered as `{prefix}+{n}`
    Composite(String, u64),
    /// Anything else, kept verbatim
    FreeText(String),
    /// No order
    #[default]
    Empty,
}

impl OrderValue {
    /// Build a value from a raw string: composite when it has the
    /// `<text>+<digits>` shape, free text otherwise. Blank text is `Empty`.
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return OrderValue::Empty;
        }
        match split_composite(text) {
            Some((prefix, qty)) => OrderValue::Composite(prefix, qty),
            None => OrderValue::FreeText(text.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OrderValue::Empty)
    }

    /// Whether the cell counts as an order when rendering messages:
    /// a positive quantity, or any non-numeric text that is not blank.
    pub fn is_ordered(&self) -> bool {
        match self {
            OrderValue::Numeric(n) => *n > 0,
            OrderValue::Composite(..) => true,
            OrderValue::FreeText(s) => match self.quantity() {
                Some(q) => q > 0.0,
                None => !s.trim().is_empty(),
            },
            OrderValue::Empty => false,
        }
    }

    /// Quantity used for totals: counts, and text that reads as a finite
    /// number (a `1.5` sheet cell). Composite and other text have none.
    pub fn quantity(&self) -> Option<f64> {
        match self {
            OrderValue::Numeric(n) => Some(*n as f64),
            OrderValue::FreeText(s) => s.trim().parse::<f64>().ok().filter(|q| q.is_finite()),
            _ => None,
        }
    }
}

impl fmt::Display for OrderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderValue::Numeric(n) => write!(f, "{}", n),
            OrderValue::Composite(prefix, n) => write!(f, "{}+{}", prefix, n),
            OrderValue::FreeText(s) => write!(f, "{}", s.trim()),
            OrderValue::Empty => Ok(()),
        }
    }
}

/// Incoming value of a merge: a parsed integer or the raw line text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Int(u64),
    Text(String),
}

impl RawValue {
    /// Convert into a stored value as if merged into an empty cell.
    pub fn into_value(self) -> OrderValue {
        match self {
            RawValue::Int(n) => OrderValue::Numeric(n),
            RawValue::Text(s) => OrderValue::from_text(&s),
        }
    }
}

impl From<OrderValue> for RawValue {
    fn from(value: OrderValue) -> Self {
        match value {
            OrderValue::Numeric(n) => RawValue::Int(n),
            other => RawValue::Text(other.to_string()),
        }
    }
}

impl From<u64> for RawValue {
    fn from(n: u64) -> Self {
        RawValue::Int(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}
