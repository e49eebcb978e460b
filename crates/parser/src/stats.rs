//! Order Counter
//!
//! Flat counts over comment text, with no buyer attribution:
//!
//! - **product** mode sums every `<letter>[+*]<digits>` per uppercased letter
//!   (`A+1`, `b 2`, `C*3`); the symbol is optional.
//! - **total** mode sums every `+<digits>` / `*<digits>`; a bare number with
//!   no symbol in front does not count.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use group_order_core::CoreError;

use crate::normalize::normalize;

fn product_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"([A-Za-z])\s*[+*]?\s*([0-9]+)").unwrap())
}

fn total_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[+*]\s*([0-9]+)").unwrap())
}

/// Counter mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsMode {
    /// Per product code
    #[default]
    Product,
    /// Single grand total
    Total,
}

impl fmt::Display for StatsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsMode::Product => write!(f, "product"),
            StatsMode::Total => write!(f, "total"),
        }
    }
}

impl FromStr for StatsMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "product" => Ok(StatsMode::Product),
            "total" => Ok(StatsMode::Total),
            other => Err(CoreError::parse(format!("unknown statistics mode: {}", other))),
        }
    }
}

/// Counter output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum StatsReport {
    /// `(code, quantity)` sorted by code
    Product { counts: Vec<(String, u64)> },
    /// Sum of all marked quantities
    Total { total: u64 },
}

impl StatsReport {
    /// Two-column rows for a result table; total mode yields `("TOTAL", n)`.
    pub fn rows(&self) -> Vec<(String, u64)> {
        match self {
            StatsReport::Product { counts } => counts.clone(),
            StatsReport::Total { total } => vec![("TOTAL".to_string(), *total)],
        }
    }

    /// Compact form for pasting: `A.1,B.2` or the bare total.
    pub fn clipboard_text(&self) -> String {
        match self {
            StatsReport::Product { counts } => counts
                .iter()
                .map(|(code, count)| format!("{}.{}", code, count))
                .collect::<Vec<_>>()
                .join(","),
            StatsReport::Total { total } => total.to_string(),
        }
    }
}

/// Per-letter sums, sorted by code.
pub fn count_by_product(text: &str) -> Vec<(String, u64)> {
    let text = normalize(text);
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for caps in product_pattern().captures_iter(&text) {
        let Ok(qty) = caps[2].parse::<u64>() else {
            continue;
        };
        let slot = counts.entry(caps[1].to_uppercase()).or_default();
        *slot = slot.saturating_add(qty);
    }
    counts.into_iter().collect()
}

/// Sum of every `+n` / `*n`.
pub fn count_total(text: &str) -> u64 {
    let text = normalize(text);
    total_pattern()
        .captures_iter(&text)
        .filter_map(|caps| caps[1].parse::<u64>().ok())
        .fold(0u64, |acc, n| acc.saturating_add(n))
}

/// Run the counter in the given mode.
pub fn compute_stats(text: &str, mode: StatsMode) -> StatsReport {
    match mode {
        StatsMode::Product => StatsReport::Product {
            counts: count_by_product(text),
        },
        StatsMode::Total => StatsReport::Total {
            total: count_total(text),
        },
    }
}
