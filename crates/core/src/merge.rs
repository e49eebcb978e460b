//! Value Merge Engine
//!
//! Combines an existing cell value with an incoming value for the same
//! buyer/item. This is the only place where numeric and textual values mix:
//!
//! 1. An empty cell takes the incoming value as-is.
//! 2. Two counts are summed.
//! 3. Otherwise both sides are rendered; equal `<prefix>+<n>` prefixes sum,
//!    anything else becomes the sorted, deduplicated, space-joined text.
//!
//! Rule 3's fallback keeps both strings but no longer sums their counts
//! (`M+1` with `L+2` gives `"L+2 M+1"`).

use std::collections::BTreeSet;

use tracing::debug;

use crate::value::{split_composite, OrderValue, RawValue};

/// Merge `incoming` into `existing`, returning the new cell value.
pub fn merge(existing: &OrderValue, incoming: RawValue) -> OrderValue {
    match (existing, incoming) {
        (OrderValue::Empty, incoming) => incoming.into_value(),
        (OrderValue::Numeric(a), RawValue::Int(b)) => OrderValue::Numeric(a.saturating_add(b)),
        (existing, incoming) => {
            let old = existing.to_string();
            let new = match incoming {
                RawValue::Int(n) => n.to_string(),
                RawValue::Text(s) => s.trim().to_string(),
            };
            if new.is_empty() {
                return existing.clone();
            }

            match (split_composite(&old), split_composite(&new)) {
                (Some((p_old, n_old)), Some((p_new, n_new))) if p_old == p_new => {
                    OrderValue::Composite(p_old, n_old.saturating_add(n_new))
                }
                _ => {
                    debug!(old = %old, new = %new, "joining values with different shapes");
                    let joined: BTreeSet<String> = [old, new].into_iter().collect();
                    OrderValue::FreeText(joined.into_iter().collect::<Vec<_>>().join(" "))
                }
            }
        }
    }
}

/// Merge `incoming` into `slot` in place.
pub fn merge_into(slot: &mut OrderValue, incoming: impl Into<RawValue>) {
    *slot = merge(slot, incoming.into());
}
