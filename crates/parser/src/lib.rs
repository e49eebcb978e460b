//! Group Order Parser
//!
//! Turns pasted group-buy comment text into structured orders:
//!
//! - `normalize` - Full-width to half-width folding (NFKC)
//! - `classify` - Per-line classification (`LineEvent`)
//! - `builder` - Buyer-tracking parse pass and merge into an `OrderTable`
//! - `stats` - Product-code and grand-total counters
//!
//! Value types, merge rules, and errors live in `group-order-core`.

pub mod builder;
pub mod classify;
pub mod normalize;
pub mod stats;

// Re-export builder entry points
pub use builder::{add_item, add_item_from_text, parse_orders, AddItemSummary, ParsedOrders};

// Re-export classifier
pub use classify::{classify, interpret_continuation, is_noise, LineEvent};

// Re-export normalizer
pub use normalize::{normalize, split_lines};

// Re-export counters
pub use stats::{compute_stats, count_by_product, count_total, StatsMode, StatsReport};
