//! Group Order Core
//!
//! Foundational value types, merge rules, and error types for the Group Order
//! workspace. This crate has no dependency on spreadsheet, CLI, or
//! configuration code.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `value` - Cell values (`OrderValue`) and incoming merge values (`RawValue`)
//! - `merge` - The value merge engine
//! - `table` - Sparse buyer × item table (`OrderTable`) and `PriceRow`
//! - `sort` - Display ordering for buyer and item names

pub mod error;
pub mod merge;
pub mod sort;
pub mod table;
pub mod value;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Values & Merging ───────────────────────────────────────────────────
pub use merge::{merge, merge_into};
pub use value::{split_composite, OrderValue, RawValue};

// ── Table ──────────────────────────────────────────────────────────────
pub use sort::{compare_display, display_key, sort_for_display};
pub use table::{format_price, OrderTable, PriceRow};
