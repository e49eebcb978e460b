//! Group Order - Application Library
//!
//! Tools for running a social-media group buy from pasted comment text:
//! - Order sheet: build a buyer × item table one item at a time
//! - Order messages: render one message per buyer from a sheet or the table
//! - Order counter: flat product/total counts
//!
//! The parsing and merge engine lives in the `group-order-parser` and
//! `group-order-core` crates; this crate adds spreadsheet I/O, settings,
//! session storage, and the command handlers behind the CLI.

pub mod commands;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use group_order_core::{CoreError, CoreResult, OrderTable, OrderValue, PriceRow, RawValue};
pub use group_order_parser::{StatsMode, StatsReport};

pub use models::message::{MessageTemplate, OrderLine, OrderMessage};
pub use models::settings::{AppConfig, SettingsUpdate};
pub use models::sheet::{Cell, SheetGrid, TableSnapshot};
pub use services::{MessageBook, OrderSheet};
pub use utils::error::{AppError, AppResult};
