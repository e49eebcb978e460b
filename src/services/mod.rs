//! Services
//!
//! Business logic services for the application.
//! Services handle the core functionality and are called by commands.

pub mod messages;
pub mod order_sheet;
pub mod spreadsheet;

pub use messages::{render_message, render_messages, MessageBook};
pub use order_sheet::OrderSheet;
pub use spreadsheet::{
    export_tsv, export_tsv_file, import_order_sheet, import_order_sheet_file, parse_tsv,
    read_grid, ImportedSheet,
};
