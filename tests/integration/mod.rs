//! Integration Tests Module
//!
//! End-to-end tests for Group Order: comment parsing into the order table,
//! message rendering, spreadsheet import/export, the counter, and the
//! session-backed command handlers.

// Comment text → order table
mod order_sheet_test;

// Order message rendering and listing
mod messages_test;

// Spreadsheet import/export
mod spreadsheet_test;

// Product/total counter
mod counter_test;

// Command handlers over a session file
mod workflow_test;
