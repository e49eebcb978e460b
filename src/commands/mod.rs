//! Commands
//!
//! Entry points called by the command-line front end. Each command loads
//! what it needs, calls into the services, and returns the text to print.

pub mod count;
pub mod messages;
pub mod settings;
pub mod sheet;
