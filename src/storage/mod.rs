//! Storage Layer
//!
//! Handles the JSON config file and the session file.

pub mod config;
pub mod session;

pub use config::*;
pub use session::*;
