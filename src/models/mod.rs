//! Data Models
//!
//! Contains all data structures used throughout the application.

pub mod message;
pub mod settings;
pub mod sheet;

pub use message::*;
pub use settings::*;
pub use sheet::*;
