//! Core Error Types
//!
//! Defines the foundational error types used across the Group Order workspace.
//! These error types only depend on thiserror + std so that the parser crate
//! can share them without pulling in spreadsheet or CLI dependencies.
//!
//! The core crate does no I/O. The application crate adds I/O,
//! serialization, spreadsheet, and config variants.

use thiserror::Error;

/// Core error type for the Group Order workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The text contained no recognizable buyer/quantity facts
    #[error("No valid order entries found")]
    NoMatch,

    /// A required input field was absent
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A price cell is non-empty but not a number
    #[error("Malformed price for '{item}': {raw}")]
    MalformedPrice { item: String, raw: String },

    /// External input has the wrong shape (e.g. a sheet without item columns)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parse errors
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create a malformed price error
    pub fn malformed_price(item: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::MalformedPrice {
            item: item.into(),
            raw: raw.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Whether the error should be shown to the user as a soft warning
    /// rather than aborting the current action.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NoMatch | Self::MissingField(_) | Self::MalformedPrice { .. }
        )
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
