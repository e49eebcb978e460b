//! Session Storage
//!
//! Keeps the order table between command invocations as a JSON dump.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use group_order_core::{OrderTable, PriceRow};

use crate::utils::error::AppResult;
use crate::utils::paths::{ensure_dir, session_path};

/// Everything a session carries between commands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub table: OrderTable,
    #[serde(default)]
    pub prices: PriceRow,
}

/// Reads and writes [`SessionData`] at a fixed path
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location (~/.group-order/session.json)
    pub fn default_location() -> AppResult<Self> {
        Ok(Self::new(session_path()?))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session; a missing file is an empty session.
    pub fn load(&self) -> AppResult<SessionData> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no session file, starting empty");
            return Ok(SessionData::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, data: &SessionData) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(data)?)?;
        Ok(())
    }

    /// Remove the session file if present.
    pub fn clear(&self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
