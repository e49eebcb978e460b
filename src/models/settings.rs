//! Settings Models
//!
//! Application configuration and settings data structures.

use chrono::format::{Item, StrftimeItems};
use group_order_parser::StatsMode;
use serde::{Deserialize, Serialize};

use crate::models::message::MessageTemplate;

/// Application configuration stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// chrono format for the date in message titles
    pub date_format: String,
    /// Counter mode used when none is given
    #[serde(default)]
    pub default_stats_mode: StatsMode,
    /// Order message strings
    #[serde(default)]
    pub message: MessageTemplate,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            date_format: "%m/%d".to_string(),
            default_stats_mode: StatsMode::Product,
            message: MessageTemplate::default(),
        }
    }
}

/// Settings update request (partial update)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsUpdate {
    pub date_format: Option<String>,
    pub default_stats_mode: Option<StatsMode>,
    pub title: Option<String>,
    pub notice_lines: Option<Vec<String>>,
    pub footer: Option<String>,
    pub no_price: Option<String>,
    pub show_total: Option<bool>,
}

impl AppConfig {
    /// Apply a partial update to the configuration
    pub fn apply_update(&mut self, update: SettingsUpdate) {
        if let Some(date_format) = update.date_format {
            self.date_format = date_format;
        }
        if let Some(mode) = update.default_stats_mode {
            self.default_stats_mode = mode;
        }
        if let Some(title) = update.title {
            self.message.title = title;
        }
        if let Some(lines) = update.notice_lines {
            self.message.notice_lines = lines;
        }
        if let Some(footer) = update.footer {
            self.message.footer = footer;
        }
        if let Some(no_price) = update.no_price {
            self.message.no_price = no_price;
        }
        if let Some(show_total) = update.show_total {
            self.message.show_total = show_total;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.date_format.trim().is_empty() {
            return Err("date_format cannot be empty".to_string());
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(format!("Invalid date_format: {}", self.date_format));
        }

        if self.message.no_price.trim().is_empty() {
            return Err("message.no_price cannot be empty".to_string());
        }

        Ok(())
    }
}
