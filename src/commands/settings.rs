//! Settings Commands
//!
//! Commands for reading and updating application settings.

use crate::models::settings::SettingsUpdate;
use crate::storage::config::ConfigService;
use crate::utils::error::AppResult;

/// Current settings as pretty JSON
pub fn show(service: &ConfigService) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(service.get_config())?)
}

/// Apply a partial update and return the new settings
pub fn update(service: &mut ConfigService, update: SettingsUpdate) -> AppResult<String> {
    let config = service.update_config(update)?;
    Ok(serde_json::to_string_pretty(&config)?)
}

/// Restore defaults
pub fn reset(service: &mut ConfigService) -> AppResult<String> {
    service.reset()?;
    Ok(format!("Settings reset: {}", service.path().display()))
}
