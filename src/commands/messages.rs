//! Order Message Commands
//!
//! Render per-buyer order messages from an uploaded sheet or from the
//! session table, then list, search, sort, show, or export them.

use std::path::PathBuf;

use chrono::Local;
use tracing::warn;

use crate::models::settings::AppConfig;
use crate::services::messages::MessageBook;
use crate::services::spreadsheet::import_order_sheet_file;
use crate::storage::session::SessionStore;
use crate::utils::error::{AppError, AppResult};

/// Options for one `messages` invocation
#[derive(Debug, Clone, Default)]
pub struct MessagesRequest {
    /// Order sheet to read; the session table is used when absent
    pub sheet: Option<PathBuf>,
    /// Only list buyers whose name contains this
    pub search: Option<String>,
    /// List buyers who ordered this item first
    pub sort_by: Option<String>,
    /// Print only this buyer's message
    pub buyer: Option<String>,
    /// Write all messages to this file
    pub export: Option<PathBuf>,
    /// Date shown in the title; today when absent
    pub date: Option<String>,
}

/// Today's date in the configured format
pub fn today_label(config: &AppConfig) -> String {
    Local::now().format(&config.date_format).to_string()
}

/// Build the message book for a request.
pub fn build_book(
    store: &SessionStore,
    config: &AppConfig,
    request: &MessagesRequest,
) -> AppResult<MessageBook> {
    let (table, prices) = match &request.sheet {
        Some(path) => {
            let imported = import_order_sheet_file(path)?;
            if !imported.malformed_prices.is_empty() {
                warn!(items = ?imported.malformed_prices, "some prices could not be read");
            }
            (imported.table, imported.prices)
        }
        None => {
            let session = store.load()?;
            (session.table, session.prices)
        }
    };

    let today = request.date.clone().unwrap_or_else(|| today_label(config));
    Ok(MessageBook::render(&table, &prices, &today, &config.message))
}

/// Run a `messages` request and return the text to print.
pub fn run(store: &SessionStore, config: &AppConfig, request: &MessagesRequest) -> AppResult<String> {
    let book = build_book(store, config, request)?;
    if book.is_empty() {
        return Ok("No order messages".to_string());
    }

    if let Some(buyer) = &request.buyer {
        return book
            .get(buyer.trim())
            .map(|message| message.text.clone())
            .ok_or_else(|| AppError::not_found(format!("no order message for '{}'", buyer)));
    }

    if let Some(path) = &request.export {
        book.export_to_file(path, &config.message)?;
        return Ok(format!(
            "Exported {} message(s) to {}",
            book.len(),
            path.display()
        ));
    }

    let names: Vec<&str> = match (&request.sort_by, &request.search) {
        (Some(item), search) => {
            let sorted = book.sort_by_product(item);
            match search {
                Some(term) => {
                    let matched = book.filter(term);
                    sorted.into_iter().filter(|n| matched.contains(n)).collect()
                }
                None => sorted,
            }
        }
        (None, Some(term)) => book.filter(term),
        (None, None) => book.names(),
    };

    Ok(names.join("\n"))
}
