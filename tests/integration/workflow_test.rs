//! Command Workflow Integration Tests
//!
//! The command handlers as the CLI drives them, sharing one session file:
//! add items, set a price, export, then render messages from the export.

use group_order::commands::{self, messages::MessagesRequest};
use group_order::storage::{ConfigService, SessionStore};
use group_order::{AppConfig, AppError, SettingsUpdate};

fn temp_store(dir: &std::path::Path) -> SessionStore {
    SessionStore::new(dir.join("session.json"))
}

#[test]
fn test_add_show_and_clear() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_store(temp_dir.path());

    commands::sheet::add_item(&store, "A", "王小明 +2\nAmy\nM+1").unwrap();
    commands::sheet::add_item(&store, "B", "王小明 +1").unwrap();

    let shown = commands::sheet::show(&store).unwrap();
    assert_eq!(shown, "姓名\tA\tB\nAmy\tM+1\t\n王小明\t2\t1");

    commands::sheet::clear(&store).unwrap();
    assert_eq!(commands::sheet::show(&store).unwrap(), "Order sheet is empty");
}

#[test]
fn test_export_feeds_messages() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_store(temp_dir.path());
    let export_path = temp_dir.path().join("orders.tsv");

    commands::sheet::add_item(&store, "A", "王小明 +2").unwrap();
    commands::sheet::set_price(&store, "A", Some(30.0)).unwrap();
    commands::sheet::export(&store, &export_path).unwrap();
    commands::sheet::clear(&store).unwrap();

    let request = MessagesRequest {
        sheet: Some(export_path),
        buyer: Some("王小明".to_string()),
        date: Some("10/19".to_string()),
        ..Default::default()
    };
    let text = commands::messages::run(&store, &AppConfig::default(), &request).unwrap();
    assert!(text.contains("訂購商品：A\n品項單價：30\n數量品項：2"));
}

#[test]
fn test_unknown_buyer_is_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_store(temp_dir.path());
    commands::sheet::add_item(&store, "A", "王小明 +2").unwrap();

    let request = MessagesRequest {
        buyer: Some("nobody".to_string()),
        ..Default::default()
    };
    let err = commands::messages::run(&store, &AppConfig::default(), &request).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn test_config_changes_message_title() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = temp_store(temp_dir.path());
    let mut config = ConfigService::open(temp_dir.path().join("config.json")).unwrap();

    commands::settings::update(
        &mut config,
        SettingsUpdate {
            title: Some("團購 {date}".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    commands::sheet::add_item(&store, "A", "王小明 +2").unwrap();

    let reopened = ConfigService::open(temp_dir.path().join("config.json")).unwrap();
    let request = MessagesRequest {
        buyer: Some("王小明".to_string()),
        date: Some("10/19".to_string()),
        ..Default::default()
    };
    let text = commands::messages::run(&store, reopened.get_config(), &request).unwrap();
    assert!(text.starts_with("團購 10/19\n"));
}
