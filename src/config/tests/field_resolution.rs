//! Tests for field resolution methods (`require_board_name`,
//! `resolve_credentials`, `export_config`, `output_dir`, `api_base_url`).

use camino::Utf8PathBuf;
use rstest::rstest;

use crate::TrelloExportConfig;
use crate::error::ExportError;
use crate::export::ListSelection;
use crate::trello::{DEFAULT_API_BASE, TrelloCredentials};

#[rstest]
fn require_board_name_trims_value() {
    let config = TrelloExportConfig {
        board: Some("  Sprint 1 ".to_owned()),
        ..Default::default()
    };

    assert_eq!(config.require_board_name(), Ok("Sprint 1"));
}

#[rstest]
#[case::unset(None)]
#[case::blank(Some("   "))]
fn require_board_name_rejects_missing_or_blank(#[case] board: Option<&str>) {
    let config = TrelloExportConfig {
        board: board.map(ToOwned::to_owned),
        ..Default::default()
    };

    assert_eq!(
        config.require_board_name(),
        Err(ExportError::MissingBoardName)
    );
}

#[rstest]
fn set_board_name_overrides_configured_board() {
    let mut config = TrelloExportConfig {
        board: Some("From file".to_owned()),
        ..Default::default()
    };

    config.set_board_name("From CLI".to_owned());

    assert_eq!(config.require_board_name(), Ok("From CLI"));
}

#[rstest]
fn resolve_credentials_uses_configured_values() {
    let _guard = env_lock::lock_env([("TRELLO_API_KEY", None::<&str>), ("TRELLO_TOKEN", None)]);
    let config = TrelloExportConfig {
        key: Some("my-key".to_owned()),
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    let credentials = config
        .resolve_credentials()
        .expect("credentials should resolve");

    assert_eq!(credentials.key().value(), "my-key");
    assert_eq!(credentials.token().value(), "my-token");
}

#[rstest]
fn resolve_credentials_falls_back_to_legacy_variables() {
    let _guard = env_lock::lock_env([
        ("TRELLO_API_KEY", Some("legacy-key")),
        ("TRELLO_TOKEN", Some("legacy-token")),
    ]);
    let config = TrelloExportConfig::default();

    let credentials = config.resolve_credentials();

    assert_eq!(
        credentials,
        TrelloCredentials::from_raw("legacy-key", "legacy-token")
    );
}

#[rstest]
fn configured_values_win_over_legacy_variables() {
    let _guard = env_lock::lock_env([
        ("TRELLO_API_KEY", Some("legacy-key")),
        ("TRELLO_TOKEN", Some("legacy-token")),
    ]);
    let config = TrelloExportConfig {
        key: Some("configured-key".to_owned()),
        ..Default::default()
    };

    let credentials = config
        .resolve_credentials()
        .expect("credentials should resolve");

    assert_eq!(credentials.key().value(), "configured-key");
    assert_eq!(credentials.token().value(), "legacy-token");
}

#[rstest]
#[case::no_key(None, Some("token"), ExportError::MissingApiKey)]
#[case::no_token(Some("key"), None, ExportError::MissingToken)]
#[case::blank_key(Some("  "), Some("token"), ExportError::MissingApiKey)]
#[case::blank_token(Some("key"), Some(""), ExportError::MissingToken)]
fn resolve_credentials_reports_missing_values(
    #[case] key: Option<&str>,
    #[case] token: Option<&str>,
    #[case] expected: ExportError,
) {
    let _guard = env_lock::lock_env([("TRELLO_API_KEY", None::<&str>), ("TRELLO_TOKEN", None)]);
    let config = TrelloExportConfig {
        key: key.map(ToOwned::to_owned),
        token: token.map(ToOwned::to_owned),
        ..Default::default()
    };

    assert_eq!(config.resolve_credentials(), Err(expected));
}

#[rstest]
fn debug_output_redacts_secrets() {
    let config = TrelloExportConfig {
        key: Some("key-value".to_owned()),
        secret: Some("secret-value".to_owned()),
        token: Some("token-value".to_owned()),
        ..Default::default()
    };

    let rendered = format!("{config:?}");

    assert!(!rendered.contains("key-value"), "key leaked: {rendered}");
    assert!(!rendered.contains("secret-value"), "secret leaked: {rendered}");
    assert!(!rendered.contains("token-value"), "token leaked: {rendered}");
}

#[rstest]
fn export_config_maps_flags() {
    let config = TrelloExportConfig {
        lists: Some("To-Do, Done".to_owned()),
        prefix: Some("Story".to_owned()),
        no_numbering: true,
        comments: true,
        merge: true,
        ..Default::default()
    };

    let export = config.export_config();

    assert_eq!(export.lists, Some(ListSelection::parse("To-Do,Done")));
    assert_eq!(export.prefix.as_deref(), Some("Story"));
    assert!(!export.numbering);
    assert!(export.comments);
    assert!(export.merge);
}

#[rstest]
#[case::unset(None)]
#[case::only_separators(Some(" , ,"))]
fn export_config_selects_all_lists_without_usable_names(#[case] lists: Option<&str>) {
    let config = TrelloExportConfig {
        lists: lists.map(ToOwned::to_owned),
        ..Default::default()
    };

    assert_eq!(config.export_config().lists, None);
}

#[rstest]
#[case::unset(None, ".")]
#[case::blank(Some(" "), ".")]
#[case::configured(Some("exports/sprint"), "exports/sprint")]
fn output_dir_defaults_to_current_directory(#[case] dir: Option<&str>, #[case] expected: &str) {
    let config = TrelloExportConfig {
        output_dir: dir.map(ToOwned::to_owned),
        ..Default::default()
    };

    assert_eq!(config.output_dir(), Utf8PathBuf::from(expected));
}

#[rstest]
fn api_base_url_defaults_to_trello() {
    assert_eq!(TrelloExportConfig::default().api_base_url(), DEFAULT_API_BASE);

    let config = TrelloExportConfig {
        api_base_url: Some("http://127.0.0.1:8080/1".to_owned()),
        ..Default::default()
    };
    assert_eq!(config.api_base_url(), "http://127.0.0.1:8080/1");
}
