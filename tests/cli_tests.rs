//! CLI command tests
//!
//! Run with: cargo test --test cli_tests

use std::fs;

use simplebank::auth::{new_maker, TokenKind};
use simplebank::cli::commands::{run_token_action, write_default_config};
use simplebank::cli::TokenAction;
use simplebank::config::{load_config_from_path, Config};
use tempfile::TempDir;

const KEY: &str = "cli-test-key-cli-test-key-012345";

fn config(kind: TokenKind) -> Config {
    let mut config = Config::default();
    config.token.kind = kind;
    config.token.symmetric_key = KEY.to_string();
    config
}

#[test]
fn test_cli_init_creates_config_file() {
    let dir = TempDir::new().unwrap();

    let path = write_default_config(dir.path())
        .unwrap()
        .expect("config should be created");

    assert!(path.exists());
    let config = load_config_from_path(&path).expect("generated config must load");
    assert_eq!(config.server.port, 8080);
}

#[test]
fn test_cli_init_prevents_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("simplebank.toml");
    fs::write(&path, "# custom\n").unwrap();

    let result = write_default_config(dir.path()).unwrap();

    assert!(result.is_none());
    assert_eq!(fs::read_to_string(&path).unwrap(), "# custom\n");
}

#[test]
fn test_cli_token_issue_then_verify() {
    for kind in [TokenKind::Jwt, TokenKind::Paseto] {
        let config = config(kind);

        let issued = run_token_action(
            &config,
            TokenAction::Issue {
                username: "alice".to_string(),
                duration_secs: Some(120),
                refresh: false,
            },
        )
        .expect("issue should succeed");

        assert_eq!(issued.username(), "alice");
        assert_eq!(issued.expired_at() - issued.issued_at(), chrono::Duration::seconds(120));
    }
}

#[test]
fn test_cli_token_verify_accepts_valid_token() {
    let config = config(TokenKind::Paseto);
    let maker = new_maker(TokenKind::Paseto, KEY).unwrap();
    let (token, payload) = maker.create_token("bob", chrono::Duration::minutes(5)).unwrap();

    let verified = run_token_action(&config, TokenAction::Verify { token }).unwrap();
    assert_eq!(verified, payload);
}

#[test]
fn test_cli_token_verify_rejects_bad_token() {
    let config = config(TokenKind::Jwt);

    let result = run_token_action(
        &config,
        TokenAction::Verify {
            token: "not.a.token".to_string(),
        },
    );

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "token is invalid");
}

#[test]
fn test_cli_token_issue_rejects_negative_duration() {
    let config = config(TokenKind::Jwt);

    let result = run_token_action(
        &config,
        TokenAction::Issue {
            username: "alice".to_string(),
            duration_secs: Some(-60),
            refresh: false,
        },
    );

    assert!(result.is_err());
}

#[test]
fn test_cli_token_issue_rejects_invalid_config() {
    let mut config = config(TokenKind::Jwt);
    config.token.access_token_duration_secs = -1;

    let result = run_token_action(
        &config,
        TokenAction::Issue {
            username: "alice".to_string(),
            duration_secs: None,
            refresh: false,
        },
    );

    assert!(result.is_err());
}
