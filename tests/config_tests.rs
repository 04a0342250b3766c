use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::tempdir;

use solace::config::Config;
use solace::errors::AppError;

const CONFIG_VARS: [&str; 6] = [
    "SOLACE_DB",
    "SOLACE_API_KEY",
    "OPENAI_API_KEY",
    "SOLACE_API_URL",
    "SOLACE_MODEL",
    "HOME",
];

// Snapshot and restore the environment variables the config reads, so each
// test leaves the process environment as it found it.
fn snapshot_env() -> Vec<(&'static str, Option<String>)> {
    CONFIG_VARS.iter().map(|v| (*v, env::var(v).ok())).collect()
}

fn restore_env(saved: Vec<(&'static str, Option<String>)>) {
    for (key, value) in saved {
        match value {
            Some(val) => env::set_var(key, val),
            None => env::remove_var(key),
        }
    }
}

#[test]
#[serial]
fn test_config_load_with_environment_vars() {
    let saved = snapshot_env();

    env::set_var("SOLACE_DB", "/tmp/solace-test/journal.db");
    env::set_var("SOLACE_API_KEY", "test-key");
    env::set_var("SOLACE_API_URL", "http://localhost:9999/v1");
    env::set_var("SOLACE_MODEL", "test-model");

    let config = Config::load().unwrap();

    assert_eq!(
        config.database_path,
        PathBuf::from("/tmp/solace-test/journal.db")
    );
    assert_eq!(config.api_key.as_deref(), Some("test-key"));
    assert_eq!(config.api_base_url, "http://localhost:9999/v1");
    assert_eq!(config.model, "test-model");

    restore_env(saved);
}

#[test]
#[serial]
fn test_config_load_with_fallbacks() {
    let saved = snapshot_env();

    env::remove_var("SOLACE_DB");
    env::remove_var("SOLACE_API_KEY");
    env::remove_var("OPENAI_API_KEY");
    env::remove_var("SOLACE_API_URL");
    env::remove_var("SOLACE_MODEL");

    let config = Config::load().unwrap();

    assert_eq!(config.database_path, PathBuf::from("journal.db"));
    assert!(config.api_key.is_none());
    assert_eq!(config.api_base_url, "https://api.openai.com/v1");
    assert_eq!(config.model, "gpt-4o-mini");

    restore_env(saved);
}

#[test]
#[serial]
fn test_credential_precedence() {
    let saved = snapshot_env();

    // SOLACE_API_KEY wins over OPENAI_API_KEY
    env::set_var("SOLACE_API_KEY", "solace-key");
    env::set_var("OPENAI_API_KEY", "openai-key");
    let config = Config::load().unwrap();
    assert_eq!(config.api_key.as_deref(), Some("solace-key"));

    // OPENAI_API_KEY is used as a fallback
    env::remove_var("SOLACE_API_KEY");
    let config = Config::load().unwrap();
    assert_eq!(config.api_key.as_deref(), Some("openai-key"));

    restore_env(saved);
}

#[test]
#[serial]
fn test_database_path_tilde_expansion() {
    let saved = snapshot_env();

    let temp_dir = tempdir().unwrap();
    let home_path = temp_dir.path().to_string_lossy().to_string();
    env::set_var("HOME", &home_path);
    env::set_var("SOLACE_DB", "~/solace.db");

    let config = Config::load().unwrap();
    assert_eq!(
        config.database_path,
        PathBuf::from(&home_path).join("solace.db")
    );

    restore_env(saved);
}

#[test]
#[serial]
fn test_empty_database_path_is_rejected() {
    let saved = snapshot_env();

    env::set_var("SOLACE_DB", "");
    let result = Config::load();

    match result {
        Err(AppError::Config(message)) => {
            assert!(message.contains("empty"));
        }
        other => panic!("Expected Config error, got {:?}", other.map(|c| format!("{:?}", c))),
    }

    restore_env(saved);
}
