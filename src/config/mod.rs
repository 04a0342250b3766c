//! Configuration management for the solace application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. A local `.env` file, when
//! present, is loaded by `main` before this module reads the environment.
//!
//! # Environment Variables
//!
//! - `SOLACE_DB`: Path to the database file (defaults to "journal.db")
//! - `SOLACE_API_KEY`: Credential for the completion service
//! - `OPENAI_API_KEY`: Fallback credential if SOLACE_API_KEY is not set
//! - `SOLACE_API_URL`: Base URL of the completion service
//! - `SOLACE_MODEL`: Chat model identifier used for reflections

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_DATABASE_FILE, ENV_VAR_OPENAI_API_KEY,
    ENV_VAR_SOLACE_API_KEY, ENV_VAR_SOLACE_API_URL, ENV_VAR_SOLACE_DB, ENV_VAR_SOLACE_MODEL,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the solace application.
///
/// The credential is carried here and handed to the chat client at
/// construction time. Nothing below `main` reads the process environment,
/// which keeps the components testable with injected values.
pub struct Config {
    /// Path to the SQLite database file holding journal entries.
    pub database_path: PathBuf,

    /// Credential for the completion service.
    ///
    /// `None` when neither SOLACE_API_KEY nor OPENAI_API_KEY is set. This is
    /// not a load-time error: the reflection generator surfaces the missing
    /// credential as stored error text instead.
    pub api_key: Option<String>,

    /// Base URL of the completion service.
    pub api_base_url: String,

    /// Chat model identifier used for reflections.
    pub model: String,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_path", &self.database_path)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The database path is expanded with `shellexpand` so `~` and environment
    /// variable references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The database path expansion fails
    /// - The database path is empty after expansion
    pub fn load() -> AppResult<Self> {
        let database_path_raw =
            env::var(ENV_VAR_SOLACE_DB).unwrap_or_else(|_| DEFAULT_DATABASE_FILE.to_string());

        let expanded_path = shellexpand::full(&database_path_raw)
            .map_err(|e| AppError::Config(format!("Failed to expand database path: {}", e)))?;
        let database_path = PathBuf::from(expanded_path.into_owned());

        if database_path.as_os_str().is_empty() {
            return Err(AppError::Config("Database path is empty".to_string()));
        }

        let api_key = env::var(ENV_VAR_SOLACE_API_KEY)
            .or_else(|_| env::var(ENV_VAR_OPENAI_API_KEY))
            .ok();

        let api_base_url =
            env::var(ENV_VAR_SOLACE_API_URL).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let model =
            env::var(ENV_VAR_SOLACE_MODEL).unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());

        Ok(Config {
            database_path,
            api_key,
            api_base_url,
            model,
        })
    }
}
