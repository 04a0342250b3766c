//! Error handling utilities for the solace application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use thiserror::Error;

/// Represents specific error cases that can occur during database operations.
///
/// # Examples
///
/// ```
/// use solace::errors::DatabaseError;
///
/// let error = DatabaseError::Sqlite(rusqlite::Error::QueryReturnedNoRows);
/// assert!(format!("{}", error).contains("Database error"));
/// ```
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Represents specific error cases that can occur while requesting a
/// reflection from the completion service.
///
/// These errors never reach the interactive loop: the reflection generator
/// converts every variant into stored error text. They exist so the failure
/// mode is still visible in logs and in tests.
///
/// # Examples
///
/// ```
/// use solace::errors::ReflectionError;
///
/// let error = ReflectionError::Api { status: 401, body: "unauthorized".to_string() };
/// assert!(format!("{}", error).contains("401"));
/// ```
#[derive(Debug, Error)]
pub enum ReflectionError {
    /// No API credential was configured for the completion service.
    #[error("no API credential configured. Set SOLACE_API_KEY or OPENAI_API_KEY")]
    MissingCredential,

    /// The HTTP request could not be sent or completed.
    #[error("completion request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The completion service answered with a non-success status.
    #[error("completion service returned HTTP {status}: {body}")]
    Api {
        /// HTTP status code returned by the service
        status: u16,
        /// Response body text, included verbatim for diagnosis
        body: String,
    },

    /// The response body could not be interpreted as a completion.
    #[error("unexpected response from completion service: {0}")]
    MalformedResponse(String),
}

/// Represents all possible errors that can occur in the solace application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use solace::errors::AppError;
///
/// let error = AppError::Config("Database path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Database path is empty");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from terminal reads and writes.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors related to database operations.
    #[error("{0}")]
    Database(#[from] DatabaseError),

    /// Errors related to the completion service.
    ///
    /// Present for completeness: the reflection generator swallows these
    /// before they can propagate, so this variant only appears when a caller
    /// uses the chat client directly.
    #[error("Reflection error: {0}")]
    Reflection(#[from] ReflectionError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;
