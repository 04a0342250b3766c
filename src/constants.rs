//! Constants used throughout the application.
//!
//! This module contains all constants used in the solace application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "solace";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A daily journal with AI reflections";

// Configuration Keys & Environment Variables
/// Environment variable for the database file path.
pub const ENV_VAR_SOLACE_DB: &str = "SOLACE_DB";
/// Environment variable for the completion service credential.
pub const ENV_VAR_SOLACE_API_KEY: &str = "SOLACE_API_KEY";
/// Standard environment variable used as a credential fallback.
pub const ENV_VAR_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable for the completion service base URL.
pub const ENV_VAR_SOLACE_API_URL: &str = "SOLACE_API_URL";
/// Environment variable for the chat model identifier.
pub const ENV_VAR_SOLACE_MODEL: &str = "SOLACE_MODEL";

// Defaults
/// Default database file, relative to the working directory.
pub const DEFAULT_DATABASE_FILE: &str = "journal.db";
/// Default base URL of the completion service.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";
/// Default chat model used for reflections.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";

// AI Parameters
/// Maximum number of tokens requested for a reflection.
pub const REFLECTION_MAX_TOKENS: u32 = 150;

// Logging Configuration
/// Default log filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter applied by the --verbose flag.
pub const VERBOSE_LOG_FILTER: &str = "solace=debug";
