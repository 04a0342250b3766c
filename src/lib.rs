/*!
# Solace

Solace is a single-user command-line journal with AI reflections. The user
types an entry, a chat-completion service returns a short reflective
comment, and both are persisted to a local SQLite database.

## Core Features

- Interactive two-option menu: write an entry, or exit
- One reflection per entry, generated by a configurable chat model
- Append-only local storage; entries are never modified or deleted
- Service failures are stored as readable error text instead of aborting

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading from the environment
- `errors`: Error handling infrastructure
- `db`: SQLite storage with per-operation connections
- `ai`: Completion client, prompts, and reflection generation
- `ops`: The interactive menu loop

## Usage Example

```rust,no_run
use solace::ai::ChatClient;
use solace::db::Storage;
use solace::{ops, Config};

fn main() -> solace::AppResult<()> {
    let config = Config::load()?;
    let storage = Storage::new(&config.database_path);
    storage.initialize()?;

    let client = ChatClient::new(&config.api_base_url, config.api_key.clone());
    ops::menu::run(&storage, &client, &config.model)
}
```
*/

/// AI client, prompts, and reflection generation
pub mod ai;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized constants
pub mod constants;
/// SQLite storage for journal entries
pub mod db;
/// Error types and utilities for error handling
pub mod errors;
/// User-facing operations
pub mod ops;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
