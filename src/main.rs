/*!
# Solace - A Daily Journal with AI Reflections

Solace is a command-line journal. Each entry you write is sent to a
chat-completion service for a short reflective comment, and the pair is
saved to a local SQLite database.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```
solace [OPTIONS]

Options:
  -v, --verbose    Enable verbose output
  -h, --help       Print help information
  -V, --version    Print version information
```

## Configuration

The application can be configured with the following environment variables
(a local `.env` file is loaded when present):
- `SOLACE_DB`: Path to the database file (defaults to "journal.db")
- `SOLACE_API_KEY` or `OPENAI_API_KEY`: Credential for the completion service
- `SOLACE_API_URL`: Base URL of the completion service
- `SOLACE_MODEL`: Chat model identifier used for reflections
*/

use solace::ai::ChatClient;
use solace::cli::CliArgs;
use solace::config::Config;
use solace::constants::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use solace::db::Storage;
use solace::errors::AppResult;
use solace::ops;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// The main entry point for the solace application.
///
/// This function coordinates the overall application flow:
/// 1. Loads a local `.env` file if one exists
/// 2. Parses command-line arguments
/// 3. Initializes logging
/// 4. Loads configuration from the environment
/// 5. Initializes the database (fatal on failure)
/// 6. Builds the completion client with the configured credential
/// 7. Runs the interactive menu loop until the user exits
///
/// # Errors
///
/// Returns an error if configuration loading, database initialization, or
/// terminal I/O fails. Reflection failures are not errors here: they are
/// converted to stored error text inside the reflection generator.
fn main() -> AppResult<()> {
    // Optional local configuration file; silently ignored when absent.
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();

    // Logs go to stderr so the interactive menu on stdout stays clean.
    let default_filter = if args.verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting solace");

    let config = Config::load()?;
    debug!("Configuration loaded: {:?}", config);

    let storage = Storage::new(&config.database_path);
    storage.initialize()?;

    let client = ChatClient::new(&config.api_base_url, config.api_key.clone());

    ops::menu::run(&storage, &client, &config.model)?;

    info!("Exiting");
    Ok(())
}
