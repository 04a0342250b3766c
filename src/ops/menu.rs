//! Interactive menu loop.
//!
//! Presents a two-option menu (write entry / exit) and orchestrates the
//! write-entry flow: read a line of input, generate a reflection, persist
//! both, print the reflection.

use crate::ai::{generate_reflection, ChatClient};
use crate::db::Storage;
use crate::errors::AppResult;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Runs the menu loop until the user chooses to exit.
///
/// # Flow
///
/// 1. Print the menu and read a choice
/// 2. On "1": prompt for an entry, generate a reflection, save, display
/// 3. On "2": say goodbye and return
/// 4. On anything else: print an error and re-prompt
///
/// End of input on stdin also ends the loop, so a closed pipe cannot spin
/// forever. Empty entries are accepted as written; no validation is applied
/// to the entry text.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or written, or if
/// saving an entry fails. Reflection failures do not surface here; they
/// are stored and displayed as error text.
pub fn run(storage: &Storage, client: &ChatClient, model: &str) -> AppResult<()> {
    info!("Starting interactive menu");
    let stdin = io::stdin();

    loop {
        println!("\nDaily Journal with AI Reflection");
        println!("1. Write journal entry");
        println!("2. Exit");
        print!("Choose an option (1-2): ");
        io::stdout().flush()?;

        let mut choice = String::new();
        if stdin.lock().read_line(&mut choice)? == 0 {
            debug!("End of input, leaving menu");
            break;
        }

        match choice.trim() {
            "1" => write_entry(storage, client, model)?,
            "2" => {
                println!("Goodbye!");
                break;
            }
            other => {
                debug!("Rejected menu choice: {:?}", other);
                println!("Invalid choice. Please try again.");
            }
        }
    }

    Ok(())
}

/// The write-entry flow: one entry in, one reflection out, one row saved.
fn write_entry(storage: &Storage, client: &ChatClient, model: &str) -> AppResult<()> {
    println!("\nWrite your journal entry:");

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    // Only the line terminator is removed; the entry is otherwise
    // stored exactly as typed.
    let entry = line.strip_suffix('\n').unwrap_or(&line);
    let entry = entry.strip_suffix('\r').unwrap_or(entry);

    let reflection = generate_reflection(client, model, entry);
    let id = storage.save_entry(entry, &reflection.text)?;
    info!(
        "Saved entry {} (reflection generated: {})",
        id, reflection.generated
    );

    display_reflection(&reflection.text);
    Ok(())
}

/// Prints the reflection between horizontal rules.
fn display_reflection(text: &str) {
    println!("\nAI Reflection:");
    println!("{}", "-".repeat(50));
    println!("{}", text);
    println!("{}", "-".repeat(50));
}
