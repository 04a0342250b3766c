//! System prompt and message builder for reflection generation.

use super::client::Message;

/// System prompt establishing the assistant's role for reflections.
pub const SYSTEM_PROMPT: &str = "You are a compassionate journal reflection assistant. \
Generate positive insights and reflections based on journal entries.";

/// Builds the message pair for reflecting on a journal entry.
///
/// The entry text is embedded verbatim in the user message.
pub fn reflection_prompt(entry: &str) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(format!(
            "Generate a positive reflection or insight based on this journal entry: {}",
            entry
        )),
    ]
}
