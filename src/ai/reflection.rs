//! Reflection generation with total error recovery.
//!
//! Every failure from the completion service is converted into an
//! error-text reflection here. Callers never see an error: the returned
//! value is always storable and displayable. The `generated` flag records
//! which case occurred, since the stored text alone does not distinguish
//! them.

use super::client::ChatClient;
use super::prompts::reflection_prompt;
use crate::constants::REFLECTION_MAX_TOKENS;
use tracing::{debug, warn};

/// A reflection on a journal entry.
#[derive(Debug, Clone)]
pub struct Reflection {
    /// Either the service's response verbatim, or an error description of
    /// the form "Error generating reflection: <details>".
    pub text: String,
    /// True when the service produced the text, false when it is error text.
    pub generated: bool,
}

/// Requests a reflection for the given entry text.
///
/// On success the service's content is returned verbatim. Any failure
/// (missing credential, network error, service error, malformed response)
/// becomes a reflection whose text is "Error generating reflection: " plus
/// the failure description. This function never fails.
pub fn generate_reflection(client: &ChatClient, model: &str, entry: &str) -> Reflection {
    let messages = reflection_prompt(entry);

    match client.complete(model, &messages, REFLECTION_MAX_TOKENS) {
        Ok(text) => {
            debug!("Generated reflection ({} bytes)", text.len());
            Reflection {
                text,
                generated: true,
            }
        }
        Err(e) => {
            warn!("Reflection generation failed: {}", e);
            Reflection {
                text: format!("Error generating reflection: {}", e),
                generated: false,
            }
        }
    }
}
