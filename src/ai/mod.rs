//! AI operations for journal reflections.
//!
//! This module provides the integration with the chat-completion service
//! used to generate a short reflective comment on each journal entry.
//!
//! # Module Structure
//!
//! - `client`: HTTP client for the completion endpoint
//! - `prompts`: System prompt and message builder
//! - `reflection`: Catch-all wrapper producing storable reflection values

pub mod client;
pub mod prompts;
pub mod reflection;

// Re-export commonly used types
pub use client::{ChatClient, Message};
pub use prompts::{reflection_prompt, SYSTEM_PROMPT};
pub use reflection::{generate_reflection, Reflection};
