//! User-facing operations.

pub mod menu;
