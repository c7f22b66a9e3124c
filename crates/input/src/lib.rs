//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the four session [`Command`]s and
//! recognizes the quit keys. Each key press yields at most one command; the
//! session applies it immediately.
//!
//! [`Command`]: crate::types::Command

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
