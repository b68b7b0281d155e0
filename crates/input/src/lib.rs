//! Terminal input module.
//!
//! The clock is a passive display, so input handling is limited to ending
//! the session and forcing a repaint. This crate maps `crossterm` key events
//! to [`crate::types::SessionAction`] and nothing else.

pub mod map;

pub use klingon_clock_types as types;

pub use map::{handle_key_event, should_quit};
