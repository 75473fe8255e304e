//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The engine
//! itself never sees key codes.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, KEY_HELP};
