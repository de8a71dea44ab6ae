//! Terminal input module (engine-facing).
//!
//! Depends only on `crossterm` key events. Maps keys into [`KeyIntent`]s
//! and tracks the card cursor, which is how a terminal "clicks" a card.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::{CardCursor, Direction};
pub use map::{handle_key_event, should_quit, KeyIntent};
