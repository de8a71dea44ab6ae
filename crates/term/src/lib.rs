//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a round snapshot
//! into a framebuffer of styled cells, and the renderer flushes only the
//! cells that changed since the last frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout can be unit-tested without a terminal
//! - Draw cards as fixed-size boxes so the grid reads well in any font

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
