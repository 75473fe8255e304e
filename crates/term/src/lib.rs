//! Terminal presentation for blockfall.
//!
//! The view renders an engine snapshot into a framebuffer of styled cells;
//! the renderer flushes that framebuffer to the terminal with crossterm.
//! Neither holds game state, so the engine stays testable without a tty.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, PanelInfo, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
