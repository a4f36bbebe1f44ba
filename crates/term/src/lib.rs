//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead rasterises the
//! playfield into a framebuffer of half-block pixels that is flushed to a
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the logical 600x600 playfield independent of terminal size
//! - Redraw only what changed between frames

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use canvas::{Canvas, Projection};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
