//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides a
//! discrete-press filter so a held flap key yields exactly one flap, including on
//! terminals without key-release events.

pub mod handler;
pub mod map;

pub use tui_flappy_types as types;

pub use handler::FlapInput;
pub use map::{is_flap_key, should_quit};
