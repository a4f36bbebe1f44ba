//! Frame pump and fixed-timestep scheduling.
//!
//! The game is advanced by an external caller rather than owning its own loop:
//! [`GameLoop::pump`] takes the elapsed wall time and the inputs collected since the
//! last frame, and runs as many fixed ticks as are due. The terminal binary, the
//! integration tests and the benches all drive the game through this one entry point.

pub mod game_loop;
pub mod scheduler;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use game_loop::{GameLoop, PumpReport, MAX_CRASHES_PER_PUMP};
pub use scheduler::{FixedTimestep, DEFAULT_MAX_TICKS_PER_PUMP};
