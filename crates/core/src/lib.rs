//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce the identical course
//! - **Testable**: Unit tests for kinematics, geometry and the session state machine
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//! - **Fast**: Fixed-capacity entity lists, so the tick hot path never allocates
//!
//! # Module Structure
//!
//! - [`bird`]: the player-controlled kinematic entity (gravity + jump impulse)
//! - [`pipe`]: gapped obstacle pairs with axis-aligned collision
//! - [`cloud`]: purely cosmetic background decoration
//! - [`rng`]: injectable, seedable random source for procedural placement
//! - [`session`]: the world, its spawn timers, scoring and the ready/playing machine
//! - [`snapshot`]: read-only copies of the world for renderers
//!
//! # Game Rules
//!
//! - **Ready**: the bird waits at the centre; clouds keep drifting
//! - **Flap**: starts play from ready, otherwise overwrites the bird's velocity
//! - **Pipes**: spawn every 1500ms of play at the right edge, scroll left
//! - **Score**: +1 the first time a pipe falls behind the bird
//! - **Crash**: hitting a pipe, the ground or the top edge resets to ready
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::Session;
//! use tui_flappy_types::{GameAction, SessionPhase, BIRD_JUMP, TICK_MS};
//!
//! let mut session = Session::new(12345);
//! assert_eq!(session.phase(), SessionPhase::Ready);
//!
//! session.apply_action(GameAction::Flap);
//! assert_eq!(session.phase(), SessionPhase::Playing);
//! assert_eq!(session.bird().velocity(), BIRD_JUMP);
//!
//! assert!(session.tick(TICK_MS).is_none());
//! ```
//!
//! # Timing
//!
//! Call [`Session::tick`](session::Session::tick) once per frame with the elapsed
//! time. Kinematics advance one step per call; spawn cadence follows the session
//! clock, which advances by exactly the elapsed time given.

pub mod bird;
pub mod cloud;
pub mod pipe;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use cloud::Cloud;
pub use pipe::Pipe;
pub use rng::{RandomSource, SimpleRng};
pub use session::Session;
pub use snapshot::{BirdSnapshot, CloudSnapshot, GameSnapshot, PipeSnapshot};
