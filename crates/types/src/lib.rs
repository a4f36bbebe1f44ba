//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, frame pumping, terminal rendering).
//!
//! # Playfield
//!
//! The game is simulated on a fixed logical surface, independent of the terminal size:
//!
//! - **Width**: 600 logical units (x grows to the right)
//! - **Height**: 600 logical units (y grows downwards)
//! - **Ground**: an 80-unit band at the bottom; its top edge is the floor line
//!
//! # Physics Constants
//!
//! All kinematics are per frame (one fixed tick):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.25 | Added to the bird's velocity every frame |
//! | `BIRD_JUMP` | -7.0 | Velocity after a flap (overwrites, never adds) |
//! | `PIPE_SPEED` | 3.0 | Horizontal pipe speed |
//! | `CLOUD_SPEED` | 1.0 | Horizontal cloud speed |
//! | `FLAP_FRAMES` | 10 | Frames the wings-down sprite is shown after a flap |
//!
//! # Spawn Cadence
//!
//! Spawning is gated by the session clock (milliseconds), not by frame count:
//!
//! - `PIPE_INTERVAL_MS`: 1500ms between pipes
//! - `CLOUD_INTERVAL_MS`: 2000ms between clouds
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{Rect, SessionPhase, WIDTH, HEIGHT};
//!
//! assert_eq!(SessionPhase::Ready.as_str(), "ready");
//!
//! let a = Rect::new(0.0, 0.0, 10.0, 10.0);
//! let b = Rect::new(5.0, 5.0, 10.0, 10.0);
//! assert!(a.overlaps(&b));
//!
//! assert_eq!(WIDTH, 600.0);
//! assert_eq!(HEIGHT, 600.0);
//! ```

/// Logical playfield width.
pub const WIDTH: f32 = 600.0;

/// Logical playfield height.
pub const HEIGHT: f32 = 600.0;

/// Height of the ground band at the bottom of the playfield.
pub const GROUND_HEIGHT: f32 = 80.0;

/// Y coordinate of the floor line (top edge of the ground).
pub const GROUND_Y: f32 = HEIGHT - GROUND_HEIGHT;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Per-frame velocity increase.
pub const GRAVITY: f32 = 0.25;

/// Velocity set by a flap.
pub const BIRD_JUMP: f32 = -7.0;

/// Fixed horizontal position of the bird.
pub const BIRD_X: f32 = 100.0;

/// Vertical spawn position of the bird (screen centre).
pub const BIRD_START_Y: f32 = HEIGHT / 2.0;

/// Half-width of the bird's collision box.
pub const BIRD_HALF_WIDTH: f32 = 20.0;

/// Half-height of the bird's collision box (also used for the bounds check).
pub const BIRD_HALF_HEIGHT: f32 = 10.0;

/// Frames the flap animation lasts.
pub const FLAP_FRAMES: u32 = 10;

/// Pipe movement per frame.
pub const PIPE_SPEED: f32 = 3.0;

/// Vertical opening between the top and bottom pipe.
pub const PIPE_GAP: f32 = 150.0;

/// Width of a pipe segment (caps are drawn slightly wider but do not collide).
pub const PIPE_WIDTH: f32 = 50.0;

/// Minimum clearance between the gap and the top of the screen or the floor.
pub const PIPE_MARGIN: u32 = 100;

/// Lowest gap top a pipe can be spawned with (inclusive).
pub const PIPE_GAP_TOP_MIN: u32 = PIPE_MARGIN;

/// Highest gap top a pipe can be spawned with (inclusive).
pub const PIPE_GAP_TOP_MAX: u32 =
    (HEIGHT - GROUND_HEIGHT - PIPE_GAP) as u32 - PIPE_MARGIN;

/// Minimum time between pipe spawns.
pub const PIPE_INTERVAL_MS: u64 = 1500;

/// Cloud movement per frame.
pub const CLOUD_SPEED: f32 = 1.0;

/// Cloud vertical spawn range (inclusive).
pub const CLOUD_Y_MIN: u32 = 50;
pub const CLOUD_Y_MAX: u32 = 200;

/// Clouds are removed once their centre passes this x.
pub const CLOUD_DESPAWN_X: f32 = -50.0;

/// Minimum time between cloud spawns.
pub const CLOUD_INTERVAL_MS: u64 = 2000;

/// Upper bound on live pipes (the tick path never allocates).
pub const MAX_PIPES: usize = 8;

/// Upper bound on live clouds.
pub const MAX_CLOUDS: usize = 16;

/// Input actions understood by the session.
///
/// The game recognises a single discrete "activate" input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a session (when ready) and apply the jump impulse
    Flap,
}

/// Session state machine.
///
/// - **Ready**: waiting for the first flap; the bird is frozen, clouds still drift
/// - **Playing**: physics, pipes and scoring are live
///
/// `Ready --flap--> Playing --crash--> Ready`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    #[default]
    Ready,
    Playing,
}

impl SessionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Ready => "ready",
            SessionPhase::Playing => "playing",
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, SessionPhase::Playing)
    }
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrashCause {
    /// Hit a pipe segment
    Pipe,
    /// Fell onto the ground band
    Ground,
    /// Flew above the top of the screen
    Ceiling,
}

impl CrashCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrashCause::Pipe => "pipe",
            CrashCause::Ground => "ground",
            CrashCause::Ceiling => "ceiling",
        }
    }
}

/// Core-side event emitted when a session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crash {
    pub cause: CrashCause,
    /// Score of the session that just ended.
    pub score: u32,
}

/// Axis-aligned rectangle in logical units.
///
/// `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `2*half_w` by `2*half_h` centred on `(cx, cy)`.
    pub fn centered(cx: f32, cy: f32, half_w: f32, half_h: f32) -> Self {
        Self::new(cx - half_w, cy - half_h, half_w * 2.0, half_h * 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap,
    /// and empty rectangles overlap nothing.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
