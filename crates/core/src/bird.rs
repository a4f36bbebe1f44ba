//! Bird - the player-controlled kinematic entity.

use crate::types::{
    CrashCause, Rect, BIRD_HALF_HEIGHT, BIRD_HALF_WIDTH, BIRD_JUMP, BIRD_START_Y, BIRD_X,
    FLAP_FRAMES, GRAVITY, GROUND_Y,
};

/// Position/velocity state of the bird.
///
/// `x` never changes. `velocity` only changes by [`GRAVITY`] per frame or by being
/// overwritten in [`Bird::jump`]; `y` only changes by velocity integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    x: f32,
    y: f32,
    velocity: f32,
    /// Frames left in the wings-down animation.
    flap_frames: u32,
}

impl Bird {
    /// Bird at its spawn point, at rest.
    pub fn new() -> Self {
        Self {
            x: BIRD_X,
            y: BIRD_START_Y,
            velocity: 0.0,
            flap_frames: 0,
        }
    }

    /// Bird at an arbitrary height and velocity (tests, scripted scenarios).
    pub fn at(y: f32, velocity: f32) -> Self {
        Self {
            y,
            velocity,
            ..Self::new()
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn flap_frames(&self) -> u32 {
        self.flap_frames
    }

    pub fn is_flapping(&self) -> bool {
        self.flap_frames > 0
    }

    /// Advance one frame: gravity, then integration, then animation countdown.
    pub fn update(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
        if self.flap_frames > 0 {
            self.flap_frames -= 1;
        }
    }

    /// Upward impulse. Overwrites the current velocity.
    pub fn jump(&mut self) {
        self.velocity = BIRD_JUMP;
        self.flap_frames = FLAP_FRAMES;
    }

    /// Collision box centred on the bird.
    pub fn bounds(&self) -> Rect {
        Rect::centered(self.x, self.y, BIRD_HALF_WIDTH, BIRD_HALF_HEIGHT)
    }

    /// Terrain check: below the floor line or above the top edge.
    pub fn out_of_bounds(&self) -> Option<CrashCause> {
        if self.y + BIRD_HALF_HEIGHT > GROUND_Y {
            Some(CrashCause::Ground)
        } else if self.y - BIRD_HALF_HEIGHT < 0.0 {
            Some(CrashCause::Ceiling)
        } else {
            None
        }
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}
