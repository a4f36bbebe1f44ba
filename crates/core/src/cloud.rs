//! Cloud - background decoration. Never collides, never scores.

use crate::rng::RandomSource;
use crate::types::{CLOUD_DESPAWN_X, CLOUD_SPEED, CLOUD_Y_MAX, CLOUD_Y_MIN, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cloud {
    x: f32,
    y: f32,
    speed: f32,
}

impl Cloud {
    pub fn spawn<R: RandomSource>(rng: &mut R) -> Self {
        let y = rng.range_inclusive(CLOUD_Y_MIN, CLOUD_Y_MAX);
        Self::new(WIDTH, y as f32)
    }

    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            speed: CLOUD_SPEED,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    pub fn is_offscreen(&self) -> bool {
        self.x < CLOUD_DESPAWN_X
    }
}
