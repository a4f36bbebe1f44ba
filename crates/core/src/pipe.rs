//! Pipe - a top/bottom obstacle pair with a vertical gap.

use crate::bird::Bird;
use crate::rng::RandomSource;
use crate::types::{
    Rect, GROUND_Y, PIPE_GAP, PIPE_GAP_TOP_MAX, PIPE_GAP_TOP_MIN, PIPE_SPEED, PIPE_WIDTH, WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    x: f32,
    /// Height of the top segment (= y of the gap's top edge).
    top_height: f32,
    /// y of the gap's bottom edge (= top of the bottom segment).
    bottom_y: f32,
    /// Set once when the bird has gone past this pipe.
    passed: bool,
}

impl Pipe {
    /// New pipe at the right edge with a randomly placed gap.
    pub fn spawn<R: RandomSource>(rng: &mut R) -> Self {
        let top = rng.range_inclusive(PIPE_GAP_TOP_MIN, PIPE_GAP_TOP_MAX);
        Self::with_gap_top(WIDTH, top as f32)
    }

    pub fn with_gap_top(x: f32, top_height: f32) -> Self {
        Self {
            x,
            top_height,
            bottom_y: top_height + PIPE_GAP,
            passed: false,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn top_height(&self) -> f32 {
        self.top_height
    }

    pub fn bottom_y(&self) -> f32 {
        self.bottom_y
    }

    /// Height of the bottom segment, from the gap down to the floor line.
    pub fn bottom_height(&self) -> f32 {
        GROUND_Y - self.bottom_y
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    pub fn update(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// Marks the pipe as passed if the bird is past it.
    ///
    /// Returns true only on the frame the flag flips.
    pub fn check_passed(&mut self, bird_x: f32) -> bool {
        if self.passed || self.x >= bird_x {
            return false;
        }
        self.passed = true;
        true
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, PIPE_WIDTH, self.top_height)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.bottom_y, PIPE_WIDTH, self.bottom_height())
    }

    pub fn collides(&self, bird: &Bird) -> bool {
        let b = bird.bounds();
        b.overlaps(&self.top_rect()) || b.overlaps(&self.bottom_rect())
    }

    /// Fully scrolled past the left edge.
    pub fn is_offscreen(&self) -> bool {
        self.x < -PIPE_WIDTH
    }
}
