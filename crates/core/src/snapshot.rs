//! Snapshot module - plain copies of the world handed to renderers

use arrayvec::ArrayVec;

use crate::bird::Bird;
use crate::cloud::Cloud;
use crate::pipe::Pipe;
use crate::types::{SessionPhase, MAX_CLOUDS, MAX_PIPES};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirdSnapshot {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    pub flapping: bool,
}

impl From<Bird> for BirdSnapshot {
    fn from(value: Bird) -> Self {
        Self {
            x: value.x(),
            y: value.y(),
            velocity: value.velocity(),
            flapping: value.is_flapping(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSnapshot {
    pub x: f32,
    pub top_height: f32,
    pub bottom_y: f32,
    pub passed: bool,
}

impl From<Pipe> for PipeSnapshot {
    fn from(value: Pipe) -> Self {
        Self {
            x: value.x(),
            top_height: value.top_height(),
            bottom_y: value.bottom_y(),
            passed: value.passed(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudSnapshot {
    pub x: f32,
    pub y: f32,
}

impl From<Cloud> for CloudSnapshot {
    fn from(value: Cloud) -> Self {
        Self {
            x: value.x(),
            y: value.y(),
        }
    }
}

/// Read-only view of a session, consumed by renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub phase: SessionPhase,
    pub bird: BirdSnapshot,
    pub pipes: ArrayVec<PipeSnapshot, MAX_PIPES>,
    pub clouds: ArrayVec<CloudSnapshot, MAX_CLOUDS>,
    pub score: u32,
    pub last_score: u32,
    pub session_id: u32,
    pub seed: u32,
    pub now_ms: u64,
}

impl GameSnapshot {
    pub fn playing(&self) -> bool {
        self.phase.is_playing()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Ready,
            bird: BirdSnapshot::from(Bird::new()),
            pipes: ArrayVec::new(),
            clouds: ArrayVec::new(),
            score: 0,
            last_score: 0,
            session_id: 0,
            seed: 0,
            now_ms: 0,
        }
    }
}
