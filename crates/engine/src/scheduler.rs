//! Fixed-timestep accumulator.
//!
//! Hosts feed real elapsed time in; the scheduler answers how many fixed ticks are
//! due and carries the remainder into the next call.

use crate::types::TICK_MS;

/// Default cap on ticks run by a single pump.
///
/// After a long stall (debugger, suspended terminal) the backlog is dropped instead
/// of fast-forwarding the game.
pub const DEFAULT_MAX_TICKS_PER_PUMP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimestep {
    tick_ms: u32,
    max_ticks_per_pump: u32,
    accumulator_ms: u32,
}

impl FixedTimestep {
    /// `tick_ms` of zero is clamped to 1.
    pub fn new(tick_ms: u32) -> Self {
        Self {
            tick_ms: tick_ms.max(1),
            max_ticks_per_pump: DEFAULT_MAX_TICKS_PER_PUMP,
            accumulator_ms: 0,
        }
    }

    pub fn with_max_ticks_per_pump(mut self, max_ticks: u32) -> Self {
        self.max_ticks_per_pump = max_ticks.max(1);
        self
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn accumulator_ms(&self) -> u32 {
        self.accumulator_ms
    }

    /// Add `elapsed_ms` and return the number of ticks now due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let due = self.accumulator_ms / self.tick_ms;
        self.accumulator_ms %= self.tick_ms;

        if due > self.max_ticks_per_pump {
            log::debug!(
                "dropping {} ticks of backlog",
                due - self.max_ticks_per_pump
            );
            return self.max_ticks_per_pump;
        }
        due
    }

    /// Time until the next tick is due.
    pub fn until_next_tick_ms(&self) -> u32 {
        self.tick_ms - self.accumulator_ms
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}
