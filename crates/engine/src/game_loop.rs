use arrayvec::ArrayVec;

use crate::core::{GameSnapshot, RandomSource, Session, SimpleRng};
use crate::scheduler::FixedTimestep;
use crate::types::{Crash, GameAction};

/// Crashes are rare (at most one per tick); a handful is plenty per pump.
pub const MAX_CRASHES_PER_PUMP: usize = 4;

/// What happened during one pump.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PumpReport {
    pub ticks: u32,
    pub crashes: ArrayVec<Crash, MAX_CRASHES_PER_PUMP>,
}

/// A session driven by an external frame pump.
///
/// The loop owns no clock. Whoever hosts it (terminal main loop, tests, benches)
/// measures time and calls [`GameLoop::pump`] once per frame.
#[derive(Debug, Clone)]
pub struct GameLoop<R: RandomSource = SimpleRng> {
    session: Session<R>,
    timestep: FixedTimestep,
}

impl GameLoop<SimpleRng> {
    pub fn new(seed: u32, tick_ms: u32) -> Self {
        Self::with_session(Session::new(seed), FixedTimestep::new(tick_ms))
    }
}

impl<R: RandomSource> GameLoop<R> {
    pub fn with_session(session: Session<R>, timestep: FixedTimestep) -> Self {
        Self { session, timestep }
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    /// Apply `actions`, then run every fixed tick made due by `elapsed_ms`.
    ///
    /// Actions are applied before simulation so a press is visible in the same
    /// frame it arrived.
    pub fn pump<I>(&mut self, elapsed_ms: u32, actions: I) -> PumpReport
    where
        I: IntoIterator<Item = GameAction>,
    {
        for action in actions {
            self.session.apply_action(action);
        }

        let mut report = PumpReport::default();
        let ticks = self.timestep.advance(elapsed_ms);
        let tick_ms = self.timestep.tick_ms();
        for _ in 0..ticks {
            if let Some(crash) = self.session.tick(tick_ms) {
                if report.crashes.try_push(crash).is_err() {
                    log::debug!("crash report full, dropping {:?}", crash.cause);
                }
            }
        }
        report.ticks = ticks;
        report
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }
}
