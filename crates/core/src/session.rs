//! Session module - owns the world and runs the ready/playing state machine
//!
//! Everything the game mutates lives here: the bird, the pipe and cloud
//! collections, the score counters, the spawn timers and the random source. The
//! session never reads a wall clock; its clock advances only by the `elapsed_ms`
//! passed to [`Session::tick`], which makes every run reproducible from a seed and a
//! sequence of inputs.

use arrayvec::ArrayVec;

use crate::bird::Bird;
use crate::cloud::Cloud;
use crate::pipe::Pipe;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::{BirdSnapshot, CloudSnapshot, GameSnapshot, PipeSnapshot};
use crate::types::*;

/// Complete game world.
#[derive(Debug, Clone)]
pub struct Session<R: RandomSource = SimpleRng> {
    phase: SessionPhase,
    bird: Bird,
    pipes: ArrayVec<Pipe, MAX_PIPES>,
    clouds: ArrayVec<Cloud, MAX_CLOUDS>,
    score: u32,
    /// Score of the previous session (shown on the ready screen).
    last_score: u32,
    /// Session clock, advanced only by `tick`.
    now_ms: u64,
    last_pipe_ms: u64,
    last_cloud_ms: u64,
    /// Monotonic session id (increments on every reset).
    session_id: u32,
    seed: u32,
    rng: R,
}

impl Session<SimpleRng> {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let rng = SimpleRng::new(seed);
        let seed = rng.seed();
        Self::with_rng_and_seed(rng, seed)
    }
}

impl<R: RandomSource> Session<R> {
    /// Create a session drawing placement from an injected random source.
    pub fn with_rng(rng: R) -> Self {
        Self::with_rng_and_seed(rng, 0)
    }

    fn with_rng_and_seed(rng: R, seed: u32) -> Self {
        Self {
            phase: SessionPhase::Ready,
            bird: Bird::new(),
            pipes: ArrayVec::new(),
            clouds: ArrayVec::new(),
            score: 0,
            last_score: 0,
            now_ms: 0,
            last_pipe_ms: 0,
            last_cloud_ms: 0,
            session_id: 0,
            seed,
            rng,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn last_score(&self) -> u32 {
        self.last_score
    }

    pub fn bird(&self) -> &Bird {
        &self.bird
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// Seed of the default RNG (0 when the random source was injected).
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Replace the bird (scripted scenarios and tests).
    pub fn set_bird(&mut self, bird: Bird) {
        self.bird = bird;
    }

    /// Insert a pipe directly, bypassing the spawn cadence.
    ///
    /// Returns false if the pipe collection is full.
    pub fn push_pipe(&mut self, pipe: Pipe) -> bool {
        self.pipes.try_push(pipe).is_ok()
    }

    /// Apply an input action.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Flap => self.flap(),
        }
    }

    fn flap(&mut self) {
        if self.phase == SessionPhase::Ready {
            // The pipe timer keeps running from the last reset, so a long wait in
            // ready puts a pipe on screen with the first playing frame.
            self.phase = SessionPhase::Playing;
            log::info!(
                "session {} started at {}ms",
                self.session_id,
                self.now_ms
            );
        }
        self.bird.jump();
    }

    /// Advance the clock by `elapsed_ms` and simulate one frame.
    ///
    /// Returns the crash that ended the session, if any. The session has already
    /// been reset when this returns `Some`.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Crash> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms as u64);

        self.update_clouds();

        if self.phase != SessionPhase::Playing {
            return None;
        }

        self.bird.update();

        if self.now_ms - self.last_pipe_ms > PIPE_INTERVAL_MS {
            let pipe = Pipe::spawn(&mut self.rng);
            if self.pipes.try_push(pipe).is_ok() {
                log::debug!("pipe spawned with gap top {}", pipe.top_height());
            } else {
                log::debug!("pipe limit reached, skipping spawn");
            }
            self.last_pipe_ms = self.now_ms;
        }

        let bird_x = self.bird.x();
        let mut scored = 0u32;
        for pipe in self.pipes.iter_mut() {
            pipe.update();
            if pipe.check_passed(bird_x) {
                scored += 1;
            }
        }
        self.pipes.retain(|p| !p.is_offscreen());
        self.score = self.score.saturating_add(scored);

        let cause = self.bird.out_of_bounds().or_else(|| {
            self.pipes
                .iter()
                .any(|p| p.collides(&self.bird))
                .then_some(CrashCause::Pipe)
        });

        let cause = cause?;
        let crash = Crash {
            cause,
            score: self.score,
        };
        log::info!(
            "session {} crashed into {} with score {}",
            self.session_id,
            cause.as_str(),
            self.score
        );
        self.reset();
        Some(crash)
    }

    /// Start a fresh session: new bird, no pipes, score saved and zeroed.
    ///
    /// Clouds and the cloud timer carry over.
    pub fn reset(&mut self) {
        self.last_score = self.score;
        self.bird = Bird::new();
        self.pipes.clear();
        self.score = 0;
        self.last_pipe_ms = self.now_ms;
        self.phase = SessionPhase::Ready;
        self.session_id = self.session_id.wrapping_add(1);
    }

    fn update_clouds(&mut self) {
        for cloud in self.clouds.iter_mut() {
            cloud.update();
        }
        self.clouds.retain(|c| !c.is_offscreen());

        if self.now_ms - self.last_cloud_ms > CLOUD_INTERVAL_MS {
            let cloud = Cloud::spawn(&mut self.rng);
            if self.clouds.try_push(cloud).is_err() {
                log::debug!("cloud limit reached, skipping spawn");
            }
            self.last_cloud_ms = self.now_ms;
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.phase = self.phase;
        out.bird = BirdSnapshot::from(self.bird);
        out.pipes.clear();
        out.pipes
            .extend(self.pipes.iter().copied().map(PipeSnapshot::from));
        out.clouds.clear();
        out.clouds
            .extend(self.clouds.iter().copied().map(CloudSnapshot::from));
        out.score = self.score;
        out.last_score = self.last_score;
        out.session_id = self.session_id;
        out.seed = self.seed;
        out.now_ms = self.now_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Random source that always returns the same value.
    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    fn playing(seed: u32) -> Session {
        let mut s = Session::new(seed);
        s.apply_action(GameAction::Flap);
        s
    }

    #[test]
    fn test_new_session_is_ready() {
        let s = Session::new(1);
        assert_eq!(s.phase(), SessionPhase::Ready);
        assert_eq!(s.score(), 0);
        assert_eq!(s.last_score(), 0);
        assert_eq!(s.bird().y(), BIRD_START_Y);
        assert!(s.pipes().is_empty());
    }

    #[test]
    fn test_ready_tick_freezes_bird() {
        let mut s = Session::new(1);
        for _ in 0..200 {
            assert!(s.tick(TICK_MS).is_none());
        }
        assert_eq!(s.bird().y(), BIRD_START_Y);
        assert!(s.pipes().is_empty());
        assert_eq!(s.phase(), SessionPhase::Ready);
    }

    #[test]
    fn test_first_flap_starts_and_jumps() {
        let s = playing(1);
        assert_eq!(s.phase(), SessionPhase::Playing);
        assert_eq!(s.bird().velocity(), BIRD_JUMP);
    }

    #[test]
    fn test_flap_while_playing_only_jumps() {
        let mut s = playing(1);
        s.tick(TICK_MS);
        s.tick(TICK_MS);
        s.apply_action(GameAction::Flap);
        assert_eq!(s.phase(), SessionPhase::Playing);
        assert_eq!(s.bird().velocity(), BIRD_JUMP);
    }

    #[test]
    fn test_clouds_spawn_while_ready() {
        let mut s = Session::new(1);
        let ticks = (CLOUD_INTERVAL_MS / TICK_MS as u64) as usize + 1;
        for _ in 0..ticks {
            s.tick(TICK_MS);
        }
        assert_eq!(s.clouds().len(), 1);
        assert_eq!(s.clouds()[0].x(), WIDTH);
    }

    #[test]
    fn test_injected_rng_controls_gap() {
        // 170 % (270 - 100 + 1) = 170 => gap top 270.
        let mut s = Session::with_rng(Fixed(170));
        s.apply_action(GameAction::Flap);
        let mut spawned = None;
        for _ in 0..200 {
            s.tick(TICK_MS);
            if let Some(p) = s.pipes().first() {
                spawned = Some(*p);
                break;
            }
            // Hover around the middle of the screen.
            if s.bird().y() > BIRD_START_Y {
                s.apply_action(GameAction::Flap);
            }
        }
        let pipe = spawned.expect("pipe should spawn");
        assert_eq!(pipe.top_height(), 270.0);
        assert_eq!(s.seed(), 0);
    }

    #[test]
    fn test_pipe_timer_runs_through_ready() {
        let mut s = Session::new(1);
        let idle_ticks = (PIPE_INTERVAL_MS / TICK_MS as u64) as usize + 1;
        for _ in 0..idle_ticks {
            s.tick(TICK_MS);
        }
        assert!(s.pipes().is_empty());

        s.apply_action(GameAction::Flap);
        assert!(s.tick(TICK_MS).is_none());
        assert_eq!(s.pipes().len(), 1);
        assert_eq!(s.pipes()[0].x(), WIDTH - PIPE_SPEED);
    }

    #[test]
    fn test_ceiling_crash_resets() {
        let mut s = playing(1);
        s.set_bird(Bird::at(12.0, -7.0));
        let crash = s.tick(TICK_MS).expect("should crash");
        assert_eq!(crash.cause, CrashCause::Ceiling);
        assert_eq!(s.phase(), SessionPhase::Ready);
        assert_eq!(s.session_id(), 1);
    }

    #[test]
    fn test_pipe_crash() {
        let mut s = playing(1);
        s.set_bird(Bird::at(100.0, 0.0));
        // Pipe straddles the bird horizontally; gap far below the bird.
        assert!(s.push_pipe(Pipe::with_gap_top(BIRD_X - 10.0, 250.0)));
        let crash = s.tick(TICK_MS).expect("should crash");
        assert_eq!(crash.cause, CrashCause::Pipe);
        assert!(s.pipes().is_empty());
    }

    #[test]
    fn test_reset_keeps_clouds() {
        let mut s = Session::new(1);
        let ticks = (CLOUD_INTERVAL_MS / TICK_MS as u64) as usize + 1;
        for _ in 0..ticks {
            s.tick(TICK_MS);
        }
        assert_eq!(s.clouds().len(), 1);

        s.apply_action(GameAction::Flap);
        s.set_bird(Bird::at(GROUND_Y, 5.0));
        assert!(s.tick(TICK_MS).is_some());
        assert_eq!(s.clouds().len(), 1);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut s = playing(5);
        s.push_pipe(Pipe::with_gap_top(400.0, 150.0));
        s.tick(TICK_MS);
        let snap = s.snapshot();
        assert_eq!(snap.phase, SessionPhase::Playing);
        assert_eq!(snap.bird.y, s.bird().y());
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].x, 400.0 - PIPE_SPEED);
        assert_eq!(snap.pipes[0].top_height, 150.0);
        assert_eq!(snap.seed, 5);
        assert_eq!(snap.now_ms, TICK_MS as u64);
    }
}
