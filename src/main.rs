//! Terminal Flappy runner (default binary).
//!
//! Renders the 600x600 playfield as half-block pixels with a custom framebuffer
//! renderer and drives the session from a fixed-step frame pump.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_flappy::config::GameConfig;
use tui_flappy::core::GameSnapshot;
use tui_flappy::engine::GameLoop;
use tui_flappy::input::{should_quit, FlapInput};
use tui_flappy::logging;
use tui_flappy::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate()?;
    logging::init(config.log_path.as_deref())?;
    log::info!(
        "starting tui-flappy seed={} tick_ms={}",
        config.seed,
        config.tick_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => log::info!("shutdown"),
        Err(err) => log::error!("shutdown after error: {err:#}"),
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = GameLoop::new(config.seed, config.tick_ms);
    let view = GameView::default();
    let mut input = FlapInput::new();

    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut actions = Vec::with_capacity(4);

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let until_tick = Duration::from_millis(game.timestep().until_next_tick_ms() as u64);
        let mut timeout = until_tick.saturating_sub(last_frame.elapsed());

        while event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        log::info!("quit requested");
                        return Ok(());
                    }
                    if let Some(action) = input.handle_key_event(key) {
                        actions.push(action);
                    }
                }
                Event::Resize(w, h) => {
                    log::debug!("terminal resized to {w}x{h}");
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
            timeout = Duration::ZERO;
        }

        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed_ms = last_frame.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_frame += Duration::from_millis(elapsed_ms as u64);

        input.update(elapsed_ms);
        let report = game.pump(elapsed_ms, actions.drain(..));
        if report.ticks > 1 {
            log::trace!("caught up {} ticks after {elapsed_ms}ms frame", report.ticks);
        }
    }
}
