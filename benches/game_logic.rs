use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_flappy::core::{GameSnapshot, Pipe, Session};
use tui_flappy::engine::GameLoop;
use tui_flappy::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use tui_flappy::types::{GameAction, BIRD_START_Y, TICK_MS};

/// A session mid-run with a few pipes and clouds on screen.
fn busy_session() -> Session {
    let mut session = Session::new(12345);
    session.apply_action(GameAction::Flap);
    for _ in 0..400 {
        if session.tick(TICK_MS).is_some() || session.bird().y() > BIRD_START_Y {
            session.apply_action(GameAction::Flap);
        }
    }
    session
}

fn bench_tick(c: &mut Criterion) {
    let mut session = busy_session();

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            if session.tick(black_box(TICK_MS)).is_some() || session.bird().y() > BIRD_START_Y {
                session.apply_action(GameAction::Flap);
            }
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let session = busy_session();
    let pipe = Pipe::with_gap_top(80.0, 200.0);

    c.bench_function("pipe_collides", |b| {
        b.iter(|| black_box(pipe).collides(black_box(session.bird())))
    });
}

fn bench_pump(c: &mut Criterion) {
    let mut gl = GameLoop::new(12345, TICK_MS);
    gl.pump(0, [GameAction::Flap]);

    c.bench_function("game_loop_pump_frame", |b| {
        b.iter(|| {
            let flap = gl.session().bird().y() > BIRD_START_Y;
            gl.pump(black_box(TICK_MS), flap.then_some(GameAction::Flap))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let session = busy_session();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| session.snapshot_into(black_box(&mut snap)))
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = busy_session().snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(160, 80);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_into_160x80", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

fn bench_diff(c: &mut Criterion) {
    let mut session = busy_session();
    let view = GameView::default();
    let viewport = Viewport::new(160, 80);

    let prev = view.render(&session.snapshot(), viewport);
    session.tick(TICK_MS);
    let next = view.render(&session.snapshot(), viewport);
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_one_frame", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&next), &mut out)
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_collision,
    bench_pump,
    bench_snapshot,
    bench_render,
    bench_diff
);
criterion_main!(benches);
