//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{Canvas, Projection};
use crate::core::{BirdSnapshot, CloudSnapshot, GameSnapshot, PipeSnapshot};
use crate::fb::{digit_count, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GROUND_HEIGHT, GROUND_Y, HEIGHT, PIPE_WIDTH, WIDTH};

const SKY: Rgb = Rgb::new(135, 206, 235);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const YELLOW: Rgb = Rgb::new(255, 255, 0);
const ORANGE: Rgb = Rgb::new(255, 165, 0);
const BLACK: Rgb = Rgb::new(0, 0, 0);
const GREEN: Rgb = Rgb::new(0, 128, 0);
const GROUND: Rgb = Rgb::new(34, 139, 34);

/// Pipe caps overhang the shaft by this much on each side.
const CAP_OVERHANG: f32 = 5.0;
const CAP_HEIGHT: f32 = 20.0;

/// Logical y of the text rows.
const SCORE_Y: f32 = 50.0;
const GAME_OVER_Y: f32 = HEIGHT / 2.0 - 100.0;
const START_Y: f32 = HEIGHT / 2.0 - 50.0;
const INSTRUCTIONS_Y: f32 = HEIGHT / 2.0;

const START_TEXT: &str = "Press SPACE to start";
const INSTRUCTIONS_TEXT: &str = "Press SPACE to flap and avoid pipes";
const GAME_OVER_TEXT: &str = "Game Over! Score: ";
const TOO_SMALL_TEXT: &str = "terminal too small";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Smallest playfield (in pixels) worth drawing.
    min_side_px: u32,
    /// Text banners get this many blank cells on each side.
    text_padding: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            min_side_px: 24,
            text_padding: 1,
        }
    }
}

impl GameView {
    pub fn new(min_side_px: u32, text_padding: u16) -> Self {
        Self {
            min_side_px,
            text_padding,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let proj = Projection::fit(viewport);
        if proj.side_px() < self.min_side_px {
            let x = viewport.width.saturating_sub(TOO_SMALL_TEXT.len() as u16) / 2;
            fb.put_str(x, viewport.height / 2, TOO_SMALL_TEXT, CellStyle::default());
            return;
        }

        {
            let mut canvas = Canvas::new(fb, proj);
            canvas.fill(SKY);
            for cloud in snap.clouds.iter() {
                draw_cloud(&mut canvas, cloud);
            }
            canvas.fill_rect(0.0, GROUND_Y, WIDTH, GROUND_HEIGHT, GROUND);
            for pipe in snap.pipes.iter() {
                draw_pipe(&mut canvas, pipe);
            }
            draw_bird(&mut canvas, &snap.bird);
        }

        self.draw_score(fb, proj, snap.score);

        if !snap.playing() {
            if snap.last_score > 0 {
                self.draw_banner(fb, proj, GAME_OVER_Y, GAME_OVER_TEXT, Some(snap.last_score));
            }
            self.draw_banner(fb, proj, START_Y, START_TEXT, None);
            self.draw_banner(fb, proj, INSTRUCTIONS_Y, INSTRUCTIONS_TEXT, None);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_score(&self, fb: &mut FrameBuffer, proj: Projection, score: u32) {
        self.draw_banner(fb, proj, SCORE_Y, "", Some(score));
    }

    /// Black-on-white text centred on the playfield at logical height `ly`,
    /// optionally followed by a number.
    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        proj: Projection,
        ly: f32,
        text: &str,
        number: Option<u32>,
    ) {
        let style = CellStyle::new(BLACK, WHITE).bold();
        let text_w = text.chars().count() as u16 + number.map(digit_count).unwrap_or(0);
        let box_w = text_w + self.text_padding * 2;

        let (first, last) = proj.columns();
        let mid = first + (last - first) / 2;
        let (_, row) = proj.logical_to_cell(WIDTH / 2.0, ly);
        let x = mid.saturating_sub(box_w / 2);

        fb.fill_rect(x, row, box_w, 1, ' ', style);
        let cx = fb.put_str(x + self.text_padding, row, text, style);
        if let Some(n) = number {
            fb.put_u32(cx, row, n, style);
        }
    }
}

fn draw_cloud(canvas: &mut Canvas<'_>, cloud: &CloudSnapshot) {
    canvas.fill_circle(cloud.x, cloud.y, 30.0, WHITE);
    canvas.fill_circle(cloud.x + 25.0, cloud.y + 5.0, 20.0, WHITE);
    canvas.fill_circle(cloud.x - 25.0, cloud.y + 5.0, 20.0, WHITE);
}

fn draw_pipe(canvas: &mut Canvas<'_>, pipe: &PipeSnapshot) {
    let cap_x = pipe.x - CAP_OVERHANG;
    let cap_w = PIPE_WIDTH + CAP_OVERHANG * 2.0;

    canvas.fill_rect(pipe.x, 0.0, PIPE_WIDTH, pipe.top_height, GREEN);
    canvas.fill_rect(cap_x, pipe.top_height - CAP_HEIGHT, cap_w, CAP_HEIGHT, GREEN);

    canvas.fill_rect(pipe.x, pipe.bottom_y, PIPE_WIDTH, GROUND_Y - pipe.bottom_y, GREEN);
    canvas.fill_rect(cap_x, pipe.bottom_y, cap_w, CAP_HEIGHT, GREEN);
}

fn draw_bird(canvas: &mut Canvas<'_>, bird: &BirdSnapshot) {
    let (x, y) = (bird.x, bird.y);

    canvas.fill_ellipse(x, y, 17.0, 8.0, YELLOW);
    canvas.fill_circle(x + 10.0, y - 5.0, 8.0, YELLOW);
    canvas.fill_triangle((x + 15.0, y - 5.0), (x + 23.0, y - 5.0), (x + 15.0, y), ORANGE);
    canvas.fill_circle(x + 12.0, y - 6.0, 2.0, BLACK);

    // Wings point down while the flap animation runs.
    let tip_y = if bird.flapping { y + 10.0 } else { y - 20.0 };
    canvas.draw_line((x - 5.0, y - 5.0), (x - 25.0, tip_y), 8.0, YELLOW);
    canvas.draw_line((x + 5.0, y - 5.0), (x + 25.0, tip_y), 8.0, YELLOW);
}
