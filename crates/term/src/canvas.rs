//! Logical playfield → half-block pixels.
//!
//! The game is simulated on a fixed `WIDTH x HEIGHT` surface. [`Projection`] fits
//! that square into the terminal (one column per pixel, two pixels per row) and
//! [`Canvas`] rasterises shapes given in logical units. A pixel is painted when
//! its centre lies inside the shape; drawing is clipped to the playfield.

use crate::fb::{FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::{HEIGHT, WIDTH};

/// Placement of the playfield inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Left edge of the playfield, in columns.
    origin_x: u32,
    /// Top edge of the playfield, in half-rows.
    origin_y: u32,
    /// Playfield side length in pixels.
    side_px: u32,
    /// Pixels per logical unit.
    scale: f32,
}

impl Projection {
    /// Largest centred square of pixels that fits the viewport.
    pub fn fit(viewport: Viewport) -> Self {
        let px_w = viewport.width as u32;
        let px_h = viewport.height as u32 * 2;
        let side_px = px_w.min(px_h);
        Self {
            origin_x: (px_w - side_px) / 2,
            // Keep the top edge on a cell boundary so text rows line up.
            origin_y: ((px_h - side_px) / 2) & !1,
            side_px,
            scale: side_px as f32 / WIDTH.max(HEIGHT),
        }
    }

    pub fn side_px(&self) -> u32 {
        self.side_px
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Terminal cell containing a logical point (clamped to `u16`).
    pub fn logical_to_cell(&self, lx: f32, ly: f32) -> (u16, u16) {
        let px = self.origin_x as f32 + (lx * self.scale).max(0.0);
        let py = self.origin_y as f32 + (ly * self.scale).max(0.0);
        let col = (px as u32).min(u16::MAX as u32) as u16;
        let row = ((py as u32) / 2).min(u16::MAX as u32) as u16;
        (col, row)
    }

    /// Column range `[first, last)` covered by the playfield.
    pub fn columns(&self) -> (u16, u16) {
        let first = self.origin_x as u16;
        (first, first.saturating_add(self.side_px as u16))
    }

    fn pixel_center(&self, px: u32, py: u32) -> (f32, f32) {
        (
            (px as f32 - self.origin_x as f32 + 0.5) / self.scale,
            (py as f32 - self.origin_y as f32 + 0.5) / self.scale,
        )
    }

    /// Pixel range covering the logical interval `[lo, hi]` on one axis,
    /// clipped to the playfield.
    fn span(&self, origin: u32, lo: f32, hi: f32) -> (u32, u32) {
        let start = (lo * self.scale).floor().max(0.0) as u32;
        let end = ((hi * self.scale).ceil().max(0.0) as u32).min(self.side_px);
        (origin + start.min(self.side_px), origin + end)
    }
}

/// Rasteriser bound to a framebuffer.
pub struct Canvas<'a> {
    fb: &'a mut FrameBuffer,
    proj: Projection,
}

impl<'a> Canvas<'a> {
    pub fn new(fb: &'a mut FrameBuffer, proj: Projection) -> Self {
        Self { fb, proj }
    }

    pub fn projection(&self) -> Projection {
        self.proj
    }

    /// Paint every pixel of the playfield.
    pub fn fill(&mut self, color: Rgb) {
        self.fill_rect(0.0, 0.0, WIDTH, HEIGHT, color);
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.fill_where(x, y, x + w, y + h, color, |lx, ly| {
            lx >= x && lx < x + w && ly >= y && ly < y + h
        });
    }

    pub fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgb) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let painted = self.fill_where(cx - rx, cy - ry, cx + rx, cy + ry, color, |lx, ly| {
            let nx = (lx - cx) / rx;
            let ny = (ly - cy) / ry;
            nx * nx + ny * ny <= 1.0
        });
        if painted == 0 {
            // Smaller than a pixel: keep it visible.
            self.plot(cx, cy, color);
        }
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb) {
        self.fill_ellipse(cx, cy, r, r, color);
    }

    pub fn fill_triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32), color: Rgb) {
        let min_x = a.0.min(b.0).min(c.0);
        let max_x = a.0.max(b.0).max(c.0);
        let min_y = a.1.min(b.1).min(c.1);
        let max_y = a.1.max(b.1).max(c.1);

        let edge = |p: (f32, f32), q: (f32, f32), x: f32, y: f32| {
            (q.0 - p.0) * (y - p.1) - (q.1 - p.1) * (x - p.0)
        };
        let painted = self.fill_where(min_x, min_y, max_x, max_y, color, |lx, ly| {
            let e0 = edge(a, b, lx, ly);
            let e1 = edge(b, c, lx, ly);
            let e2 = edge(c, a, lx, ly);
            (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0)
        });
        if painted == 0 {
            self.plot((a.0 + b.0 + c.0) / 3.0, (a.1 + b.1 + c.1) / 3.0, color);
        }
    }

    /// Segment of the given thickness (logical units), at least one pixel wide.
    pub fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: Rgb) {
        let half = (width / 2.0).max(0.5 / self.proj.scale);
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let len_sq = dx * dx + dy * dy;

        self.fill_where(
            from.0.min(to.0) - half,
            from.1.min(to.1) - half,
            from.0.max(to.0) + half,
            from.1.max(to.1) + half,
            color,
            |lx, ly| {
                let t = if len_sq == 0.0 {
                    0.0
                } else {
                    (((lx - from.0) * dx + (ly - from.1) * dy) / len_sq).clamp(0.0, 1.0)
                };
                let (ex, ey) = (from.0 + t * dx - lx, from.1 + t * dy - ly);
                ex * ex + ey * ey <= half * half
            },
        );
    }

    /// Paint the single pixel containing a logical point.
    fn plot(&mut self, lx: f32, ly: f32, color: Rgb) {
        if !(0.0..WIDTH).contains(&lx) || !(0.0..HEIGHT).contains(&ly) {
            return;
        }
        let px = self.proj.origin_x + (lx * self.proj.scale) as u32;
        let py = self.proj.origin_y + (ly * self.proj.scale) as u32;
        self.put(px, py, color);
    }

    fn put(&mut self, px: u32, py: u32, color: Rgb) {
        if let Ok(x) = u16::try_from(px) {
            self.fb.set_pixel(x, py, color);
        }
    }

    /// Paint pixels in the logical bounding box whose centre satisfies `inside`.
    ///
    /// Returns the number of pixels painted.
    fn fill_where(
        &mut self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
        color: Rgb,
        inside: impl Fn(f32, f32) -> bool,
    ) -> u32 {
        let (x0, x1) = self.proj.span(self.proj.origin_x, min_x, max_x);
        let (y0, y1) = self.proj.span(self.proj.origin_y, min_y, max_y);
        let mut painted = 0;
        for py in y0..y1 {
            for px in x0..x1 {
                let (lx, ly) = self.proj.pixel_center(px, py);
                if inside(lx, ly) {
                    self.put(px, py, color);
                    painted += 1;
                }
            }
        }
        painted
    }
}
