//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previously presented frame and only changed runs
//! of cells are re-emitted. Commands are encoded into a byte buffer first and
//! written with a single flush per frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    /// Whether keyboard enhancement (release/repeat reporting) was pushed.
    enhanced_keys: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            enhanced_keys: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.enhanced_keys = terminal::supports_keyboard_enhancement().unwrap_or(false);

        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        if self.enhanced_keys {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;

        log::debug!(
            "terminal entered (key release events: {})",
            self.enhanced_keys
        );
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.enhanced_keys {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.enhanced_keys = false;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::debug!("terminal restored");
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; after the call it
    /// holds the previous frame and can be redrawn in place without cloning.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        pen.print_run(out, fb, 0, y, fb.width())?;
    }
    pen.finish(out)
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    let mut dirty = false;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        pen.print_run(out, next, x, y, len)?;
        dirty = true;
    }
    if dirty {
        pen.finish(out)?;
    }
    Ok(())
}

/// Tracks the terminal's current style so unchanged attributes are not re-sent.
#[derive(Default)]
struct Pen {
    style: Option<CellStyle>,
}

impl Pen {
    fn print_run(
        &mut self,
        out: &mut Vec<u8>,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
    ) -> Result<()> {
        for dx in 0..len {
            let cell = fb.get(x + dx, y).unwrap_or_default();
            self.apply(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let prev = self.style;
        if prev == Some(style) {
            return Ok(());
        }
        if prev.map(|p| p.bold) != Some(style.bold) {
            out.queue(SetAttribute(if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            }))?;
        }
        if prev.map(|p| p.fg) != Some(style.fg) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        }
        if prev.map(|p| p.bg) != Some(style.bg) {
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        }
        self.style = Some(style);
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        self.style = None;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Runs `(x, y, len)` of cells that differ between two same-sized frames.
fn changed_runs<'a>(
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
) -> impl Iterator<Item = (u16, u16, u16)> + 'a {
    let w = next.width();
    let differs = move |x: u16, y: u16| -> bool {
        prev.get(x, y).unwrap_or_default() != next.get(x, y).unwrap_or_default()
    };

    (0..next.height()).flat_map(move |y| {
        let mut x = 0u16;
        std::iter::from_fn(move || {
            while x < w && !differs(x, y) {
                x += 1;
            }
            if x >= w {
                return None;
            }
            let start = x;
            while x < w && differs(x, y) {
                x += 1;
            }
            Some((start, y, x - start))
        })
    })
}
