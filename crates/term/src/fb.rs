//! Framebuffer and style types for terminal rendering.
//!
//! Besides plain text cells the framebuffer supports half-block pixels: a cell
//! holding `▀` shows its foreground colour in the upper half and its background
//! colour in the lower half, which doubles the vertical resolution and gives
//! roughly square pixels on common terminal fonts.

/// Upper half block; see the module docs.
pub const HALF_BLOCK: char = '▀';

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    /// Half-block cell with both halves set to `color`.
    pub const fn solid(color: Rgb) -> Self {
        Self {
            ch: HALF_BLOCK,
            style: CellStyle::new(color, color),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Paint one half-block pixel. `py` counts half-rows, so cell row is `py / 2`.
    ///
    /// A text cell hit by a pixel is converted to a half-block cell first, keeping
    /// its background in the other half.
    pub fn set_pixel(&mut self, x: u16, py: u32, color: Rgb) {
        let Ok(row) = u16::try_from(py / 2) else {
            return;
        };
        let Some(i) = self.idx(x, row) else {
            return;
        };
        let cell = &mut self.cells[i];
        if cell.ch != HALF_BLOCK {
            *cell = Cell::solid(cell.style.bg);
        }
        if py % 2 == 0 {
            cell.style.fg = color;
        } else {
            cell.style.bg = color;
        }
    }

    /// Colour of a half-block pixel, if the cell holds one.
    pub fn pixel(&self, x: u16, py: u32) -> Option<Rgb> {
        let row = u16::try_from(py / 2).ok()?;
        let cell = self.get(x, row)?;
        if cell.ch != HALF_BLOCK {
            return None;
        }
        Some(if py % 2 == 0 {
            cell.style.fg
        } else {
            cell.style.bg
        })
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` starting at `(x, y)`; returns the column after the last glyph.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write a decimal number without allocating; returns the next column.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }

        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, d as char, style);
            cx += 1;
        }
        cx
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Concatenated glyphs of one row (tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }
}

/// Number of decimal digits in `value`.
pub fn digit_count(value: u32) -> u16 {
    let mut n = value;
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}
