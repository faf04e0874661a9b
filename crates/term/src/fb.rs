//! Framebuffer and style types for terminal rendering.
//!
//! Coordinates passed to the text and box helpers are signed so callers can
//! place content partly off-screen; anything outside the buffer is clipped.

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

    /// Linear blend from `self` (t = 0) to `other` (t = 1).
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(40, 60, 70),
            bg: Rgb::new(203, 240, 241),
            bold: false,
            dim: false,
        }
    }
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
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
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation where possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.index(x as i32, y as i32).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// One row as a string, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect()
    }

    /// Write `s` starting at `x`, clipping on both edges.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, style.into_cell(ch));
        }
    }

    /// Write `s` so its last character lands on `right_x`.
    pub fn put_str_right(&mut self, right_x: i32, y: i32, s: &str, style: CellStyle) {
        let len = s.chars().count() as i32;
        self.put_str(right_x - len + 1, y, s, style);
    }

    /// Write `s` centered in the span `[x, x + w)`.
    pub fn put_str_centered(&mut self, x: i32, w: i32, y: i32, s: &str, style: CellStyle) {
        let len = s.chars().count() as i32;
        self.put_str(x + (w - len) / 2, y, s, style);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, style.into_cell(ch));
            }
        }
    }

    /// Single-line box outline; the interior is left untouched.
    pub fn draw_box(&mut self, x: i32, y: i32, w: i32, h: i32, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let (right, bottom) = (x + w - 1, y + h - 1);
        for cx in x + 1..right {
            self.set(cx, y, style.into_cell('─'));
            self.set(cx, bottom, style.into_cell('─'));
        }
        for cy in y + 1..bottom {
            self.set(x, cy, style.into_cell('│'));
            self.set(right, cy, style.into_cell('│'));
        }
        self.set(x, y, style.into_cell('┌'));
        self.set(right, y, style.into_cell('┐'));
        self.set(x, bottom, style.into_cell('└'));
        self.set(right, bottom, style.into_cell('┘'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_str_clips() {
        let mut fb = FrameBuffer::new(5, 1);
        let style = CellStyle::default();
        fb.put_str(-2, 0, "abcdefgh", style);
        assert_eq!(fb.row_text(0), "cdefg");
    }

    #[test]
    fn test_put_str_right_anchors_last_char() {
        let mut fb = FrameBuffer::new(6, 1);
        fb.put_str_right(4, 0, "dog", CellStyle::default());
        assert_eq!(fb.row_text(0), "  dog ");
    }

    #[test]
    fn test_put_str_centered() {
        let mut fb = FrameBuffer::new(7, 1);
        fb.put_str_centered(0, 7, 0, "abc", CellStyle::default());
        assert_eq!(fb.row_text(0), "  abc  ");
    }

    #[test]
    fn test_draw_box_corners() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.draw_box(0, 0, 4, 3, CellStyle::default());
        assert_eq!(fb.row_text(0), "┌──┐");
        assert_eq!(fb.row_text(1), "│  │");
        assert_eq!(fb.row_text(2), "└──┘");
    }

    #[test]
    fn test_resize_keeps_cells_valid() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.resize(3, 4);
        assert_eq!(fb.get(2, 3), Some(Cell::default()));
        assert_eq!(fb.get(3, 0), None);
    }

    #[test]
    fn test_rgb_lerp() {
        let a = Rgb::new(0, 100, 200);
        let b = Rgb::new(100, 100, 0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(50, 100, 100));
    }
}
