//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw. Later frames only rewrite runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    previous: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            previous: None,
            out: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.out.clear();
        encode_frame_into(self.previous.as_ref(), fb, &mut self.out)?;
        self.flush()?;

        match self.previous.as_mut() {
            Some(previous) => previous.clone_from(fb),
            None => self.previous = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `previous` into `next` on screen.
///
/// Without a previous frame, or when the size differs, the whole screen is
/// cleared and redrawn.
pub fn encode_frame_into(
    previous: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let previous =
        previous.filter(|p| p.width() == next.width() && p.height() == next.height());
    if previous.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<CellStyle> = None;
    for (x, y, len) in dirty_runs(previous, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let cell = next.get(cx, y).unwrap_or_default();
            if style != Some(cell.style) {
                queue_style(out, cell.style)?;
                style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Horizontal runs `(x, y, len)` of cells that differ between frames.
fn dirty_runs(previous: Option<&FrameBuffer>, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let Some(previous) = previous else {
        return (0..next.height()).map(|y| (0, y, next.width())).collect();
    };

    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start: Option<u16> = None;
        for x in 0..next.width() {
            let changed = previous.get(x, y) != next.get(x, y);
            match (changed, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, y, next.width() - s));
        }
    }
    runs
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_redraw_covers_every_row() {
        let fb = FrameBuffer::new(3, 2);
        assert_eq!(dirty_runs(None, &fb), vec![(0, 0, 3), (0, 1, 3)]);
    }

    #[test]
    fn test_dirty_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 1);
        let mut b = FrameBuffer::new(6, 1);
        b.put_str(1, 0, "XY", style);
        b.put_str(5, 0, "Z", style);

        assert_eq!(dirty_runs(Some(&a), &b), vec![(1, 0, 2), (5, 0, 1)]);
    }

    #[test]
    fn test_unchanged_frame_emits_no_cells() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "word", CellStyle::default());

        let mut out = Vec::new();
        encode_frame_into(Some(&fb.clone()), &fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(!text.contains("word"));
    }

    #[test]
    fn test_size_change_forces_full_redraw() {
        let small = FrameBuffer::new(2, 1);
        let mut big = FrameBuffer::new(4, 1);
        big.put_str(0, 0, "abcd", CellStyle::default());

        let mut out = Vec::new();
        encode_frame_into(Some(&small), &big, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains('d'));
    }
}
