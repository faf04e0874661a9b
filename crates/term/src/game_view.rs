//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::flash::{FlashKind, Flashes};
use crate::layout::{LayoutConfig, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::types::{GameState, MAX_STRIKES};

pub const TEXT_BOX_WIDTH: i32 = 56;
pub const TEXT_BOX_HEIGHT: i32 = 3;
pub const SCORE_BOX_WIDTH: i32 = 30;
pub const TOP_BAR_ROWS: i32 = 3;

const INK: Rgb = Rgb::new(40, 60, 70);
const BACKGROUND: Rgb = Rgb::new(203, 240, 241);
const BAR: Rgb = Rgb::new(229, 248, 248);
const ACCENT: Rgb = Rgb::new(60, 144, 179);
const GREEN: Rgb = Rgb::new(40, 170, 80);
const RED: Rgb = Rgb::new(200, 50, 50);
const YELLOW: Rgb = Rgb::new(220, 170, 20);

const HELP: &str = "Enter submit · Esc clear · F2 restart · Ctrl-C quit";

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

/// Everything the view needs besides the game state.
#[derive(Debug, Clone, Copy)]
pub struct HudState<'a> {
    /// Current contents of the input box.
    pub input: &'a str,
    pub flashes: &'a Flashes,
}

/// A lightweight terminal renderer for the word game.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    layout: LayoutConfig,
}

impl GameView {
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: HudState<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(INK, BACKGROUND).into_cell(' '));

        let origin = (
            viewport.width.saturating_sub(CANVAS_WIDTH) as i32 / 2,
            viewport.height.saturating_sub(CANVAS_HEIGHT) as i32 / 2,
        );
        let mut canvas = Canvas { fb, origin };

        self.draw_recent_words(&mut canvas, snap);

        if snap.state != GameState::EnteringPlayerNames {
            self.draw_timer_bar(&mut canvas, snap);
            self.draw_score_box(&mut canvas, snap);
            self.draw_names(&mut canvas, snap);
            self.draw_strikes(&mut canvas, snap);
        }

        self.draw_prompt(&mut canvas, snap);
        self.draw_text_box(&mut canvas, snap, hud);

        let help_style = CellStyle::new(INK, BACKGROUND).dim();
        canvas.put_str_centered(0, CANVAS_WIDTH as i32, CANVAS_HEIGHT as i32 - 1, HELP, help_style);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: HudState<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_recent_words(&self, canvas: &mut Canvas<'_>, snap: &GameSnapshot) {
        let bar = CellStyle::new(INK, BAR);
        canvas.fill_rect(0, 0, CANVAS_WIDTH as i32, TOP_BAR_ROWS, ' ', bar);

        // Newest word ends at the anchor; older words scroll off the left edge.
        let pos = self.layout.recent_words;
        let text = &snap.recent_words;
        let len = text.chars().count() as i32;
        let skip = (len - pos.x_pos - 1).max(0) as usize;
        let visible: String = text.chars().skip(skip).collect();
        canvas.put_str_right(pos.x_pos, pos.y_pos, &visible, bar.bold());
    }

    fn draw_timer_bar(&self, canvas: &mut Canvas<'_>, snap: &GameSnapshot) {
        let pos = self.layout.text_box;
        let style = CellStyle::new(ACCENT, BACKGROUND);
        let filled = (TEXT_BOX_WIDTH as f32 * snap.timer_fraction()).round() as i32;
        let y = pos.y_pos - 1;

        canvas.fill_rect(pos.x_pos, y, filled, 1, '━', style);
        if filled > 0 && filled < TEXT_BOX_WIDTH {
            canvas.put_str(pos.x_pos + filled, y, "✦", style.bold());
        }
    }

    fn draw_score_box(&self, canvas: &mut Canvas<'_>, snap: &GameSnapshot) {
        let pos = self.layout.score_box;
        let style = CellStyle::new(INK, BAR);
        canvas.fill_rect(pos.x_pos, pos.y_pos, SCORE_BOX_WIDTH, 3, ' ', style);
        canvas.draw_box(pos.x_pos, pos.y_pos, SCORE_BOX_WIDTH, 3, style);

        let text = format!("Words Played: {}", snap.words_played);
        canvas.put_str_centered(pos.x_pos, SCORE_BOX_WIDTH, pos.y_pos + 1, &text, style);
    }

    fn draw_names(&self, canvas: &mut Canvas<'_>, snap: &GameSnapshot) {
        let style = CellStyle::new(INK, BAR);
        let arrow = CellStyle::new(ACCENT, BACKGROUND).bold();

        let left = &snap.players[0];
        let label = format!(" {} ({}) ", left.name, left.score);
        let w = label.chars().count() as i32 + 2;
        let pos = self.layout.left_name_box;
        canvas.fill_rect(pos.x_pos, pos.y_pos, w, 3, ' ', style);
        canvas.draw_box(pos.x_pos, pos.y_pos, w, 3, style);
        canvas.put_str(pos.x_pos + 1, pos.y_pos + 1, &label, style.bold());
        if snap.current == 0 {
            canvas.put_str(pos.x_pos + w + 1, pos.y_pos + 1, "◀", arrow);
        }

        let right = &snap.players[1];
        let label = format!(" {} ({}) ", right.name, right.score);
        let w = label.chars().count() as i32 + 2;
        let pos = self.layout.right_name_box;
        let x = pos.x_pos - w + 1;
        canvas.fill_rect(x, pos.y_pos, w, 3, ' ', style);
        canvas.draw_box(x, pos.y_pos, w, 3, style);
        canvas.put_str(x + 1, pos.y_pos + 1, &label, style.bold());
        if snap.current == 1 {
            canvas.put_str(x - 2, pos.y_pos + 1, "▶", arrow);
        }
    }

    fn draw_strikes(&self, canvas: &mut Canvas<'_>, snap: &GameSnapshot) {
        let shadow = CellStyle::new(INK, BACKGROUND).dim();
        let mark = CellStyle::new(RED, BACKGROUND).bold();

        for (index, player) in snap.players.iter().enumerate() {
            let pos = self.layout.strikes_for(index);
            for i in 0..MAX_STRIKES {
                let (x, y) = pos.nth(i);
                if i < player.strikes {
                    canvas.put_str(x, y, "✗", mark);
                } else {
                    canvas.put_str(x, y, "·", shadow);
                }
            }
        }
    }

    fn draw_prompt(&self, canvas: &mut Canvas<'_>, snap: &GameSnapshot) {
        let prompt = match snap.state {
            GameState::EnteringPlayerNames => {
                format!("Enter a name for player {}", snap.naming + 1)
            }
            GameState::GameInitialize => format!("Get ready... {}", snap.time_left.ceil() as u32),
            GameState::Playing => match snap.last_letter() {
                Some(letter) => format!(
                    "{}: a word starting with '{}'",
                    snap.current_player().name,
                    letter
                ),
                None => format!("{}: any word to start", snap.current_player().name),
            },
            GameState::GameOver => "Game over - Enter to play again".to_string(),
        };

        let pos = self.layout.text_box;
        let style = CellStyle::new(INK, BACKGROUND).bold();
        canvas.put_str_centered(pos.x_pos, TEXT_BOX_WIDTH, pos.y_pos - 2, &prompt, style);
    }

    fn draw_text_box(&self, canvas: &mut Canvas<'_>, snap: &GameSnapshot, hud: HudState<'_>) {
        let pos = self.layout.text_box;
        let border = match hud.flashes.strongest() {
            Some((kind, intensity)) => INK.lerp(flash_color(kind), intensity),
            None => INK,
        };
        let inside = CellStyle::new(INK, BAR);

        canvas.fill_rect(pos.x_pos, pos.y_pos, TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT, ' ', inside);
        canvas.draw_box(
            pos.x_pos,
            pos.y_pos,
            TEXT_BOX_WIDTH,
            TEXT_BOX_HEIGHT,
            inside.with_fg(border).bold(),
        );

        let mut text = hud.input.to_string();
        if snap.state != GameState::GameOver {
            text.push('_');
        }
        canvas.put_str_centered(pos.x_pos, TEXT_BOX_WIDTH, pos.y_pos + 1, &text, inside.bold());
    }
}

pub fn flash_color(kind: FlashKind) -> Rgb {
    match kind {
        FlashKind::Scored => GREEN,
        FlashKind::Striked => RED,
        FlashKind::Invalid => YELLOW,
    }
}

/// Framebuffer view with canvas-relative coordinates.
struct Canvas<'a> {
    fb: &'a mut FrameBuffer,
    origin: (i32, i32),
}

impl Canvas<'_> {
    fn put_str(&mut self, x: i32, y: i32, s: &str, style: CellStyle) {
        self.fb.put_str(self.origin.0 + x, self.origin.1 + y, s, style);
    }

    fn put_str_right(&mut self, right_x: i32, y: i32, s: &str, style: CellStyle) {
        self.fb
            .put_str_right(self.origin.0 + right_x, self.origin.1 + y, s, style);
    }

    fn put_str_centered(&mut self, x: i32, w: i32, y: i32, s: &str, style: CellStyle) {
        self.fb
            .put_str_centered(self.origin.0 + x, w, self.origin.1 + y, s, style);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char, style: CellStyle) {
        self.fb
            .fill_rect(self.origin.0 + x, self.origin.1 + y, w, h, ch, style);
    }

    fn draw_box(&mut self, x: i32, y: i32, w: i32, h: i32, style: CellStyle) {
        self.fb
            .draw_box(self.origin.0 + x, self.origin.1 + y, w, h, style);
    }
}
