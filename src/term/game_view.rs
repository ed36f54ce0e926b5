//! GameView: maps app state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::app::{App, Screen};
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current app state into a framebuffer.
    pub fn render(&self, app: &App, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let well = Style::new(Rgb::new(80, 80, 90), Rgb::new(20, 20, 28));
        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        let board = app.game.board();
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match board.get(x, y).flatten() {
                    Some(kind) => {
                        self.draw_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, kind)
                    }
                    None => self.draw_empty_cell(&mut fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Active piece.
        if let Some(active) = app.game.active() {
            for (dx, dy) in active.shape.occupied() {
                let x = active.x + dx;
                let y = active.y + dy;
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(&mut fb, app, viewport, start_x, start_y, frame_w);

        match app.screen() {
            Screen::EnterName { buf } => {
                self.draw_name_prompt(&mut fb, app, start_x, start_y, frame_w, frame_h, buf);
            }
            Screen::Game => match app.game.phase() {
                Phase::Idle => self.draw_overlay_text(
                    &mut fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    "PRESS ENTER TO START",
                ),
                Phase::Paused => {
                    self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED")
                }
                Phase::GameOver => self.draw_overlay_text(
                    &mut fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    "GAME OVER - R TO RESET",
                ),
                Phase::Running => {}
            },
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = Style::new(Rgb::new(60, 60, 72), Rgb::new(20, 20, 28));
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = Style {
            fg: piece_color(kind),
            bg: Rgb::new(20, 20, 28),
            bold: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        app: &App,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let faint = Style::new(Rgb::new(130, 130, 140), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &app.game.score().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &app.game.level().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &app.game.lines().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TOP SCORES", label);
        y = y.saturating_add(1);
        if app.leaderboard.entries().is_empty() {
            fb.put_str(panel_x, y, "none yet", faint);
            y = y.saturating_add(1);
        }
        for (i, entry) in app.leaderboard.entries().iter().enumerate() {
            if y >= viewport.height {
                break;
            }
            let line = format!("{:>2}. {:<10} {}", i + 1, clip(&entry.name, 10), entry.score);
            fb.put_str(panel_x, y, &line, if i < 3 { value.bold() } else { value });
            y = y.saturating_add(1);
        }

        y = y.saturating_add(1);
        if y < viewport.height {
            fb.put_str(panel_x, y, "arrows move · space drop", faint);
        }
        y = y.saturating_add(1);
        if y < viewport.height {
            fb.put_str(panel_x, y, "p pause · r reset · q quit", faint);
        }
    }

    fn draw_name_prompt(
        &self,
        fb: &mut FrameBuffer,
        app: &App,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        buf: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let faint = Style::new(Rgb::new(170, 170, 170), Rgb::new(0, 0, 0));

        let lines = [
            "GAME OVER".to_string(),
            format!("FINAL SCORE: {}", app.game.score()),
            format!("NAME: {buf}_"),
            "enter save · esc skip".to_string(),
        ];

        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let y = mid_y.saturating_sub(2).saturating_add(i as u16);
            let s = if i == 3 { faint } else { style };
            fb.put_str(x, y, line, s);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Fixed fill color per piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::Z => Rgb::new(240, 0, 0),
    }
}

fn clip(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
