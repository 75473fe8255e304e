//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, TOP_SCORES_LIMIT};

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

/// Side-panel content that does not come from the engine snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelInfo<'a> {
    /// Best scores, highest first.
    pub top_scores: &'a [u32],
    /// `(keys, action)` pairs.
    pub help: &'a [(&'a str, &'a str)],
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const LOCKED_FG: Rgb = Rgb::new(150, 150, 150);
const BLOCK: char = '█';

/// Colour of a piece kind, indexed by [`PieceKind::color_id`].
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::T => Rgb::new(170, 90, 200),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::J => Rgb::new(80, 120, 220),
    }
}

/// Board renderer with a configurable cell aspect.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    /// Zero sizes are bumped to 1.
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        panel: &PanelInfo<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = (snap.width as u16).saturating_mul(self.cell_w);
        let board_h = (snap.height as u16).saturating_mul(self.cell_h);
        let (frame_w, frame_h) = (board_w.saturating_add(2), board_h.saturating_add(2));
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        let play = CellStyle::plain(PLAY_BG, PLAY_BG);
        fb.fill_rect(frame.x.saturating_add(1), frame.y.saturating_add(1), board_w, board_h, ' ', play);
        draw_border(fb, frame);

        // Rows and columns past the viewport edge are skipped.
        let rows = snap.height.min(usize::from(viewport.height));
        let cols = snap.width.min(usize::from(viewport.width));
        for y in 0..rows {
            for x in 0..cols {
                let (ch, style) = if let Some(id) = snap.active_color_at(x, y) {
                    let fg = PieceKind::from_color_id(id).map_or(LOCKED_FG, piece_color);
                    (BLOCK, CellStyle::plain(fg, PLAY_BG).bold())
                } else if snap.locked(x, y) {
                    (BLOCK, CellStyle::plain(LOCKED_FG, PLAY_BG))
                } else {
                    ('·', CellStyle::plain(Rgb::new(90, 90, 100), PLAY_BG).dim())
                };
                self.fill_cell(fb, frame, x as u16, y as u16, ch, style);
            }
        }

        self.draw_panel(fb, snap, panel, viewport, frame);

        let overlay = match snap.phase {
            Phase::Idle => Some("PRESS ENTER"),
            Phase::Paused => Some("PAUSED"),
            Phase::Over => Some("GAME OVER"),
            Phase::Running => None,
        };
        if let Some(text) = overlay {
            draw_overlay(fb, frame, text);
        }
    }

    pub fn render(
        &self,
        snap: &GameSnapshot,
        panel: &PanelInfo<'_>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, panel, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        panel: &PanelInfo<'_>,
        viewport: Viewport,
        frame: Frame,
    ) {
        let x = frame.x.saturating_add(frame.w).saturating_add(2);
        if x >= viewport.width || viewport.width - x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let mut y = frame.y;

        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(x, y, "LEVEL", label);
        fb.put_u32(x, y + 1, snap.level, value);
        y += 3;

        fb.put_str(x, y, "SPEED", label);
        let end = fb.put_u32(x, y + 1, snap.interval_ms, value);
        fb.put_str(end, y + 1, "ms", value);
        y += 3;

        fb.put_str(x, y, "STATE", label);
        fb.put_str(x, y + 1, phase_label(snap.phase), value);
        y += 3;

        fb.put_str(x, y, "TOP 10", label);
        y += 1;
        if panel.top_scores.is_empty() {
            fb.put_str(x, y, "-", value.dim());
            y += 1;
        }
        for (rank, score) in panel.top_scores.iter().take(TOP_SCORES_LIMIT).enumerate() {
            let end = fb.put_u32(x, y, rank as u32 + 1, value.dim());
            fb.put_str(end, y, ".", value.dim());
            fb.put_u32(x + 4, y, *score, value);
            y += 1;
        }

        if panel.help.is_empty() {
            return;
        }
        y += 1;
        for (keys, action) in panel.help {
            if y >= viewport.height {
                break;
            }
            fb.put_str(x, y, keys, value.dim());
            fb.put_str(x + 9, y, action, value.dim());
            y += 1;
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "READY",
        Phase::Running => "PLAYING",
        Phase::Paused => "PAUSED",
        Phase::Over => "GAME OVER",
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame) {
    if frame.w < 2 || frame.h < 2 {
        return;
    }
    let style = CellStyle::default();
    let right = frame.x.saturating_add(frame.w - 1);
    let bottom = frame.y.saturating_add(frame.h - 1);

    fb.put_char(frame.x, frame.y, '┌', style);
    fb.put_char(right, frame.y, '┐', style);
    fb.put_char(frame.x, bottom, '└', style);
    fb.put_char(right, bottom, '┘', style);
    for x in frame.x + 1..right {
        fb.put_char(x, frame.y, '─', style);
        fb.put_char(x, bottom, '─', style);
    }
    for y in frame.y + 1..bottom {
        fb.put_char(frame.x, y, '│', style);
        fb.put_char(right, y, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let width = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(width) / 2);
    let y = frame.y.saturating_add(frame.h / 2);
    let style = CellStyle::plain(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x, y, text, style);
}
