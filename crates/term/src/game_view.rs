//! GameView: maps a `RoundSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{RoundSnapshot, SymbolPool};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Card, RoundStatus, GRID_COLUMNS};

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

const TABLE_BG: Rgb = Rgb::new(20, 60, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Lays out the card grid, side panel and end-of-round overlay.
pub struct GameView {
    /// Card width in terminal columns (including its outline).
    card_w: u16,
    /// Card height in terminal rows (including its outline).
    card_h: u16,
    /// Blank columns between neighbouring cards.
    gap: u16,
    columns: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            card_w: 7,
            card_h: 3,
            gap: 1,
            columns: GRID_COLUMNS as u16,
        }
    }
}

impl GameView {
    /// Size of the table frame (border included) for `cards` cards.
    pub fn frame_size(&self, cards: usize) -> (u16, u16) {
        let rows = (cards as u16).div_ceil(self.columns).max(1);
        let grid_w = self.columns * self.card_w + (self.columns - 1) * self.gap;
        let grid_h = rows * self.card_h;
        // One column/row of padding inside the border on each side.
        (grid_w + 4, grid_h + 4)
    }

    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        pool: &SymbolPool,
        cursor: Option<usize>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout_cards = if snap.cards.is_empty() {
            snap.pair_count as usize * 2
        } else {
            snap.cards.len()
        };
        let (frame_w, frame_h) = self.frame_size(layout_cards);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 1) / 2 + 1;

        self.draw_header(fb, snap, start_x, start_y.saturating_sub(1), frame_w);

        let table = CellStyle::new(Rgb::new(120, 160, 130), TABLE_BG);
        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', table);
        fb.draw_box(
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG),
        );

        for (i, card) in snap.cards.iter().enumerate() {
            let col = i as u16 % self.columns;
            let row = i as u16 / self.columns;
            let x = start_x + 2 + col * (self.card_w + self.gap);
            let y = start_y + 2 + row * self.card_h;
            self.draw_card(fb, x, y, card, pool, cursor == Some(i));
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        match snap.status {
            RoundStatus::Idle => {
                let lines = ["Press S to start", "D: change difficulty"];
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, &lines, false);
            }
            RoundStatus::Won | RoundStatus::Lost => {
                if let Some(summary) = snap.summary {
                    let detail = summary.detail();
                    let mut prompt = String::from("S: ");
                    prompt.push_str(summary.restart_label());
                    let lines = [summary.headline(), detail.as_str(), prompt.as_str()];
                    self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, &lines, !summary.win);
                }
            }
            RoundStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &RoundSnapshot,
        pool: &SymbolPool,
        cursor: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, pool, cursor, viewport, &mut fb);
        fb
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, x: u16, y: u16, w: u16) {
        if snap.status != RoundStatus::Running {
            return;
        }
        const LABEL: &str = "Time left: ";
        let style = CellStyle::new(Rgb::new(240, 240, 240), PANEL_BG).bold();
        let digits = snap.seconds_remaining.max(1).ilog10() as u16 + 1;
        let len = LABEL.len() as u16 + digits + 1;
        let left = x.saturating_add(w.saturating_sub(len) / 2);

        fb.put_str(left, y, LABEL, style);
        let num_x = left.saturating_add(LABEL.len() as u16);
        fb.put_u32(num_x, y, snap.seconds_remaining, style);
        fb.put_char(num_x.saturating_add(digits), y, 's', style);
    }

    fn draw_card(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        card: &Card,
        pool: &SymbolPool,
        selected: bool,
    ) {
        let (edge, face) = if card.matched {
            (
                CellStyle::new(Rgb::new(90, 200, 110), TABLE_BG).dim(),
                CellStyle::new(Rgb::new(120, 230, 140), TABLE_BG),
            )
        } else if card.face_up {
            (
                CellStyle::new(Rgb::new(250, 220, 90), TABLE_BG),
                CellStyle::new(Rgb::new(255, 240, 150), TABLE_BG).bold(),
            )
        } else {
            (
                CellStyle::new(Rgb::new(170, 170, 190), TABLE_BG),
                CellStyle::new(Rgb::new(110, 110, 150), TABLE_BG),
            )
        };
        let edge = if selected {
            CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(70, 70, 160)).bold()
        } else {
            edge
        };

        fb.draw_box(x, y, self.card_w, self.card_h, edge);

        let inner_w = self.card_w - 2;
        let mid_y = y + self.card_h / 2;
        if card.face_up || card.matched {
            fb.put_str_centered(x + 1, mid_y, inner_w, pool.glyph(card.symbol), face);
        } else {
            fb.fill_rect(x + 1, y + 1, inner_w, self.card_h - 2, '▒', face);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.difficulty.label(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.seconds_remaining, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        let digits = snap.score.max(1).ilog10() as u16 + 1;
        fb.put_char(panel_x + digits, y, '/', value);
        fb.put_u32(panel_x + digits + 1, y, snap.pair_count, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SOUND", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, if snap.muted { "OFF" } else { "ON" }, value);
        y = y.saturating_add(2);

        let hint = value.dim();
        for line in ["arrows move", "space flip", "r give up", "m mute", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
        alert: bool,
    ) {
        let count = lines.len() as u16;
        let top = start_y.saturating_add(frame_h.saturating_sub(count) / 2);
        let headline = CellStyle::new(
            if alert {
                Rgb::new(240, 70, 70)
            } else {
                Rgb::new(255, 255, 255)
            },
            PANEL_BG,
        )
        .bold();
        let body = CellStyle::new(Rgb::new(230, 230, 230), PANEL_BG);

        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { headline } else { body };
            let len = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(len + 2) / 2);
            let y = top + i as u16;
            fb.fill_rect(x, y, len + 2, 1, ' ', body);
            fb.put_str(x + 1, y, line, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Difficulty, Symbol};

    fn running_snapshot(cards: Vec<Card>) -> RoundSnapshot {
        RoundSnapshot {
            status: RoundStatus::Running,
            difficulty: Difficulty::Easy,
            pair_count: (cards.len() / 2) as u32,
            seconds_remaining: 25,
            round_seconds: 25,
            cards,
            ..RoundSnapshot::default()
        }
    }

    #[test]
    fn frame_fits_four_columns() {
        let view = GameView::default();
        // 4 * 7 + 3 gaps = 31, plus 2 padding and 2 border.
        assert_eq!(view.frame_size(8), (35, 10));
        assert_eq!(view.frame_size(16), (35, 16));
        assert_eq!(view.frame_size(0), (35, 7));
    }

    #[test]
    fn header_counts_down_in_place() {
        let pool = SymbolPool::default();
        let mut snap = running_snapshot(vec![Card::new(Symbol(0)); 8]);
        let view = GameView::default();
        let mut fb = FrameBuffer::new(0, 0);

        view.render_into(&snap, &pool, None, Viewport::new(35, 12), &mut fb);
        assert_eq!(fb.row_text(0).trim(), "Time left: 25s");

        snap.seconds_remaining = 7;
        view.render_into(&snap, &pool, None, Viewport::new(35, 12), &mut fb);
        let header = fb.row_text(0);
        assert_eq!(header.trim(), "Time left: 7s");
        // Centred over the 35-column frame.
        assert_eq!(header.find('T'), Some(11));
    }

    #[test]
    fn face_up_card_shows_glyph() {
        let pool = SymbolPool::new(["x", "y"]);
        let mut cards = vec![Card::new(Symbol(0)); 4];
        cards[0].face_up = true;
        let snap = running_snapshot(cards);

        let view = GameView::default();
        let fb = view.render(&snap, &pool, None, Viewport::new(35, 9));

        // Frame starts at (0,1); first card at (2,3); glyph on its middle row.
        assert_eq!(fb.get(2, 3).unwrap().ch, '┌');
        assert_eq!(fb.get(5, 4).unwrap().ch, 'x');
        // Second card is face-down.
        assert_eq!(fb.get(11, 4).unwrap().ch, '▒');
    }
}
