//! BoardView: maps the rotation board into a terminal framebuffer.
//!
//! Pure (no I/O); unit-testable. One board slot takes a 4-column span so
//! the cursor brackets fit around the token glyph.

use crate::core::{Board, GoalFigure};
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::term::view::{accent_style, fg_style, hint_style, token_rgb, Viewport};
use crate::types::{BOARD_COLS, COLUMN_HEIGHT, PLAYABLE_ROWS, RESERVE_ROW};

/// Horizontal span per board slot.
const SLOT_W: u16 = 4;

/// A lightweight terminal renderer for the rotation game.
#[derive(Debug, Default)]
pub struct BoardView;

impl BoardView {
    /// Render board, goal figure, cursor and status line into a framebuffer.
    pub fn render(
        &self,
        board: &Board,
        figure: &GoalFigure,
        cursor: (usize, usize),
        status: &str,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_w = BOARD_COLS as u16 * SLOT_W + 1;
        // Reserve row + separator + playable rows.
        let board_h = COLUMN_HEIGHT as u16 + 1;
        let total_w = board_w + 2 + 10; // board + gap + goal panel
        let bx = viewport.width.saturating_sub(total_w) / 2;
        let by = viewport.height.saturating_sub(board_h + 4) / 2 + 1;

        fb.put_str(bx, by.saturating_sub(1), "ROTATE", accent_style());

        for col in 0..BOARD_COLS {
            for row in 0..COLUMN_HEIGHT {
                let sx = bx + col as u16 * SLOT_W + 1;
                let sy = by + row as u16 + u16::from(row > RESERVE_ROW);
                self.draw_slot(&mut fb, board, col, row, sx, sy, cursor == (col, row));
            }
        }

        // Separator between reserves and the playable grid.
        let sep_style = hint_style();
        for x in 0..board_w {
            fb.put_char(bx + x, by + 1, '─', sep_style);
        }

        self.draw_goal(&mut fb, figure, bx + board_w + 2, by);

        let status_y = by + board_h + 1;
        fb.put_str(bx, status_y, status, fg_style(crate::term::fb::Rgb::new(200, 200, 120)));
        fb.put_str(
            bx,
            status_y + 1,
            "arrows move · space select · r rotate · n new · q quit",
            hint_style(),
        );

        fb
    }

    fn draw_slot(
        &self,
        fb: &mut FrameBuffer,
        board: &Board,
        col: usize,
        row: usize,
        sx: u16,
        sy: u16,
        under_cursor: bool,
    ) {
        let slot = board.get(col, row).flatten();

        let (ch, style) = match slot {
            Some(token) => {
                let mut style = fg_style(token_rgb(token));
                if token.is_blocked() {
                    style.dim = true;
                } else if board.is_selectable(col, row) {
                    style.bold = true;
                }
                ('●', style)
            }
            None => ('·', hint_style()),
        };
        fb.put_char(sx + 1, sy, ch, style);

        if under_cursor {
            fb.put_char(sx, sy, '[', accent_style());
            fb.put_char(sx + 2, sy, ']', accent_style());
        }
    }

    fn draw_goal(&self, fb: &mut FrameBuffer, figure: &GoalFigure, gx: u16, gy: u16) {
        fb.put_str(gx, gy.saturating_sub(1), "GOAL", accent_style());

        let on = fg_style(token_rgb(figure.color()));
        let off = hint_style();
        for row in 0..PLAYABLE_ROWS {
            for col in 0..PLAYABLE_ROWS {
                let (ch, style) = if figure.is_set(row, col) {
                    ('■', on)
                } else {
                    ('·', off)
                };
                fb.put_char(gx + col as u16 * 2, gy + 1 + row as u16, ch, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimpleRng;

    #[test]
    fn test_render_fits_viewport() {
        let mut rng = SimpleRng::new(12345);
        let board = Board::generate(&mut rng);
        let figure = GoalFigure::generate(&mut rng);

        let view = BoardView;
        let fb = view.render(&board, &figure, (0, 1), "ready", Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
    }

    #[test]
    fn test_render_tiny_viewport_does_not_panic() {
        let mut rng = SimpleRng::new(1);
        let board = Board::generate(&mut rng);
        let figure = GoalFigure::generate(&mut rng);

        let view = BoardView;
        let fb = view.render(&board, &figure, (3, 4), "x", Viewport::new(5, 3));
        assert_eq!(fb.width(), 5);
    }

    #[test]
    fn test_render_draws_tokens() {
        let mut rng = SimpleRng::new(12345);
        let board = Board::generate(&mut rng);
        let figure = GoalFigure::generate(&mut rng);

        let view = BoardView;
        let fb = view.render(&board, &figure, (0, 1), "", Viewport::new(80, 24));
        let tokens = fb.cells().iter().filter(|c| c.ch == '●').count();
        // 16 playable + 3 black reserves.
        assert_eq!(tokens, 19);
    }
}
