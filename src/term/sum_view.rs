//! SumGridView: maps the sum grid into a terminal framebuffer.

use crate::core::sum_grid::CellState;
use crate::core::SumGrid;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::view::{accent_style, fg_style, hint_style, mark_rgb, Viewport};
use crate::types::{GRID_COLUMNS, GRID_SIZE, TARGET_COUNT};

/// Horizontal span per grid cell.
const CELL_W: u16 = 4;

#[derive(Debug, Default)]
pub struct SumGridView;

impl SumGridView {
    /// Render targets, grid, cursor and status line into a framebuffer.
    pub fn render(
        &self,
        game: &SumGrid,
        cursor: usize,
        status: &str,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let rows = (GRID_SIZE / GRID_COLUMNS) as u16;
        let grid_w = GRID_COLUMNS as u16 * CELL_W;
        let bx = viewport.width.saturating_sub(grid_w) / 2;
        let by = viewport.height.saturating_sub(rows + 6) / 2 + 2;

        fb.put_str(bx, by.saturating_sub(2), "SUM GRID", accent_style());

        // Target row: digits 1-4 complete (or reverse) the target below them.
        for (i, &target) in game.targets().iter().enumerate() {
            let tx = bx + i as u16 * CELL_W;
            let style = match game.objective(i) {
                Some(obj) => {
                    let mut s = fg_style(mark_rgb(obj.color));
                    s.bold = true;
                    s
                }
                None => fg_style(Rgb::new(220, 220, 220)),
            };
            fb.put_str(tx, by, &format!("{:>2}", target), style);
            fb.put_char(tx + 2, by, '·', hint_style());
        }

        for idx in 0..GRID_SIZE {
            let col = (idx % GRID_COLUMNS) as u16;
            let row = (idx / GRID_COLUMNS) as u16;
            let sx = bx + col * CELL_W;
            let sy = by + 2 + row;
            self.draw_cell(&mut fb, game, idx, sx, sy, idx == cursor);
        }

        let status_y = by + 2 + rows + 1;
        fb.put_str(bx, status_y, status, fg_style(Rgb::new(200, 200, 120)));
        fb.put_str(
            bx,
            status_y + 1,
            "arrows move · space mark · 1-4 target · n new · q quit",
            hint_style(),
        );

        fb
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        game: &SumGrid,
        idx: usize,
        sx: u16,
        sy: u16,
        under_cursor: bool,
    ) {
        let number = game.numbers()[idx];
        let style = match game.cell(idx) {
            Some(CellState::Marked) => {
                let color = game.selection_color().map(mark_rgb).unwrap_or_default();
                CellStyle {
                    fg: Rgb::new(15, 15, 15),
                    bg: color,
                    bold: true,
                    dim: false,
                }
            }
            Some(CellState::Locked(color)) => CellStyle {
                fg: mark_rgb(color),
                dim: true,
                ..CellStyle::default()
            },
            _ => CellStyle::default(),
        };
        fb.put_char(sx + 1, sy, char::from(b'0' + number.min(9)), style);

        if under_cursor {
            fb.put_char(sx, sy, '[', accent_style());
            fb.put_char(sx + 2, sy, ']', accent_style());
        }
    }
}
