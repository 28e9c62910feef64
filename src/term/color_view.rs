//! ColorGridView: maps the color grid into a terminal framebuffer.

use crate::core::color_grid::GRID_ROWS;
use crate::core::ColorGrid;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::term::view::{accent_style, fg_style, hint_style, mark_rgb, Viewport};
use crate::types::GRID_COLUMNS;

/// Horizontal span per grid cell.
const CELL_W: u16 = 4;

#[derive(Debug, Default)]
pub struct ColorGridView;

impl ColorGridView {
    /// Render the grid, cursor, status line and optional celebration banner.
    pub fn render(
        &self,
        grid: &ColorGrid,
        cursor: usize,
        status: &str,
        celebrating: bool,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let grid_w = GRID_COLUMNS as u16 * CELL_W;
        let bx = viewport.width.saturating_sub(grid_w) / 2;
        let by = viewport.height.saturating_sub(GRID_ROWS as u16 + 5) / 2 + 1;

        fb.put_str(bx, by.saturating_sub(1), "COLOR GRID", accent_style());

        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLUMNS {
                let idx = row * GRID_COLUMNS + col;
                let sx = bx + col as u16 * CELL_W;
                let sy = by + 1 + row as u16;
                self.draw_cell(&mut fb, grid, idx, sx, sy, idx == cursor);
            }
        }

        let status_y = by + 1 + GRID_ROWS as u16 + 1;
        if celebrating {
            let mut banner = accent_style();
            banner.fg = Rgb::new(250, 220, 90);
            fb.put_str(bx, status_y, "*** FULL BOARD! ***", banner);
        } else {
            fb.put_str(bx, status_y, status, fg_style(Rgb::new(200, 200, 120)));
        }
        fb.put_str(
            bx,
            status_y + 1,
            "arrows move · space cycle · c complete · n new · q quit",
            hint_style(),
        );

        fb
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        grid: &ColorGrid,
        idx: usize,
        sx: u16,
        sy: u16,
        under_cursor: bool,
    ) {
        let Some(cell) = grid.cell(idx) else {
            return;
        };

        let (ch, style) = match (cell.number, cell.highlight) {
            (Some(n), Some(color)) => (
                char::from(b'0' + n.min(9)),
                CellStyle {
                    fg: Rgb::new(15, 15, 15),
                    bg: mark_rgb(color),
                    bold: true,
                    dim: false,
                },
            ),
            (Some(n), None) => (char::from(b'0' + n.min(9)), CellStyle::default()),
            // Removed cell: empty slot at the top of a compacted column.
            (None, _) => (' ', hint_style()),
        };
        fb.put_char(sx + 1, sy, ch, style);

        if under_cursor {
            fb.put_char(sx, sy, '[', accent_style());
            fb.put_char(sx + 2, sy, ']', accent_style());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimpleRng;
    use crate::types::GRID_SIZE;

    #[test]
    fn test_render_fits_viewport() {
        let mut rng = SimpleRng::new(12345);
        let grid = ColorGrid::generate(&mut rng);

        let fb = ColorGridView.render(&grid, 0, "ready", false, Viewport::new(80, 24));
        assert_eq!(fb.width(), 80);
        assert_eq!(fb.height(), 24);
    }

    #[test]
    fn test_render_shows_all_numbers() {
        let mut rng = SimpleRng::new(12345);
        let grid = ColorGrid::generate(&mut rng);

        let fb = ColorGridView.render(&grid, 0, "", false, Viewport::new(80, 24));
        let digits = fb
            .cells()
            .iter()
            .filter(|c| c.ch.is_ascii_digit())
            .count();
        assert_eq!(digits, GRID_SIZE);
    }
}
