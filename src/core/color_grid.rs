//! Color grid - highlight cycling with per-column gravity.
//!
//! A 4x4 grid of numbered cells. Clicking a cell cycles its highlight
//! through the palette and back to none. Completing removes every
//! highlighted cell at once and compacts each column independently:
//! survivors fall to the bottom preserving order, vacated top cells hold
//! no number. Index layout is row-major, row 0 on top.

use crate::core::rng::SimpleRng;
use crate::types::{
    MarkColor, GRID_COLUMNS, GRID_NUMBER_MAX, GRID_NUMBER_MIN, GRID_SIZE, MARK_PALETTE,
};

/// Rows in the grid
pub const GRID_ROWS: usize = GRID_SIZE / GRID_COLUMNS;

/// One cell: a number (absent once removed) and an optional highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorCell {
    pub number: Option<u8>,
    pub highlight: Option<MarkColor>,
}

/// Why a click was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    /// The cell was removed by an earlier completion
    EmptyCell,
}

/// Result of a highlight cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Highlight the cell ended up with
    pub highlight: Option<MarkColor>,
    /// The whole board is now highlighted in one single color
    pub celebration: bool,
}

/// The color grid game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    /// Row-major: `cells[row * GRID_COLUMNS + col]`
    cells: [ColorCell; GRID_SIZE],
}

impl ColorGrid {
    /// Generate a fresh grid of random numbers, no highlights
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut cells = [ColorCell::default(); GRID_SIZE];
        for cell in cells.iter_mut() {
            cell.number = Some(rng.next_in(GRID_NUMBER_MIN as u32, GRID_NUMBER_MAX as u32) as u8);
        }
        Self { cells }
    }

    /// Build a grid from explicit numbers (testing helper); `None` cells
    /// start removed.
    pub fn from_numbers(numbers: [Option<u8>; GRID_SIZE]) -> Self {
        let mut cells = [ColorCell::default(); GRID_SIZE];
        for (cell, number) in cells.iter_mut().zip(numbers) {
            cell.number = number;
        }
        Self { cells }
    }

    pub fn cell(&self, idx: usize) -> Option<ColorCell> {
        self.cells.get(idx).copied()
    }

    /// Cell at `(row, col)`, row 0 on top
    pub fn cell_at(&self, row: usize, col: usize) -> Option<ColorCell> {
        if row >= GRID_ROWS || col >= GRID_COLUMNS {
            return None;
        }
        self.cell(row * GRID_COLUMNS + col)
    }

    /// Number of cells still holding a number
    pub fn remaining(&self) -> usize {
        self.cells.iter().filter(|c| c.number.is_some()).count()
    }

    /// Cycle the highlight of a cell: none -> each palette color -> none.
    ///
    /// The outcome reports when the click leaves the entire board
    /// highlighted in a single color (the celebration condition).
    pub fn cycle(&mut self, idx: usize) -> Result<CycleOutcome, Rejection> {
        let Some(cell) = self.cells.get(idx).copied() else {
            return Err(Rejection::OutOfBounds);
        };
        if cell.number.is_none() {
            return Err(Rejection::EmptyCell);
        }

        let next = match cell.highlight {
            None => Some(MARK_PALETTE[0]),
            Some(color) => {
                let i = color.index();
                if i + 1 < MARK_PALETTE.len() {
                    Some(MARK_PALETTE[i + 1])
                } else {
                    None
                }
            }
        };
        self.cells[idx].highlight = next;

        Ok(CycleOutcome {
            highlight: next,
            celebration: self.is_single_color(),
        })
    }

    /// Whether every cell holds a number highlighted in one same color
    pub fn is_single_color(&self) -> bool {
        let Some(first) = self.cells[0].highlight else {
            return false;
        };
        self.cells
            .iter()
            .all(|c| c.number.is_some() && c.highlight == Some(first))
    }

    /// Remove all highlighted cells at once and apply gravity.
    ///
    /// Each column compacts independently: surviving numbers fall to the
    /// bottom preserving top-to-bottom order, vacated top cells end up
    /// with no number and no highlight. Returns how many cells were
    /// removed (possibly zero).
    pub fn complete(&mut self) -> usize {
        let mut removed = 0;
        for cell in self.cells.iter_mut() {
            if cell.highlight.is_some() {
                cell.number = None;
                cell.highlight = None;
                removed += 1;
            }
        }
        if removed > 0 {
            self.compact_columns();
        }
        removed
    }

    /// Per-column gravity pass: write survivors bottom-up, clear the rest
    fn compact_columns(&mut self) {
        for col in 0..GRID_COLUMNS {
            let mut write_row = GRID_ROWS;
            for read_row in (0..GRID_ROWS).rev() {
                let idx = read_row * GRID_COLUMNS + col;
                if self.cells[idx].number.is_some() {
                    write_row -= 1;
                    let dst = write_row * GRID_COLUMNS + col;
                    if dst != idx {
                        self.cells[dst] = self.cells[idx];
                    }
                }
            }
            for row in 0..write_row {
                self.cells[row * GRID_COLUMNS + col] = ColorCell::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_fills_all_cells() {
        let mut rng = SimpleRng::new(12345);
        let grid = ColorGrid::generate(&mut rng);
        assert_eq!(grid.remaining(), GRID_SIZE);
        assert!(grid
            .cells
            .iter()
            .all(|c| matches!(c.number, Some(n) if (GRID_NUMBER_MIN..=GRID_NUMBER_MAX).contains(&n))));
    }

    #[test]
    fn test_cycle_wraps_through_palette() {
        let mut rng = SimpleRng::new(1);
        let mut grid = ColorGrid::generate(&mut rng);

        for &color in MARK_PALETTE.iter() {
            let outcome = grid.cycle(0).unwrap();
            assert_eq!(outcome.highlight, Some(color));
        }
        let outcome = grid.cycle(0).unwrap();
        assert_eq!(outcome.highlight, None);
    }

    #[test]
    fn test_cycle_empty_cell_rejected() {
        let mut numbers = [Some(5); GRID_SIZE];
        numbers[3] = None;
        let mut grid = ColorGrid::from_numbers(numbers);
        assert_eq!(grid.cycle(3), Err(Rejection::EmptyCell));
        assert_eq!(grid.cycle(GRID_SIZE), Err(Rejection::OutOfBounds));
    }

    #[test]
    fn test_complete_removes_highlighted_and_compacts() {
        // Column 0 holds 1,2,3,4 top to bottom; highlight rows 0 and 1.
        let mut numbers = [Some(9); GRID_SIZE];
        for row in 0..GRID_ROWS {
            numbers[row * GRID_COLUMNS] = Some(row as u8 + 1);
        }
        let mut grid = ColorGrid::from_numbers(numbers);
        grid.cycle(0).unwrap();
        grid.cycle(GRID_COLUMNS).unwrap();

        let removed = grid.complete();
        assert_eq!(removed, 2);

        // Survivors fall to rows 2-3 preserving order; rows 0-1 empty.
        assert_eq!(grid.cell_at(0, 0).unwrap().number, None);
        assert_eq!(grid.cell_at(1, 0).unwrap().number, None);
        assert_eq!(grid.cell_at(2, 0).unwrap().number, Some(3));
        assert_eq!(grid.cell_at(3, 0).unwrap().number, Some(4));
        // Other columns untouched.
        assert_eq!(grid.cell_at(0, 1).unwrap().number, Some(9));
    }

    #[test]
    fn test_complete_with_no_highlight_is_noop() {
        let mut rng = SimpleRng::new(7);
        let mut grid = ColorGrid::generate(&mut rng);
        let before = grid.clone();
        assert_eq!(grid.complete(), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_celebration_on_full_single_color() {
        let mut grid = ColorGrid::from_numbers([Some(1); GRID_SIZE]);

        let mut last = None;
        for idx in 0..GRID_SIZE {
            let outcome = grid.cycle(idx).unwrap();
            last = Some(outcome);
            if idx < GRID_SIZE - 1 {
                assert!(!outcome.celebration);
            }
        }
        assert!(last.unwrap().celebration);
        assert!(grid.is_single_color());
    }

    #[test]
    fn test_mixed_colors_do_not_celebrate() {
        let mut grid = ColorGrid::from_numbers([Some(1); GRID_SIZE]);
        for idx in 0..GRID_SIZE {
            grid.cycle(idx).unwrap();
        }
        // Advance one cell to a different color.
        grid.cycle(0).unwrap();
        assert!(!grid.is_single_color());
    }
}
