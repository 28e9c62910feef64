//! Goal figure - the random tetromino pattern shown next to the board.
//!
//! One of the seven tetromino shapes is drawn in a 4x4 mask with a random
//! quarter-turn rotation, a random in-bounds offset, and a random movable
//! color. Pure data; the game regenerates it per board.

use crate::core::rng::SimpleRng;
use crate::types::{Token, MOVABLE_COLORS, PLAYABLE_ROWS};

/// Mask side length (same 4x4 footprint as the playable grid)
pub const FIGURE_SIZE: usize = PLAYABLE_ROWS;

/// The seven tetromino shapes as 4x4 occupancy masks
const SHAPES: [[[bool; FIGURE_SIZE]; FIGURE_SIZE]; 7] = {
    const O: bool = false;
    const X: bool = true;
    [
        // I
        [[O, O, O, O], [X, X, X, X], [O, O, O, O], [O, O, O, O]],
        // O
        [[O, O, O, O], [O, X, X, O], [O, X, X, O], [O, O, O, O]],
        // T
        [[O, O, O, O], [O, X, O, O], [X, X, X, O], [O, O, O, O]],
        // S
        [[O, O, O, O], [O, X, X, O], [X, X, O, O], [O, O, O, O]],
        // Z
        [[O, O, O, O], [X, X, O, O], [O, X, X, O], [O, O, O, O]],
        // J
        [[O, O, O, O], [X, O, O, O], [X, X, X, O], [O, O, O, O]],
        // L
        [[O, O, O, O], [O, O, X, O], [X, X, X, O], [O, O, O, O]],
    ]
};

/// A goal figure: colored occupancy mask over a 4x4 grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalFigure {
    mask: [[bool; FIGURE_SIZE]; FIGURE_SIZE],
    color: Token,
}

impl GoalFigure {
    /// Generate a random figure: random shape, 0-3 quarter turns, random
    /// in-bounds offset, random movable color.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut mask = *rng.pick(&SHAPES);

        let turns = rng.next_range(4);
        for _ in 0..turns {
            mask = rotate_cw(&mask);
        }

        let (min_row, max_row, min_col, max_col) = bounding_box(&mask);
        let height = max_row - min_row + 1;
        let width = max_col - min_col + 1;
        let off_row = rng.next_range((FIGURE_SIZE - height + 1) as u32) as usize;
        let off_col = rng.next_range((FIGURE_SIZE - width + 1) as u32) as usize;

        let mut placed = [[false; FIGURE_SIZE]; FIGURE_SIZE];
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                if mask[row][col] {
                    placed[row - min_row + off_row][col - min_col + off_col] = true;
                }
            }
        }

        Self {
            mask: placed,
            color: *rng.pick(&MOVABLE_COLORS),
        }
    }

    /// Whether the mask cell at `(row, col)` is part of the figure
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < FIGURE_SIZE && col < FIGURE_SIZE && self.mask[row][col]
    }

    /// The figure's color
    pub fn color(&self) -> Token {
        self.color
    }

    /// Number of occupied mask cells (always 4 for a tetromino)
    pub fn cell_count(&self) -> usize {
        self.mask.iter().flatten().filter(|&&b| b).count()
    }
}

/// Rotate a square mask 90° clockwise: `rotated[j][n-1-i] = mask[i][j]`
fn rotate_cw(mask: &[[bool; FIGURE_SIZE]; FIGURE_SIZE]) -> [[bool; FIGURE_SIZE]; FIGURE_SIZE] {
    let n = FIGURE_SIZE;
    let mut rotated = [[false; FIGURE_SIZE]; FIGURE_SIZE];
    for (i, row) in mask.iter().enumerate() {
        for (j, &set) in row.iter().enumerate() {
            rotated[j][n - 1 - i] = set;
        }
    }
    rotated
}

/// `(min_row, max_row, min_col, max_col)` of the occupied cells
fn bounding_box(mask: &[[bool; FIGURE_SIZE]; FIGURE_SIZE]) -> (usize, usize, usize, usize) {
    let mut min_row = FIGURE_SIZE;
    let mut max_row = 0;
    let mut min_col = FIGURE_SIZE;
    let mut max_col = 0;
    for (i, row) in mask.iter().enumerate() {
        for (j, &set) in row.iter().enumerate() {
            if set {
                min_row = min_row.min(i);
                max_row = max_row.max(i);
                min_col = min_col.min(j);
                max_col = max_col.max(j);
            }
        }
    }
    (min_row, max_row, min_col, max_col)
}
