//! Board module - the rotation game's column/reserve grid.
//!
//! The board is 4 columns of 5 slots each, addressed `[column][row]`.
//! Row 0 is the column's reserve; rows 1..=4 are the playable 4x4 grid.
//! Storage is a fixed array, built once per game and mutated in place.
//!
//! Both transforms are two-phase: `begin_*` validates the request, flips
//! the busy flags and returns a plan (the renderer animates from it);
//! `commit_*` applies the state change atomically and clears the flags.
//! A `begin_*` call while a prior plan is uncommitted returns `None`.

use arrayvec::ArrayVec;

use crate::core::rng::SimpleRng;
use crate::types::{
    Token, BOARD_COLS, COLUMN_HEIGHT, MOVABLE_COLORS, PLAYABLE_ROWS, RESERVE_ROW, TOKENS_PER_COLOR,
};

/// Number of playable cells on the board
pub const PLAYABLE_CELLS: usize = BOARD_COLS * PLAYABLE_ROWS;

/// A slot on the board: empty or holding a token
pub type Slot = Option<Token>;

/// One cell content relocation, in `(column, row)` board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMove {
    pub from: (usize, usize),
    pub to: (usize, usize),
    pub token: Token,
}

/// Pending 90° rotation of the playable grid.
///
/// Holds the post-rotation snapshot so the commit is a single atomic
/// permutation with no read/write aliasing against the live grid.
#[derive(Debug, Clone)]
pub struct RotationPlan {
    new_playable: [[Slot; PLAYABLE_ROWS]; BOARD_COLS],
    moves: ArrayVec<CellMove, PLAYABLE_CELLS>,
}

impl RotationPlan {
    /// Cell relocations described by this rotation (tokens only)
    pub fn moves(&self) -> &[CellMove] {
        &self.moves
    }
}

/// Pending promotion of a playable token to the empty reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub source: (usize, usize),
    pub dest_col: usize,
    pub token: Token,
}

/// The rotation game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// `cells[col][row]`; row 0 is the reserve slot
    cells: [[Slot; COLUMN_HEIGHT]; BOARD_COLS],
    /// A rotation plan is in flight
    rotating: bool,
    /// A move plan is in flight touching this column
    animating: [bool; BOARD_COLS],
}

impl Board {
    /// Generate a fresh board: 4 tokens of each movable color shuffled over
    /// the 16 playable cells, and 3 black tokens plus 1 empty slot shuffled
    /// over the 4 reserves.
    pub fn generate(rng: &mut SimpleRng) -> Self {
        let mut tokens = [Token::Red; PLAYABLE_CELLS];
        for (i, &color) in MOVABLE_COLORS.iter().enumerate() {
            for j in 0..TOKENS_PER_COLOR {
                tokens[i * TOKENS_PER_COLOR + j] = color;
            }
        }
        rng.shuffle(&mut tokens);

        let mut reserves: [Slot; BOARD_COLS] =
            [Some(Token::Black), Some(Token::Black), Some(Token::Black), None];
        rng.shuffle(&mut reserves);

        let mut cells = [[None; COLUMN_HEIGHT]; BOARD_COLS];
        for col in 0..BOARD_COLS {
            cells[col][RESERVE_ROW] = reserves[col];
            for row in 0..PLAYABLE_ROWS {
                cells[col][row + 1] = Some(tokens[col * PLAYABLE_ROWS + row]);
            }
        }

        Self {
            cells,
            rotating: false,
            animating: [false; BOARD_COLS],
        }
    }

    /// Build a board from explicit slots (testing/debugging helper)
    pub fn from_cells(cells: [[Slot; COLUMN_HEIGHT]; BOARD_COLS]) -> Self {
        Self {
            cells,
            rotating: false,
            animating: [false; BOARD_COLS],
        }
    }

    /// Slot at `(col, row)`; `None` if out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<Slot> {
        if col >= BOARD_COLS || row >= COLUMN_HEIGHT {
            return None;
        }
        Some(self.cells[col][row])
    }

    /// The reserve slot of a column
    pub fn reserve(&self, col: usize) -> Slot {
        self.cells[col][RESERVE_ROW]
    }

    /// Raw slots, for rendering
    pub fn cells(&self) -> &[[Slot; COLUMN_HEIGHT]; BOARD_COLS] {
        &self.cells
    }

    /// First column (scan order) whose reserve slot is empty
    pub fn first_empty_reserve(&self) -> Option<usize> {
        (0..BOARD_COLS).find(|&col| self.cells[col][RESERVE_ROW].is_none())
    }

    /// Whether any transform is currently in flight
    pub fn is_busy(&self) -> bool {
        self.rotating || self.animating.iter().any(|&a| a)
    }

    /// Whether a rotation is in flight
    pub fn is_rotating(&self) -> bool {
        self.rotating
    }

    /// Whether a move touching this column is in flight
    pub fn is_column_animating(&self, col: usize) -> bool {
        col < BOARD_COLS && self.animating[col]
    }

    /// Click eligibility for the token at `(col, row)`.
    ///
    /// A token is selectable iff it exists, is not blocked, sits in a
    /// playable row, its own column's reserve is occupied, and no transform
    /// involving it is in flight. Derived from current state, so it is
    /// always up to date after a commit.
    pub fn is_selectable(&self, col: usize, row: usize) -> bool {
        if col >= BOARD_COLS || row == RESERVE_ROW || row >= COLUMN_HEIGHT {
            return false;
        }
        if self.rotating || self.animating[col] {
            return false;
        }
        let Some(token) = self.cells[col][row] else {
            return false;
        };
        !token.is_blocked() && self.cells[col][RESERVE_ROW].is_some()
    }

    /// Start a 90° rotation of the playable grid.
    ///
    /// Computes the counter-clockwise-by-index mapping
    /// `new[n-1-j][i] = old[i][j]` over the playable 4x4 sub-grid as one
    /// snapshot; reserves are untouched. Returns `None` while another
    /// transform is in flight.
    pub fn begin_rotation(&mut self) -> Option<RotationPlan> {
        if self.is_busy() {
            return None;
        }

        let n = PLAYABLE_ROWS;
        let mut new_playable = [[None; PLAYABLE_ROWS]; BOARD_COLS];
        let mut moves = ArrayVec::new();

        for i in 0..BOARD_COLS {
            for j in 0..n {
                let slot = self.cells[i][j + 1];
                new_playable[n - 1 - j][i] = slot;
                if let Some(token) = slot {
                    moves.push(CellMove {
                        from: (i, j + 1),
                        to: (n - 1 - j, i + 1),
                        token,
                    });
                }
            }
        }

        self.rotating = true;
        Some(RotationPlan {
            new_playable,
            moves,
        })
    }

    /// Apply a pending rotation and clear the busy flag
    pub fn commit_rotation(&mut self, plan: RotationPlan) {
        for col in 0..BOARD_COLS {
            for row in 0..PLAYABLE_ROWS {
                self.cells[col][row + 1] = plan.new_playable[col][row];
            }
        }
        self.rotating = false;
    }

    /// Start promoting the token at `(col, row)` to the empty reserve.
    ///
    /// Rejects (returns `None`) if the token is not selectable, if any
    /// rotation is in flight, or if a prior move still holds the source or
    /// destination column. On success both columns are flagged busy until
    /// [`Board::commit_move`] runs.
    pub fn begin_move(&mut self, col: usize, row: usize) -> Option<MovePlan> {
        if !self.is_selectable(col, row) {
            return None;
        }
        let dest_col = self.first_empty_reserve()?;
        if self.animating[dest_col] {
            return None;
        }
        let token = self.cells[col][row]?;

        self.animating[col] = true;
        self.animating[dest_col] = true;
        Some(MovePlan {
            source: (col, row),
            dest_col,
            token,
        })
    }

    /// Apply a pending move and clear the busy flags.
    ///
    /// The clicked token lands in the destination reserve; in the source
    /// column every slot above the vacated cell (the old reserve included)
    /// shifts down one row, and the vacated cell becomes the column's new
    /// empty reserve.
    pub fn commit_move(&mut self, plan: MovePlan) {
        let (src_col, src_row) = plan.source;

        let token = self.cells[src_col][src_row].take();
        self.cells[plan.dest_col][RESERVE_ROW] = token;

        for row in (1..=src_row).rev() {
            self.cells[src_col][row] = self.cells[src_col][row - 1];
        }
        self.cells[src_col][RESERVE_ROW] = None;

        self.animating[src_col] = false;
        self.animating[plan.dest_col] = false;
    }
}
