//! Shared types and constants for the puzzle games.
//!
//! All types here are pure data with no external dependencies, usable from
//! core logic, input mapping, and terminal rendering alike.
//!
//! # Board Dimensions (rotation board)
//!
//! - **Columns**: 4 (indexed 0-3, left to right)
//! - **Rows per column**: 5 (row 0 is the reserve, rows 1-4 are playable)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MOVE_ANIMATION_MS` | 800 | Transform animation duration before commit |
//!
//! # Examples
//!
//! ```
//! use tui_puzzles::types::{Token, BOARD_COLS, PLAYABLE_ROWS};
//!
//! let token = Token::Red;
//! assert!(!token.is_blocked());
//! assert!(Token::Black.is_blocked());
//!
//! let parsed = Token::from_str("red").unwrap();
//! assert_eq!(parsed, Token::Red);
//!
//! assert_eq!(BOARD_COLS, 4);
//! assert_eq!(PLAYABLE_ROWS, 4);
//! ```

/// Number of columns on the rotation board
pub const BOARD_COLS: usize = 4;

/// Playable rows per column (rows 1..=4; row 0 is the reserve)
pub const PLAYABLE_ROWS: usize = 4;

/// Total slots per column (1 reserve + 4 playable)
pub const COLUMN_HEIGHT: usize = PLAYABLE_ROWS + 1;

/// Index of the reserve slot within a column
pub const RESERVE_ROW: usize = 0;

/// Copies of each movable color placed at game start
pub const TOKENS_PER_COLOR: usize = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration a begun transform stays pending before it commits (0.8s,
/// matching the ease-in-out transition the board animates with)
pub const MOVE_ANIMATION_MS: u32 = 800;

/// Cells in the number grids (4x4)
pub const GRID_SIZE: usize = 16;

/// Columns in the number grids
pub const GRID_COLUMNS: usize = 4;

/// Number of targets (and size of the shared mark palette)
pub const TARGET_COUNT: usize = 4;

/// Smallest grid number
pub const GRID_NUMBER_MIN: u8 = 1;

/// Largest grid number
pub const GRID_NUMBER_MAX: u8 = 9;

/// Smallest target number
pub const TARGET_NUMBER_MIN: u8 = 13;

/// Largest target number
pub const TARGET_NUMBER_MAX: u8 = 19;

/// A token on the rotation board
///
/// Four movable colors plus `Black`, which is blocked: it can occupy
/// reserve and playable slots but is never selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Red,
    Green,
    Blue,
    Yellow,
    Black,
}

/// The four movable token colors, in placement order
pub const MOVABLE_COLORS: [Token; 4] = [Token::Red, Token::Green, Token::Blue, Token::Yellow];

impl Token {
    /// Whether this token can never be selected by the player
    pub fn is_blocked(&self) -> bool {
        matches!(self, Token::Black)
    }

    /// Parse a token from its color name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_puzzles::types::Token;
    ///
    /// assert_eq!(Token::from_str("red"), Some(Token::Red));
    /// assert_eq!(Token::from_str("BLACK"), Some(Token::Black));
    /// assert_eq!(Token::from_str("mauve"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Token::Red),
            "green" => Some(Token::Green),
            "blue" => Some(Token::Blue),
            "yellow" => Some(Token::Yellow),
            "black" => Some(Token::Black),
            _ => None,
        }
    }

    /// Color name as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Token::Red => "red",
            Token::Green => "green",
            Token::Blue => "blue",
            Token::Yellow => "yellow",
            Token::Black => "black",
        }
    }
}

/// A color from the shared mark palette of the number grids
///
/// The palette has exactly [`TARGET_COUNT`] colors; each completed objective
/// owns one until it is reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkColor {
    Orange,
    Purple,
    Teal,
    Pink,
}

/// All palette colors in pool order (lowest free is borrowed first)
pub const MARK_PALETTE: [MarkColor; TARGET_COUNT] = [
    MarkColor::Orange,
    MarkColor::Purple,
    MarkColor::Teal,
    MarkColor::Pink,
];

impl MarkColor {
    /// Palette index of this color
    pub fn index(&self) -> usize {
        match self {
            MarkColor::Orange => 0,
            MarkColor::Purple => 1,
            MarkColor::Teal => 2,
            MarkColor::Pink => 3,
        }
    }

    /// Color name as a lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkColor::Orange => "orange",
            MarkColor::Purple => "purple",
            MarkColor::Teal => "teal",
            MarkColor::Pink => "pink",
        }
    }
}

/// Actions on the rotation board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Move the selection cursor one cell left
    CursorLeft,
    /// Move the selection cursor one cell right
    CursorRight,
    /// Move the selection cursor one cell up
    CursorUp,
    /// Move the selection cursor one cell down
    CursorDown,
    /// Promote the token under the cursor to a reserve
    Select,
    /// Rotate the playable 4x4 grid by 90°
    Rotate,
    /// Regenerate the board and goal figure
    NewGame,
}

/// Actions on the sum grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SumGridAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Toggle the marked state of the cell under the cursor
    ToggleCell,
    /// Complete (or reverse) target `0..TARGET_COUNT`
    CompleteTarget(usize),
    NewGame,
}

/// Actions on the color grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorGridAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Cycle the highlight of the cell under the cursor
    CycleCell,
    /// Remove all highlighted cells and compact columns
    Complete,
    NewGame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_dimensions() {
        assert_eq!(BOARD_COLS, 4);
        assert_eq!(PLAYABLE_ROWS, 4);
        assert_eq!(COLUMN_HEIGHT, 5);
        assert_eq!(
            BOARD_COLS * PLAYABLE_ROWS,
            MOVABLE_COLORS.len() * TOKENS_PER_COLOR
        );
    }

    #[test]
    fn number_grid_ranges() {
        assert_eq!(GRID_SIZE, 16);
        assert_eq!(TARGET_COUNT, 4);
        assert!(GRID_NUMBER_MIN <= GRID_NUMBER_MAX);
        assert!(TARGET_NUMBER_MIN <= TARGET_NUMBER_MAX);
    }

    #[test]
    fn token_string_roundtrip() {
        for token in [
            Token::Red,
            Token::Green,
            Token::Blue,
            Token::Yellow,
            Token::Black,
        ] {
            assert_eq!(Token::from_str(token.as_str()), Some(token));
        }
    }

    #[test]
    fn movable_palette_has_no_blocked_colors() {
        assert!(MOVABLE_COLORS.iter().all(|t| !t.is_blocked()));
    }
}
