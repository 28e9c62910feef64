//! Core module - pure game logic, no I/O.
//!
//! Everything here is deterministic under a seeded [`rng::SimpleRng`] and
//! unit-testable without a terminal:
//!
//! - [`board`]: the rotation game's column/reserve grid with two-phase
//!   rotation and move transforms
//! - [`figure`]: the goal tetromino pattern shown next to the board
//! - [`sum_grid`]: the sum-to-target marking game
//! - [`color_grid`]: the highlight-and-gravity game
//! - [`rng`]: LCG randomness with Fisher-Yates shuffling

pub mod board;
pub mod color_grid;
pub mod figure;
pub mod rng;
pub mod sum_grid;

pub use board::{Board, CellMove, MovePlan, RotationPlan};
pub use color_grid::ColorGrid;
pub use figure::GoalFigure;
pub use rng::SimpleRng;
pub use sum_grid::SumGrid;
