//! Terminal input module.
//!
//! Maps `crossterm` key events into per-game action enums. Independent of
//! any UI framework; pure functions, unit-tested without a terminal.

pub mod map;

pub use map::{board_action, color_grid_action, should_quit, sum_grid_action};
