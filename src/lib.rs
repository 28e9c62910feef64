//! Terminal grid-puzzle suite.
//!
//! Three small games behind one crate: a token board with a 90° rotation
//! mechanic and reserve promotion, a sum-to-target number grid, and a
//! color-matching grid with gravity. Game logic lives in [`core`] (pure,
//! deterministic, testable); [`term`] renders to a crossterm framebuffer
//! and [`input`] maps key events to game actions.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
