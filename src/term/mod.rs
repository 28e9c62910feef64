//! Terminal rendering module.
//!
//! A small game-oriented rendering layer: views map game state into a
//! framebuffer of styled cells (pure, testable), and [`TerminalRenderer`]
//! flushes a framebuffer to the terminal with crossterm.

pub mod board_view;
pub mod color_view;
pub mod fb;
pub mod renderer;
pub mod sum_view;
pub mod view;

pub use board_view::BoardView;
pub use color_view::ColorGridView;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use sum_view::SumGridView;
pub use view::Viewport;
