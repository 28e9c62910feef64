//! Shared view types: viewport and the color palette mapping.

use crate::term::fb::{CellStyle, Rgb};
use crate::types::{MarkColor, Token};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// RGB used to draw a board token.
pub fn token_rgb(token: Token) -> Rgb {
    match token {
        Token::Red => Rgb::new(225, 70, 70),
        Token::Green => Rgb::new(70, 185, 90),
        Token::Blue => Rgb::new(80, 120, 230),
        Token::Yellow => Rgb::new(230, 200, 70),
        Token::Black => Rgb::new(110, 110, 110),
    }
}

/// RGB used to draw a mark-palette color.
pub fn mark_rgb(color: MarkColor) -> Rgb {
    match color {
        MarkColor::Orange => Rgb::new(240, 150, 50),
        MarkColor::Purple => Rgb::new(170, 95, 220),
        MarkColor::Teal => Rgb::new(60, 190, 180),
        MarkColor::Pink => Rgb::new(235, 110, 170),
    }
}

/// Default style with the given foreground.
pub fn fg_style(fg: Rgb) -> CellStyle {
    CellStyle {
        fg,
        ..CellStyle::default()
    }
}

/// Dim gray style for hints and empty slots.
pub fn hint_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(130, 130, 140),
        dim: true,
        ..CellStyle::default()
    }
}

/// Bold white style for cursors and headings.
pub fn accent_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(245, 245, 245),
        bold: true,
        ..CellStyle::default()
    }
}
