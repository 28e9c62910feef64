//! Key mapping from terminal events to game actions.
//!
//! One mapping function per game. All three share the cursor movement
//! bindings; selection and per-game verbs differ.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{BoardAction, ColorGridAction, SumGridAction};

/// Map keyboard input to rotation-board actions.
pub fn board_action(key: KeyEvent) -> Option<BoardAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(BoardAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(BoardAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(BoardAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(BoardAction::CursorDown),

        KeyCode::Char(' ') | KeyCode::Enter => Some(BoardAction::Select),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(BoardAction::Rotate),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(BoardAction::NewGame),

        _ => None,
    }
}

/// Map keyboard input to sum-grid actions.
///
/// Digits 1-4 click the corresponding target.
pub fn sum_grid_action(key: KeyEvent) -> Option<SumGridAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(SumGridAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(SumGridAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(SumGridAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(SumGridAction::CursorDown),

        KeyCode::Char(' ') | KeyCode::Enter => Some(SumGridAction::ToggleCell),
        KeyCode::Char(c @ '1'..='4') => {
            Some(SumGridAction::CompleteTarget(c as usize - '1' as usize))
        }
        KeyCode::Char('n') | KeyCode::Char('N') => Some(SumGridAction::NewGame),

        _ => None,
    }
}

/// Map keyboard input to color-grid actions.
pub fn color_grid_action(key: KeyEvent) -> Option<ColorGridAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(ColorGridAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(ColorGridAction::CursorRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(ColorGridAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(ColorGridAction::CursorDown)
        }

        KeyCode::Char(' ') | KeyCode::Enter => Some(ColorGridAction::CycleCell),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(ColorGridAction::Complete),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(ColorGridAction::NewGame),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            board_action(KeyEvent::from(KeyCode::Left)),
            Some(BoardAction::CursorLeft)
        );
        assert_eq!(
            board_action(KeyEvent::from(KeyCode::Char('k'))),
            Some(BoardAction::CursorUp)
        );
        assert_eq!(
            sum_grid_action(KeyEvent::from(KeyCode::Char('L'))),
            Some(SumGridAction::CursorRight)
        );
        assert_eq!(
            color_grid_action(KeyEvent::from(KeyCode::Down)),
            Some(ColorGridAction::CursorDown)
        );
    }

    #[test]
    fn test_board_verbs() {
        assert_eq!(
            board_action(KeyEvent::from(KeyCode::Char(' '))),
            Some(BoardAction::Select)
        );
        assert_eq!(
            board_action(KeyEvent::from(KeyCode::Char('r'))),
            Some(BoardAction::Rotate)
        );
        assert_eq!(board_action(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_target_digits() {
        assert_eq!(
            sum_grid_action(KeyEvent::from(KeyCode::Char('1'))),
            Some(SumGridAction::CompleteTarget(0))
        );
        assert_eq!(
            sum_grid_action(KeyEvent::from(KeyCode::Char('4'))),
            Some(SumGridAction::CompleteTarget(3))
        );
        assert_eq!(sum_grid_action(KeyEvent::from(KeyCode::Char('5'))), None);
    }

    #[test]
    fn test_color_grid_verbs() {
        assert_eq!(
            color_grid_action(KeyEvent::from(KeyCode::Enter)),
            Some(ColorGridAction::CycleCell)
        );
        assert_eq!(
            color_grid_action(KeyEvent::from(KeyCode::Char('c'))),
            Some(ColorGridAction::Complete)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
