//! Key mapping from terminal events to game intents.

use crate::cursor::Direction;
use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Move the card cursor.
    Cursor(Direction),
    /// Flip the card under the cursor.
    Select,
    /// A card-less game command.
    Action(GameAction),
}

/// Map keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyIntent> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(KeyIntent::Cursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(KeyIntent::Cursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(KeyIntent::Cursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(KeyIntent::Cursor(Direction::Down))
        }

        // Flip
        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyIntent::Select),

        // Round controls
        KeyCode::Char('s') | KeyCode::Char('S') => Some(KeyIntent::Action(GameAction::Start)),
        KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyIntent::Action(GameAction::CycleDifficulty))
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyIntent::Action(GameAction::Abandon)),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(KeyIntent::Action(GameAction::Reset)),
        KeyCode::Char('m') | KeyCode::Char('M') => {
            Some(KeyIntent::Action(GameAction::ToggleMute))
        }

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
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(KeyIntent::Cursor(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(KeyIntent::Cursor(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(KeyIntent::Cursor(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(KeyIntent::Cursor(Direction::Down))
        );
    }

    #[test]
    fn test_select_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(KeyIntent::Select)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(KeyIntent::Select)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(KeyIntent::Action(GameAction::Start))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(KeyIntent::Action(GameAction::CycleDifficulty))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(KeyIntent::Action(GameAction::Abandon))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            Some(KeyIntent::Action(GameAction::Reset))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('m'))),
            Some(KeyIntent::Action(GameAction::ToggleMute))
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
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
