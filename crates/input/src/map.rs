//! Key mapping from terminal events to movement keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key code to a movement key.
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::TurnRight),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Backward),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_wasd_keys() {
        assert_eq!(map_key(KeyCode::Char('a')), Some(Key::TurnLeft));
        assert_eq!(map_key(KeyCode::Char('d')), Some(Key::TurnRight));
        assert_eq!(map_key(KeyCode::Char('w')), Some(Key::Forward));
        assert_eq!(map_key(KeyCode::Char('s')), Some(Key::Backward));

        assert_eq!(map_key(KeyCode::Char('A')), Some(Key::TurnLeft));
        assert_eq!(map_key(KeyCode::Char('W')), Some(Key::Forward));
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(KeyCode::Left), Some(Key::TurnLeft));
        assert_eq!(map_key(KeyCode::Right), Some(Key::TurnRight));
        assert_eq!(map_key(KeyCode::Up), Some(Key::Forward));
        assert_eq!(map_key(KeyCode::Down), Some(Key::Backward));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(map_key(KeyCode::Char('x')), None);
        assert_eq!(map_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
