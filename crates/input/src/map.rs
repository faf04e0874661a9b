//! Key mapping from terminal events to text editing actions.

use crate::types::EditAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to editing actions.
pub fn map_key(key: KeyEvent) -> Option<EditAction> {
    if should_quit(key) {
        return Some(EditAction::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(EditAction::Submit),
        KeyCode::Backspace => Some(EditAction::Backspace),
        KeyCode::Esc => Some(EditAction::Clear),
        KeyCode::F(2) => Some(EditAction::Reset),

        KeyCode::Char(c)
            if !c.is_control()
                && !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(EditAction::Insert(c))
        }

        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Letters are typed into the input box, so only Ctrl-C quits.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_letter_keys_insert() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(EditAction::Insert('a'))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(EditAction::Insert('Q'))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(EditAction::Insert(' '))
        );
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Enter)),
            Some(EditAction::Submit)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Backspace)),
            Some(EditAction::Backspace)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(EditAction::Clear));
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(2))), Some(EditAction::Reset));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_modified_letters_are_not_typed() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(EditAction::Quit)
        );
    }
}
