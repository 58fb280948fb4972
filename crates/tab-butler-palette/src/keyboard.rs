//! Keyboard interpretation for the palette
//!
//! Only ArrowUp, ArrowDown and Enter belong to the palette's navigation
//! surface. Everything else passes through to the query text input.

use crate::actions::PaletteAction;

/// Toolkit-independent key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Tab,
    Backspace,
    Char(char),
    Other,
}

/// Navigation action for `key`, or `None` when the key is not ours
///
/// A `Some` result means the key's default behavior must be suppressed.
pub fn interpret_key(key: &Key) -> Option<PaletteAction> {
    match key {
        Key::ArrowUp => Some(PaletteAction::ArrowUp),
        Key::ArrowDown => Some(PaletteAction::ArrowDown),
        Key::Enter => Some(PaletteAction::Commit),
        _ => None,
    }
}

/// Edit the query text input performs for `key`
pub fn text_input(key: &Key) -> Option<PaletteAction> {
    match key {
        Key::Char(c) if !c.is_control() => Some(PaletteAction::Input(*c)),
        Key::Backspace => Some(PaletteAction::Backspace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys_are_consumed() {
        assert!(matches!(interpret_key(&Key::ArrowUp), Some(PaletteAction::ArrowUp)));
        assert!(matches!(interpret_key(&Key::ArrowDown), Some(PaletteAction::ArrowDown)));
        assert!(matches!(interpret_key(&Key::Enter), Some(PaletteAction::Commit)));
    }

    #[test]
    fn test_other_keys_pass_through() {
        for key in [Key::Char('j'), Key::Escape, Key::Tab, Key::Backspace, Key::Other] {
            assert!(interpret_key(&key).is_none(), "{:?} should pass through", key);
        }
    }

    #[test]
    fn test_text_input_edits() {
        assert!(matches!(text_input(&Key::Char('k')), Some(PaletteAction::Input('k'))));
        assert!(matches!(text_input(&Key::Backspace), Some(PaletteAction::Backspace)));
        assert!(text_input(&Key::Char('\u{7}')).is_none());
        assert!(text_input(&Key::ArrowUp).is_none());
    }
}
