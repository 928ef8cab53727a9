//! Abstract input key event, independent of terminal library.
//!
//! `storefront-app` never sees crossterm types. The TUI converts terminal
//! events into [`InputKey`] at its boundary, so the update logic can be
//! driven directly from tests.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_eq!(InputKey::CharCtrl('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_input_key_debug() {
        let key = InputKey::CharCtrl('c');
        let debug_str = format!("{:?}", key);
        assert!(debug_str.contains("CharCtrl"));
    }
}
