//! Input events delivered by the host to a [`Document`](crate::document::Document).

use embedded_graphics::prelude::Point;

/// A key press, reduced to what a display cares about.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    /// Decimal digit `'0'..='9'`.
    Digit(char),
    /// Escape key.
    Escape,
    /// Any other key.
    Other,
}

impl Key {
    /// Classify a typed character.
    #[inline]
    pub const fn from_char(c: char) -> Self {
        if c.is_ascii_digit() { Self::Digit(c) } else { Self::Other }
    }

    /// Classify an SDL key name (`"5"`, `"Keypad 5"`, `"Escape"`, ...).
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("escape") {
            return Self::Escape;
        }

        let name = name.strip_prefix("Keypad ").unwrap_or(name);
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => Self::Other,
        }
    }

    /// The digit character, if this is a digit key.
    #[inline]
    pub const fn digit(self) -> Option<char> {
        match self {
            Self::Digit(c) if c.is_ascii_digit() => Some(c),
            _ => None,
        }
    }
}

/// Document-wide event, as seen by every registered listener.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DocumentEvent {
    /// Primary button click at a point in display coordinates.
    Click(Point),
    /// Key pressed.
    KeyDown(Key),
}

/// How a display responded to a key press.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyOutcome {
    /// The key had no effect.
    Ignored,
    /// The key was used, the host may still run its default action.
    Handled,
    /// The key was used and the host must skip its default action.
    DefaultPrevented,
}

/// Summary of delivering one event to a document.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DispatchOutcome {
    /// Number of listeners the event was delivered to.
    pub delivered: usize,
    /// Whether any listener suppressed the host's default action.
    pub default_prevented: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_char() {
        assert_eq!(Key::from_char('0'), Key::Digit('0'));
        assert_eq!(Key::from_char('9'), Key::Digit('9'));
        assert_eq!(Key::from_char('a'), Key::Other);
        assert_eq!(Key::from_char('٣'), Key::Other, "only ASCII digits are digit keys");
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("5"), Key::Digit('5'));
        assert_eq!(Key::from_name("Keypad 7"), Key::Digit('7'));
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Q"), Key::Other);
        assert_eq!(Key::from_name("Keypad Enter"), Key::Other);
        assert_eq!(Key::from_name(""), Key::Other);
    }

    #[test]
    fn test_key_digit() {
        assert_eq!(Key::Digit('4').digit(), Some('4'));
        assert_eq!(Key::Digit('x').digit(), None);
        assert_eq!(Key::Escape.digit(), None);
    }
}
