//! On-screen keypad keys and the physical keystrokes that map onto them.

use crate::DecimalSeparator;

/// A single keypad key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(char),
    Separator,
    Backspace,
    Clear,
}

/// Keypad grid, top row first.
pub const KEYPAD_ROWS: [[Key; 3]; 4] = [
    [Key::Digit('1'), Key::Digit('2'), Key::Digit('3')],
    [Key::Digit('4'), Key::Digit('5'), Key::Digit('6')],
    [Key::Digit('7'), Key::Digit('8'), Key::Digit('9')],
    [Key::Separator, Key::Digit('0'), Key::Backspace],
];

impl Key {
    /// Maps a keystroke name, as reported by the windowing layer, to a key.
    ///
    /// Both `,` and `.` map to [`Key::Separator`] so either works regardless
    /// of the configured display separator.
    pub fn from_keystroke(keystroke: &str) -> Option<Self> {
        let mut chars = keystroke.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match c {
                '0'..='9' => Some(Self::Digit(c)),
                ',' | '.' => Some(Self::Separator),
                _ => None,
            };
        }

        match keystroke {
            "backspace" => Some(Self::Backspace),
            "escape" | "delete" => Some(Self::Clear),
            _ => None,
        }
    }

    /// Caption shown on the key.
    pub fn label(
        &self,
        separator: DecimalSeparator,
    ) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Separator => separator.as_char().to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Clear => "C".to_string(),
        }
    }

    /// Stable element id for the key's button.
    pub fn id(&self) -> String {
        match self {
            Self::Digit(d) => format!("key-{d}"),
            Self::Separator => "key-separator".to_string(),
            Self::Backspace => "key-backspace".to_string(),
            Self::Clear => "key-clear".to_string(),
        }
    }
}
