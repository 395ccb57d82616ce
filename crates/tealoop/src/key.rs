//! Keyboard input handling.
//!
//! This module provides types for representing keyboard events. The
//! [`Display`](fmt::Display) names (`"enter"`, `"shift+tab"`, ...) are the
//! vocabulary keymaps match against.

use std::fmt;

/// Keyboard key event message.
///
/// KeyMsg is sent to the program's update function when a key is pressed.
///
/// # Example
///
/// ```rust
/// use tealoop::{KeyMsg, KeyType};
///
/// fn handle_key(key: &KeyMsg) {
///     match key.key_type {
///         KeyType::Enter => println!("Enter pressed"),
///         KeyType::Runes => println!("Typed: {:?}", key.runes),
///         _ => {}
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For KeyType::Runes, the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Create a new key message from a character.
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }

    /// Set the alt modifier.
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            for c in &self.runes {
                write!(f, "{c}")?;
            }
        } else {
            write!(f, "{}", self.key_type)?;
        }
        Ok(())
    }
}

/// Key type enumeration.
///
/// The set is deliberately small: character input, the navigation and
/// activation keys, and the control chords the runtime itself reacts to.
/// Anything else arrives as [`KeyType::Runes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character(s) input.
    Runes,
    /// Enter (carriage return).
    Enter,
    /// Space key.
    Space,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Delete key.
    Delete,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PgUp,
    /// Page Down.
    PgDown,
    /// Break/Interrupt (Ctrl+C).
    CtrlC,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyType::Runes => "runes",
            KeyType::Enter => "enter",
            KeyType::Space => " ",
            KeyType::Tab => "tab",
            KeyType::ShiftTab => "shift+tab",
            KeyType::Esc => "esc",
            KeyType::Backspace => "backspace",
            KeyType::Delete => "delete",
            KeyType::Up => "up",
            KeyType::Down => "down",
            KeyType::Left => "left",
            KeyType::Right => "right",
            KeyType::Home => "home",
            KeyType::End => "end",
            KeyType::PgUp => "pgup",
            KeyType::PgDown => "pgdown",
            KeyType::CtrlC => "ctrl+c",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm key event to a KeyMsg.
pub fn from_crossterm_key(
    code: crossterm::event::KeyCode,
    modifiers: crossterm::event::KeyModifiers,
) -> KeyMsg {
    use crossterm::event::{KeyCode, KeyModifiers};

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let (key_type, runes) = match code {
        KeyCode::Char('c' | 'C') if ctrl => (KeyType::CtrlC, Vec::new()),
        KeyCode::Char(' ') => (KeyType::Space, Vec::new()),
        KeyCode::Char(c) => (KeyType::Runes, vec![c]),
        KeyCode::Enter => (KeyType::Enter, Vec::new()),
        KeyCode::Backspace => (KeyType::Backspace, Vec::new()),
        KeyCode::Tab if shift => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Tab => (KeyType::Tab, Vec::new()),
        KeyCode::BackTab => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Esc => (KeyType::Esc, Vec::new()),
        KeyCode::Delete => (KeyType::Delete, Vec::new()),
        KeyCode::Up => (KeyType::Up, Vec::new()),
        KeyCode::Down => (KeyType::Down, Vec::new()),
        KeyCode::Left => (KeyType::Left, Vec::new()),
        KeyCode::Right => (KeyType::Right, Vec::new()),
        KeyCode::Home => (KeyType::Home, Vec::new()),
        KeyCode::End => (KeyType::End, Vec::new()),
        KeyCode::PageUp => (KeyType::PgUp, Vec::new()),
        KeyCode::PageDown => (KeyType::PgDown, Vec::new()),
        _ => (KeyType::Runes, Vec::new()),
    };

    KeyMsg {
        key_type,
        runes,
        alt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_key_msg_display() {
        let key = KeyMsg::from_type(KeyType::Enter);
        assert_eq!(key.to_string(), "enter");

        let key = KeyMsg::from_char('a');
        assert_eq!(key.to_string(), "a");

        let key = KeyMsg::from_char('a').with_alt();
        assert_eq!(key.to_string(), "alt+a");
    }

    #[test]
    fn test_key_type_display() {
        assert_eq!(KeyType::Enter.to_string(), "enter");
        assert_eq!(KeyType::ShiftTab.to_string(), "shift+tab");
        assert_eq!(KeyType::Space.to_string(), " ");
        assert_eq!(KeyType::CtrlC.to_string(), "ctrl+c");
    }

    #[test]
    fn test_from_crossterm_char() {
        let key = from_crossterm_key(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(key.key_type, KeyType::Runes);
        assert_eq!(key.runes, vec!['x']);
    }

    #[test]
    fn test_from_crossterm_ctrl_c() {
        let key = from_crossterm_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key.key_type, KeyType::CtrlC);
    }

    #[test]
    fn test_from_crossterm_shift_tab() {
        let key = from_crossterm_key(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key.key_type, KeyType::ShiftTab);
        let key = from_crossterm_key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(key.key_type, KeyType::ShiftTab);
    }

    #[test]
    fn test_from_crossterm_space() {
        let key = from_crossterm_key(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key.key_type, KeyType::Space);
        assert_eq!(key.to_string(), " ");
    }
}
