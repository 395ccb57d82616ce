//! Keybinding definitions and matching.
//!
//! A [`Binding`] couples the key names that trigger an action with help
//! text and an enabled flag. Keys are matched by the display name of a
//! [`tealoop::KeyMsg`] (`"enter"`, `"shift+tab"`, `"+"`, ...).

use std::fmt;

/// Help information for a keybinding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key(s) to display in help text (e.g., "+/k").
    pub key: String,
    /// Description of what the binding does.
    pub desc: String,
}

/// A keybinding with associated help text.
///
/// Bindings can be enabled or disabled; a disabled binding never matches
/// and is skipped by the help line.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<String>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a new empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the keys for this binding.
    #[must_use]
    pub fn keys(mut self, keys: &[&str]) -> Self {
        self.keys = keys.iter().map(|&s| s.to_string()).collect();
        self
    }

    /// Sets the help text for this binding.
    #[must_use]
    pub fn help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help information for this binding.
    #[must_use]
    pub fn get_help(&self) -> &Help {
        &self.help
    }

    /// Returns whether this binding is enabled.
    ///
    /// A binding is enabled if it's not explicitly disabled and has at
    /// least one key.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn enable(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Checks if the given key matches the binding.
///
/// Only enabled bindings match.
///
/// # Example
///
/// ```rust
/// use tally::keymap::{Binding, matches};
///
/// let quit = Binding::new().keys(&["q", "esc"]);
/// assert!(matches("q", &quit));
/// assert!(!matches("x", &quit));
/// ```
pub fn matches<K: fmt::Display>(key: K, binding: &Binding) -> bool {
    if !binding.enabled() {
        return false;
    }
    let key_str = key.to_string();
    binding.keys.iter().any(|k| *k == key_str)
}

/// Key bindings for the counter.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Bump the counter up.
    pub increment: Binding,
    /// Bump the counter down; disabled while the counter sits at the floor.
    pub decrement: Binding,
    /// Move focus to the next control.
    pub focus_next: Binding,
    /// Move focus to the previous control.
    pub focus_prev: Binding,
    /// Activate the focused control.
    pub activate: Binding,
    /// Leave the program.
    pub quit: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            increment: Binding::new()
                .keys(&["+", "=", "k", "up"])
                .help("+/k", "increment"),
            decrement: Binding::new()
                .keys(&["-", "_", "j", "down"])
                .help("-/j", "decrement"),
            focus_next: Binding::new()
                .keys(&["tab", "right"])
                .help("tab", "focus"),
            focus_prev: Binding::new().keys(&["shift+tab", "left"]).help("", ""),
            activate: Binding::new()
                .keys(&["enter", " "])
                .help("enter/space", "press"),
            quit: Binding::new().keys(&["q", "esc"]).help("q", "quit"),
        }
    }
}

impl KeyMap {
    /// Render a one-line help string from the bindings that carry help
    /// text, skipping disabled ones.
    #[must_use]
    pub fn short_help(&self) -> String {
        [
            &self.increment,
            &self.decrement,
            &self.focus_next,
            &self.focus_prev,
            &self.activate,
            &self.quit,
        ]
        .into_iter()
        .filter(|b| b.enabled() && !b.get_help().key.is_empty())
        .map(|b| format!("{}: {}", b.get_help().key, b.get_help().desc))
        .collect::<Vec<_>>()
        .join(" · ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_new_is_disabled() {
        let binding = Binding::new();
        assert!(!binding.enabled());
    }

    #[test]
    fn test_binding_with_keys_enabled() {
        let binding = Binding::new().keys(&["k", "up"]);
        assert!(binding.enabled());
    }

    #[test]
    fn test_binding_enable_toggle() {
        let mut binding = Binding::new().keys(&["q"]);
        binding.enable(false);
        assert!(!binding.enabled());
        binding.enable(true);
        assert!(binding.enabled());
    }

    #[test]
    fn test_matches() {
        let up = Binding::new().keys(&["k", "up"]);
        assert!(matches("k", &up));
        assert!(matches("up", &up));
        assert!(!matches("x", &up));
    }

    #[test]
    fn test_matches_disabled() {
        let mut binding = Binding::new().keys(&["q"]);
        binding.enable(false);
        assert!(!matches("q", &binding));
    }

    #[test]
    fn test_default_keymap_bindings() {
        let keymap = KeyMap::default();
        assert!(matches("+", &keymap.increment));
        assert!(matches("down", &keymap.decrement));
        assert!(matches("shift+tab", &keymap.focus_prev));
        assert!(matches(" ", &keymap.activate));
        assert!(matches("esc", &keymap.quit));
    }

    #[test]
    fn test_short_help_skips_disabled() {
        let mut keymap = KeyMap::default();
        let with_decrement = keymap.short_help();
        assert!(with_decrement.contains("-/j: decrement"));

        keymap.decrement.enable(false);
        let without = keymap.short_help();
        assert!(!without.contains("decrement"));
        assert!(without.contains("+/k: increment"));
    }
}
