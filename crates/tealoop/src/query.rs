//! User-level queries over a rendered view.
//!
//! A [`Screen`] parses the string a model's `view()` produced and answers
//! the questions a user could answer by looking at the terminal: what text
//! is visible, which controls exist, which one has focus, and which are
//! disabled. Tests built on it never touch model internals.
//!
//! # Control markup convention
//!
//! Views render activatable controls with a fixed-width bracket markup:
//!
//! - `[ Label ]` - an enabled control
//! - `[>Label<]` - the control holding keyboard focus
//! - either form followed by ` (disabled)` - a non-interactive control
//!
//! The focused and unfocused forms are the same width, so control hit
//! regions never move when focus changes.
//!
//! # Example
//!
//! ```rust
//! use tealoop::query::Screen;
//!
//! let screen = Screen::parse("  Ready\n\n  [>Start<]  [ Stop ] (disabled)\n");
//! assert!(screen.contains_text("Ready"));
//!
//! let start = screen.control("Start").unwrap();
//! assert!(start.focused);
//!
//! let stop = screen.control("Stop").unwrap();
//! assert!(stop.disabled);
//! ```

/// A control found in a rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// The control's visible label.
    pub label: String,
    /// Whether the control holds keyboard focus.
    pub focused: bool,
    /// Whether the control is rendered as non-interactive.
    pub disabled: bool,
    /// Screen row of the control (0-indexed).
    pub row: u16,
    /// Screen column of the control's opening bracket (0-indexed).
    pub column: u16,
}

impl Control {
    /// A cell inside the control, suitable for a simulated click.
    #[must_use]
    pub fn click_target(&self) -> (u16, u16) {
        (self.column + 2, self.row)
    }
}

/// A parsed snapshot of a rendered view.
#[derive(Debug, Clone)]
pub struct Screen {
    lines: Vec<String>,
    controls: Vec<Control>,
}

impl Screen {
    /// Parse a rendered view into a queryable screen.
    #[must_use]
    pub fn parse(view: &str) -> Self {
        let lines: Vec<String> = view.lines().map(str::to_string).collect();
        let mut controls = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            controls.extend(parse_line(line, row));
        }

        Self { lines, controls }
    }

    /// Check whether the given text is visible anywhere on the screen.
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Find a line containing the given text.
    #[must_use]
    pub fn line_with(&self, needle: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.contains(needle))
            .map(String::as_str)
    }

    /// Find a control by its visible label.
    #[must_use]
    pub fn control(&self, label: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.label == label)
    }

    /// All controls, in render order.
    #[must_use]
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// The control currently holding focus, if any.
    #[must_use]
    pub fn focused_control(&self) -> Option<&Control> {
        self.controls.iter().find(|c| c.focused)
    }
}

/// Scan one line for bracket-markup controls.
fn parse_line(line: &str, row: usize) -> Vec<Control> {
    let mut controls = Vec::new();
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'[' {
            i += 1;
            continue;
        }
        let Some(close) = line[i + 1..].find(']').map(|off| i + 1 + off) else {
            break;
        };

        let inner = &line[i + 1..close];
        let (label, focused) = if let Some(focused_label) =
            inner.strip_prefix('>').and_then(|s| s.strip_suffix('<'))
        {
            (focused_label.trim(), true)
        } else {
            (inner.trim(), false)
        };

        if !label.is_empty() {
            let disabled = line[close + 1..].starts_with(" (disabled)");
            controls.push(Control {
                label: label.to_string(),
                focused,
                disabled,
                row: u16::try_from(row).unwrap_or(u16::MAX),
                column: u16::try_from(i).unwrap_or(u16::MAX),
            });
        }

        i = close + 1;
    }

    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_text() {
        let screen = Screen::parse("  Count: 3\n");
        assert!(screen.contains_text("Count: 3"));
        assert!(!screen.contains_text("Count: 4"));
    }

    #[test]
    fn test_parse_enabled_control() {
        let screen = Screen::parse("  [ Go ]\n");
        let go = screen.control("Go").unwrap();
        assert!(!go.focused);
        assert!(!go.disabled);
        assert_eq!(go.row, 0);
        assert_eq!(go.column, 2);
    }

    #[test]
    fn test_parse_focused_control() {
        let screen = Screen::parse("[>Go<]");
        assert!(screen.control("Go").unwrap().focused);
        assert_eq!(screen.focused_control().unwrap().label, "Go");
    }

    #[test]
    fn test_parse_disabled_control() {
        let screen = Screen::parse("[ Back ] (disabled)");
        assert!(screen.control("Back").unwrap().disabled);
    }

    #[test]
    fn test_disabled_marker_must_be_adjacent() {
        let screen = Screen::parse("[ Back ]   (disabled)");
        assert!(!screen.control("Back").unwrap().disabled);
    }

    #[test]
    fn test_multiple_controls_on_one_line() {
        let screen = Screen::parse("  [>Up<]  [ Down ] (disabled)");
        assert_eq!(screen.controls().len(), 2);
        assert!(screen.control("Up").unwrap().focused);
        assert!(screen.control("Down").unwrap().disabled);
    }

    #[test]
    fn test_controls_on_separate_rows() {
        let screen = Screen::parse("[ A ]\n[ B ]");
        assert_eq!(screen.control("A").unwrap().row, 0);
        assert_eq!(screen.control("B").unwrap().row, 1);
    }

    #[test]
    fn test_empty_brackets_are_not_controls() {
        let screen = Screen::parse("[ ] [] [>   <]");
        assert!(screen.controls().is_empty());
    }

    #[test]
    fn test_click_target_is_inside_control() {
        let screen = Screen::parse("  [ Go ]");
        let (x, y) = screen.control("Go").unwrap().click_target();
        assert_eq!(y, 0);
        assert!(x > 2 && x < 8);
    }

    #[test]
    fn test_missing_control() {
        let screen = Screen::parse("no controls here");
        assert!(screen.control("Go").is_none());
        assert!(screen.focused_control().is_none());
    }

    proptest::proptest! {
        #[test]
        fn prop_rendered_label_is_found(label in "[A-Za-z][A-Za-z0-9]{0,15}") {
            let line = format!("  [ {label} ]  [>{label}<] (disabled)");
            let screen = Screen::parse(&line);
            let found: Vec<_> = screen
                .controls()
                .iter()
                .filter(|c| c.label == label)
                .collect();
            proptest::prop_assert_eq!(found.len(), 2);
            proptest::prop_assert!(!found[0].focused);
            proptest::prop_assert!(found[1].focused && found[1].disabled);
        }
    }
}
