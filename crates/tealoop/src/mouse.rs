//! Mouse input handling.
//!
//! This module provides types for representing pointer events. Mouse
//! reporting must be enabled with `Program::with_mouse()`.

use std::fmt;

/// Mouse event message.
///
/// MouseMsg is sent to the program's update function when mouse activity
/// occurs.
///
/// # Example
///
/// ```rust
/// use tealoop::{MouseAction, MouseButton, MouseMsg};
///
/// fn handle_mouse(mouse: &MouseMsg) {
///     if mouse.is_left_press() {
///         println!("Left click at ({}, {})", mouse.x, mouse.y);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseMsg {
    /// X coordinate (column), 0-indexed.
    pub x: u16,
    /// Y coordinate (row), 0-indexed.
    pub y: u16,
    /// The action that occurred.
    pub action: MouseAction,
    /// The button involved.
    pub button: MouseButton,
}

impl MouseMsg {
    /// Create a left-button press at the given cell.
    pub fn left_press(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            action: MouseAction::Press,
            button: MouseButton::Left,
        }
    }

    /// Check if this is a left-button press, the activation gesture.
    pub fn is_left_press(&self) -> bool {
        self.button == MouseButton::Left && self.action == MouseAction::Press
    }
}

impl Default for MouseMsg {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            action: MouseAction::Press,
            button: MouseButton::None,
        }
    }
}

/// Mouse action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseAction {
    /// Mouse button pressed.
    #[default]
    Press,
    /// Mouse button released.
    Release,
    /// Mouse moved.
    Motion,
}

impl fmt::Display for MouseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseAction::Press => "press",
            MouseAction::Release => "release",
            MouseAction::Motion => "motion",
        };
        write!(f, "{name}")
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    /// No button (motion only).
    #[default]
    None,
    /// Left button.
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
    /// Scroll wheel up.
    WheelUp,
    /// Scroll wheel down.
    WheelDown,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseButton::None => "none",
            MouseButton::Left => "left",
            MouseButton::Middle => "middle",
            MouseButton::Right => "right",
            MouseButton::WheelUp => "wheel up",
            MouseButton::WheelDown => "wheel down",
        };
        write!(f, "{name}")
    }
}

/// Convert a crossterm mouse event to a MouseMsg.
pub fn from_crossterm_mouse(event: crossterm::event::MouseEvent) -> MouseMsg {
    use crossterm::event::{MouseButton as CtButton, MouseEventKind};

    let action = match event.kind {
        MouseEventKind::Down(_) | MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            MouseAction::Press
        }
        MouseEventKind::Up(_) => MouseAction::Release,
        _ => MouseAction::Motion,
    };

    let button = match event.kind {
        MouseEventKind::Down(b) | MouseEventKind::Up(b) | MouseEventKind::Drag(b) => match b {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        },
        MouseEventKind::ScrollUp => MouseButton::WheelUp,
        MouseEventKind::ScrollDown => MouseButton::WheelDown,
        _ => MouseButton::None,
    };

    MouseMsg {
        x: event.column,
        y: event.row,
        action,
        button,
    }
}
