//! The counter component.
//!
//! A bounded counter with two activatable controls. The value never drops
//! below zero: decrementing at the floor is a no-op, and the Decrement
//! control renders as disabled there. Disabling is a presentation-layer
//! reflection of the floor, derived from [`Counter::at_floor`] in one
//! place rather than guarded twice.

use tealoop::{Cmd, KeyMsg, Message, Model, MouseMsg, quit};

use crate::keymap::{KeyMap, matches};

/// Row of the control line in the rendered view (0-indexed).
const CONTROL_ROW: u16 = 3;
/// Column span of the Increment control. The bracket markup is the same
/// width focused and unfocused, so these never move.
const INCREMENT_COLS: std::ops::Range<u16> = 2..15;
/// Column span of the Decrement control.
const DECREMENT_COLS: std::ops::Range<u16> = 17..30;

/// The two activatable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// Bumps the value up. Always enabled.
    #[default]
    Increment,
    /// Bumps the value down. Non-interactive at the floor.
    Decrement,
}

impl Control {
    /// The control's visible label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Control::Increment => "Increment",
            Control::Decrement => "Decrement",
        }
    }
}

/// The counter model.
///
/// Owns the value and the keyboard focus; mutated only through
/// [`Model::update`] while a program or simulator drives it.
#[derive(Debug, Clone)]
pub struct Counter {
    value: u64,
    focus: Control,
    keymap: KeyMap,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Counter {
    /// Create a counter starting at the given value.
    ///
    /// A negative initial value is clamped to zero so the floor invariant
    /// holds from the first render.
    #[must_use]
    pub fn new(initial: i64) -> Self {
        let value = u64::try_from(initial.max(0)).unwrap_or_default();
        let mut counter = Self {
            value,
            focus: Control::default(),
            keymap: KeyMap::default(),
        };
        counter.sync_bindings();
        counter
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Whether the counter sits at its floor of zero.
    #[must_use]
    pub fn at_floor(&self) -> bool {
        self.value == 0
    }

    /// The control holding keyboard focus.
    #[must_use]
    pub fn focus(&self) -> Control {
        self.focus
    }

    /// Bump the value up by one.
    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
        tracing::debug!(value = self.value, "incremented");
        self.sync_bindings();
    }

    /// Bump the value down by one; a no-op at the floor.
    ///
    /// This is the only floor check. The disabled rendering, the disabled
    /// keybinding, and ignored activations are all downstream of it.
    pub fn decrement(&mut self) {
        if self.at_floor() {
            return;
        }
        self.value -= 1;
        tracing::debug!(value = self.value, "decremented");
        self.sync_bindings();
    }

    /// Move keyboard focus to the other control.
    ///
    /// With exactly two controls, next and previous are the same move.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Control::Increment => Control::Decrement,
            Control::Decrement => Control::Increment,
        };
    }

    /// Press a control. Pressing the disabled Decrement control does
    /// nothing, same as its keybinding.
    pub fn press(&mut self, control: Control) {
        match control {
            Control::Increment => self.increment(),
            Control::Decrement => self.decrement(),
        }
    }

    /// The control occupying the given screen cell, if any.
    #[must_use]
    pub fn control_at(x: u16, y: u16) -> Option<Control> {
        if y != CONTROL_ROW {
            return None;
        }
        if INCREMENT_COLS.contains(&x) {
            Some(Control::Increment)
        } else if DECREMENT_COLS.contains(&x) {
            Some(Control::Decrement)
        } else {
            None
        }
    }

    /// Keep the keymap in step with the floor condition. The binding's
    /// enabled flag mirrors the view's disabled marker; both derive from
    /// `at_floor()`.
    fn sync_bindings(&mut self) {
        self.keymap.decrement.enable(!self.at_floor());
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        let name = key.to_string();

        if matches(&name, &self.keymap.quit) {
            return Some(quit());
        }

        if matches(&name, &self.keymap.increment) {
            self.increment();
        } else if matches(&name, &self.keymap.decrement) {
            self.decrement();
        } else if matches(&name, &self.keymap.focus_next)
            || matches(&name, &self.keymap.focus_prev)
        {
            self.cycle_focus();
        } else if matches(&name, &self.keymap.activate) {
            self.press(self.focus);
        }

        None
    }

    fn handle_mouse(&mut self, mouse: &MouseMsg) {
        if !mouse.is_left_press() {
            return;
        }
        if let Some(control) = Self::control_at(mouse.x, mouse.y) {
            // A click focuses the control it lands on, then presses it.
            // Pressing the disabled Decrement control falls through to
            // the floor check in decrement().
            self.focus = control;
            self.press(control);
        }
    }

    fn render_control(&self, control: Control) -> String {
        let label = control.label();
        let mut rendered = if self.focus == control {
            format!("[>{label}<]")
        } else {
            format!("[ {label} ]")
        };
        if control == Control::Decrement && self.at_floor() {
            rendered.push_str(" (disabled)");
        }
        rendered
    }
}

impl Model for Counter {
    fn init(&self) -> Option<Cmd> {
        None
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            self.handle_mouse(mouse);
        }
        None
    }

    fn view(&self) -> String {
        format!(
            "\n  Count: {}\n\n  {}  {}\n\n  {}\n",
            self.value,
            self.render_control(Control::Increment),
            self.render_control(Control::Decrement),
            self.keymap.short_help()
        )
    }
}
