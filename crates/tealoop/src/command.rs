//! Commands for side effects.
//!
//! Commands represent operations that produce messages. They are the only
//! way for an update function to reach outside its own state: the function
//! stays pure and returns a lazy [`Cmd`] the runtime executes.

use crate::message::{Message, QuitMsg};

/// A command that produces a message when executed.
///
/// Commands are lazy: they do not execute until the program runs them.
///
/// # Example
///
/// ```rust
/// use tealoop::{Cmd, Message};
///
/// struct SavedMsg;
///
/// fn save_done() -> Cmd {
///     Cmd::new(|| Message::new(SavedMsg))
/// }
/// ```
pub struct Cmd(Box<dyn FnOnce() -> Option<Message> + Send + 'static>);

impl Cmd {
    /// Create a new command from a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Message + Send + 'static,
    {
        Self(Box::new(move || Some(f())))
    }

    /// Create a command that may not produce a message.
    pub fn new_optional<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Message> + Send + 'static,
    {
        Self(Box::new(f))
    }

    /// Execute the command and return the resulting message.
    pub fn execute(self) -> Option<Message> {
        (self.0)()
    }
}

/// Returns a command that quits the program.
pub fn quit() -> Cmd {
    Cmd::new(|| Message::new(QuitMsg))
}
