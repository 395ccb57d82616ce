#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

//! # Tealoop
//!
//! A small, synchronous TUI runtime based on The Elm Architecture.
//!
//! An application is a [`Model`]: it owns its state, consumes [`Message`]s
//! in `update()`, and renders itself as a string in `view()`. [`Program`]
//! drives the loop against a real terminal via crossterm; [`Simulator`]
//! drives the same model without a terminal for tests, and [`query::Screen`]
//! answers user-level questions about a rendered view.
//!
//! ## Example
//!
//! ```rust
//! use tealoop::{Cmd, Message, Model};
//!
//! struct Beeps { heard: u32 }
//!
//! impl Model for Beeps {
//!     fn init(&self) -> Option<Cmd> { None }
//!     fn update(&mut self, msg: Message) -> Option<Cmd> {
//!         if msg.is::<()>() {
//!             self.heard += 1;
//!         }
//!         None
//!     }
//!     fn view(&self) -> String {
//!         format!("heard {} beeps", self.heard)
//!     }
//! }
//! ```

pub mod command;
pub mod key;
pub mod message;
pub mod mouse;
pub mod program;
pub mod query;
pub mod simulator;

pub use command::{Cmd, quit};
pub use key::{KeyMsg, KeyType};
pub use message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
pub use mouse::{MouseAction, MouseButton, MouseMsg};
pub use program::{Error, Model, Program, Result};
pub use simulator::Simulator;
