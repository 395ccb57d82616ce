#![forbid(unsafe_code)]
#![allow(clippy::must_use_candidate)]

//! # Tally
//!
//! A terminal counter with a zero floor.
//!
//! The interesting part of this crate is not the counter, which is a
//! handful of lines, but the test suite: the same behavior is verified
//! twice, once with white-box state tests against [`counter::Counter`]
//! and once with black-box interaction tests that drive a
//! [`tealoop::Simulator`] and only look at what the user would see.

pub mod counter;
pub mod keymap;

pub use counter::{Control, Counter};
