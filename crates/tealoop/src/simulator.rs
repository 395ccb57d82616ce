//! Program simulator for testing lifecycle without a real terminal.
//!
//! This module provides a way to exercise Model implementations without
//! requiring a terminal. Tests can either feed messages and inspect the
//! model directly, or drive simulated user input with [`Simulator::press`]
//! and [`Simulator::click`] and assert only on the rendered output via
//! [`Simulator::screen`].

use std::collections::VecDeque;

use crate::command::Cmd;
use crate::key::KeyMsg;
use crate::message::{InterruptMsg, Message, QuitMsg};
use crate::mouse::MouseMsg;
use crate::query::Screen;
use crate::Model;

/// Statistics tracked during simulation.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    /// Number of times init() was called.
    pub init_calls: usize,
    /// Number of times update() was called.
    pub update_calls: usize,
    /// Number of times view() was called.
    pub view_calls: usize,
    /// Whether quit was requested.
    pub quit_requested: bool,
}

/// A simulator for testing Model implementations without a terminal.
///
/// # Example
///
/// ```rust
/// use tealoop::{Cmd, Message, Model, Simulator};
///
/// struct Adder { total: i32 }
///
/// impl Model for Adder {
///     fn init(&self) -> Option<Cmd> { None }
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if let Some(n) = msg.downcast::<i32>() {
///             self.total += n;
///         }
///         None
///     }
///     fn view(&self) -> String {
///         format!("total: {}", self.total)
///     }
/// }
///
/// let mut sim = Simulator::new(Adder { total: 0 });
/// sim.send(Message::new(5));
/// sim.send(Message::new(3));
/// sim.run_until_empty();
///
/// assert_eq!(sim.model().total, 8);
/// assert_eq!(sim.last_view(), Some("total: 8"));
/// ```
pub struct Simulator<M: Model> {
    model: M,
    input_queue: VecDeque<Message>,
    output_views: Vec<String>,
    stats: SimulationStats,
    initialized: bool,
}

impl<M: Model> Simulator<M> {
    /// Create a new simulator with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            input_queue: VecDeque::new(),
            output_views: Vec::new(),
            stats: SimulationStats::default(),
            initialized: false,
        }
    }

    /// Initialize the model, calling init() and rendering the first view.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.stats.init_calls += 1;

        if let Some(cmd) = self.model.init() {
            if let Some(msg) = cmd.execute() {
                self.input_queue.push_back(msg);
            }
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
    }

    /// Queue a message for processing.
    pub fn send(&mut self, msg: Message) {
        self.input_queue.push_back(msg);
    }

    /// Simulate the user pressing a key: queue it and process immediately.
    pub fn press(&mut self, key: KeyMsg) {
        self.send(Message::new(key));
        self.step();
    }

    /// Simulate a left-button mouse click at the given cell.
    pub fn click(&mut self, x: u16, y: u16) {
        self.send(Message::new(MouseMsg::left_press(x, y)));
        self.step();
    }

    /// Process one message from the queue, calling update and view.
    pub fn step(&mut self) {
        if !self.initialized {
            self.init();
        }

        let Some(msg) = self.input_queue.pop_front() else {
            return;
        };

        if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
            self.stats.quit_requested = true;
            return;
        }

        self.stats.update_calls += 1;
        if let Some(cmd) = self.model.update(msg) {
            self.run_command(cmd);
        }

        self.stats.view_calls += 1;
        self.output_views.push(self.model.view());
    }

    /// Process all pending messages until the queue is empty or quit is
    /// requested. Returns the number of messages processed.
    pub fn run_until_empty(&mut self) -> usize {
        let mut processed = 0;
        while !self.input_queue.is_empty() && !self.stats.quit_requested {
            self.step();
            processed += 1;
        }
        processed
    }

    fn run_command(&mut self, cmd: Cmd) {
        let Some(msg) = cmd.execute() else {
            return;
        };

        // Termination preempts input already sitting in the queue, matching
        // the real event loop. Queueing the message at the back would let
        // pending input run first.
        if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
            self.stats.quit_requested = true;
        } else {
            self.input_queue.push_back(msg);
        }
    }

    /// Get a reference to the current model state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the simulator and return the final model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Get the simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Get all captured view outputs.
    pub fn views(&self) -> &[String] {
        &self.output_views
    }

    /// Get the most recent view output.
    pub fn last_view(&self) -> Option<&str> {
        self.output_views.last().map(String::as_str)
    }

    /// Parse the most recent view into a queryable [`Screen`].
    ///
    /// Initializes the model first if needed, so there is always a view.
    pub fn screen(&mut self) -> Screen {
        if !self.initialized {
            self.init();
        }
        Screen::parse(self.last_view().unwrap_or_default())
    }

    /// Check if quit has been requested.
    pub fn is_quit(&self) -> bool {
        self.stats.quit_requested
    }

    /// Check if the model has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the number of pending messages.
    pub fn pending_count(&self) -> usize {
        self.input_queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quit;

    /// Minimal model that records how the runtime drives it.
    struct Probe {
        value: i32,
    }

    impl Probe {
        fn new() -> Self {
            Self { value: 0 }
        }
    }

    impl Model for Probe {
        fn init(&self) -> Option<Cmd> {
            None
        }

        fn update(&mut self, msg: Message) -> Option<Cmd> {
            if let Some(n) = msg.downcast::<i32>() {
                if n == 99 {
                    return Some(quit());
                }
                self.value += n;
            }
            None
        }

        fn view(&self) -> String {
            format!("value: {}", self.value)
        }
    }

    #[test]
    fn test_init_called_once() {
        let mut sim = Simulator::new(Probe::new());
        sim.init();
        sim.init();
        assert_eq!(sim.stats().init_calls, 1);
    }

    #[test]
    fn test_view_captured_after_init() {
        let mut sim = Simulator::new(Probe::new());
        sim.init();
        assert_eq!(sim.views().len(), 1);
        assert_eq!(sim.last_view(), Some("value: 0"));
    }

    #[test]
    fn test_update_accumulates() {
        let mut sim = Simulator::new(Probe::new());
        sim.send(Message::new(5));
        sim.send(Message::new(3));
        sim.step();
        sim.step();

        assert_eq!(sim.model().value, 8);
        assert_eq!(sim.stats().update_calls, 2);
    }

    #[test]
    fn test_view_captured_after_each_update() {
        let mut sim = Simulator::new(Probe::new());
        sim.init();
        sim.send(Message::new(1));
        sim.step();
        sim.send(Message::new(2));
        sim.step();

        // 1 from init + 2 from updates
        assert_eq!(sim.stats().view_calls, 3);
        assert_eq!(sim.last_view(), Some("value: 3"));
    }

    #[test]
    fn test_quit_stops_processing() {
        let mut sim = Simulator::new(Probe::new());
        sim.send(Message::new(1));
        sim.send(Message::new(99)); // update returns quit()
        sim.send(Message::new(2)); // never processed

        sim.run_until_empty();

        assert!(sim.is_quit());
        assert_eq!(sim.model().value, 1);
    }

    #[test]
    fn test_interrupt_stops_processing() {
        let mut sim = Simulator::new(Probe::new());
        sim.send(Message::new(1));
        sim.send(Message::new(InterruptMsg));
        sim.send(Message::new(2)); // never processed

        sim.run_until_empty();

        assert!(sim.is_quit());
        assert_eq!(sim.model().value, 1);
    }

    #[test]
    fn test_run_until_empty_counts() {
        let mut sim = Simulator::new(Probe::new());
        sim.send(Message::new(1));
        sim.send(Message::new(2));
        sim.send(Message::new(3));

        assert_eq!(sim.run_until_empty(), 3);
        assert_eq!(sim.model().value, 6);
    }

    #[test]
    fn test_implicit_init_on_step() {
        let mut sim = Simulator::new(Probe::new());
        sim.send(Message::new(1));
        sim.step();

        assert!(sim.is_initialized());
        assert_eq!(sim.stats().init_calls, 1);
    }

    #[test]
    fn test_into_model() {
        let mut sim = Simulator::new(Probe::new());
        sim.send(Message::new(42));
        sim.step();
        assert_eq!(sim.into_model().value, 42);
    }

    #[test]
    fn test_pending_count() {
        let mut sim = Simulator::new(Probe::new());
        assert_eq!(sim.pending_count(), 0);
        sim.send(Message::new(1));
        assert_eq!(sim.pending_count(), 1);
        sim.step();
        assert_eq!(sim.pending_count(), 0);
    }
}
