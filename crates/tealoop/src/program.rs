//! Program lifecycle and event loop.
//!
//! The Program struct manages the entire TUI application lifecycle:
//! terminal setup, event translation, the update/view cycle, and teardown.

use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use crate::command::Cmd;
use crate::key::from_crossterm_key;
use crate::message::{InterruptMsg, Message, QuitMsg, WindowSizeMsg};
use crate::mouse::from_crossterm_mouse;
use crate::KeyType;

/// Errors that can occur when running a tealoop program.
///
/// Most errors are propagated with the `?` operator; the underlying
/// [`std::io::Error`] is attached where one exists so callers can inspect
/// the cause.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O error during terminal operations.
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),

    /// Failed to enable or disable raw mode.
    ///
    /// Raw mode is required for TUI operation as it disables terminal
    /// line buffering and echo. This typically indicates the program is
    /// not running in an interactive terminal.
    #[error("failed to {action} raw mode: {source}")]
    RawModeFailure {
        /// Whether we were trying to enable or disable raw mode.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to enter or exit alternate screen.
    #[error("failed to {action} alternate screen: {source}")]
    AltScreenFailure {
        /// Whether we were trying to enter or exit alt screen.
        action: &'static str,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to poll for terminal events.
    #[error("failed to poll terminal events: {0}")]
    EventPoll(io::Error),

    /// Failed to render the view to the terminal.
    #[error("failed to render view: {0}")]
    Render(io::Error),
}

/// A specialized [`Result`] type for tealoop operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The Model trait for TUI applications.
///
/// Implement this trait to define your application's behavior.
///
/// # Example
///
/// ```rust
/// use tealoop::{Cmd, Message, Model};
///
/// struct Presses { count: u32 }
///
/// impl Model for Presses {
///     fn init(&self) -> Option<Cmd> { None }
///
///     fn update(&mut self, msg: Message) -> Option<Cmd> {
///         if msg.is::<tealoop::KeyMsg>() {
///             self.count += 1;
///         }
///         None
///     }
///
///     fn view(&self) -> String {
///         format!("{} key presses", self.count)
///     }
/// }
/// ```
pub trait Model: Send + 'static {
    /// Initialize the model and return an optional startup command.
    ///
    /// This is called once when the program starts.
    fn init(&self) -> Option<Cmd>;

    /// Process a message and return a new command.
    ///
    /// This is the pure update function at the heart of the Elm
    /// Architecture.
    fn update(&mut self, msg: Message) -> Option<Cmd>;

    /// Render the model as a string for display.
    ///
    /// This should be a pure function with no side effects.
    fn view(&self) -> String;
}

/// Program options.
#[derive(Debug, Clone)]
struct ProgramOptions {
    /// Use alternate screen buffer.
    alt_screen: bool,
    /// Enable mouse reporting.
    mouse: bool,
    /// Target frames per second for event polling.
    fps: u32,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            alt_screen: false,
            mouse: false,
            fps: 60,
        }
    }
}

/// The main program runner.
///
/// Program manages the lifecycle of a TUI application: terminal setup and
/// teardown, event polling and message dispatch, and rendering.
///
/// # Example
///
/// ```rust,ignore
/// use tealoop::Program;
///
/// let final_model = Program::new(MyModel::new())
///     .with_alt_screen()
///     .run()?;
/// ```
pub struct Program<M: Model> {
    model: M,
    options: ProgramOptions,
}

impl<M: Model> Program<M> {
    /// Create a new program with the given model.
    pub fn new(model: M) -> Self {
        Self {
            model,
            options: ProgramOptions::default(),
        }
    }

    /// Use alternate screen buffer (full-screen mode).
    #[must_use]
    pub fn with_alt_screen(mut self) -> Self {
        self.options.alt_screen = true;
        self
    }

    /// Enable mouse reporting.
    ///
    /// Mouse clicks are delivered as [`crate::MouseMsg`] messages.
    #[must_use]
    pub fn with_mouse(mut self) -> Self {
        self.options.mouse = true;
        self
    }

    /// Set the target frames per second.
    ///
    /// Default is 60 FPS. Valid range is 1-120 FPS.
    #[must_use]
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.options.fps = fps.clamp(1, 120);
        self
    }

    /// Run the program against stdout and return the final model state.
    pub fn run(self) -> Result<M> {
        let stdout = io::stdout();
        self.run_with_writer(stdout)
    }

    /// Run the program with a custom writer.
    pub fn run_with_writer<W: Write>(self, mut writer: W) -> Result<M> {
        let options = self.options.clone();

        enable_raw_mode().map_err(|source| Error::RawModeFailure {
            action: "enable",
            source,
        })?;

        if options.alt_screen {
            if let Err(source) = execute!(writer, EnterAlternateScreen) {
                let _ = disable_raw_mode();
                return Err(Error::AltScreenFailure {
                    action: "enter",
                    source,
                });
            }
        }

        // From here on every failure goes through the teardown below
        let result = self.setup_and_loop(&mut writer, &options);

        // Cleanup terminal, best effort and in reverse order
        if options.mouse {
            let _ = execute!(writer, DisableMouseCapture);
        }

        let _ = execute!(writer, Show);

        if options.alt_screen {
            let _ = execute!(writer, LeaveAlternateScreen);
        }

        let _ = disable_raw_mode();

        tracing::debug!("program finished");
        result
    }

    fn setup_and_loop<W: Write>(self, writer: &mut W, options: &ProgramOptions) -> Result<M> {
        execute!(writer, Hide)?;

        if options.mouse {
            execute!(writer, EnableMouseCapture)?;
        }

        tracing::debug!(alt_screen = options.alt_screen, mouse = options.mouse, "program started");

        self.event_loop(writer)
    }

    fn event_loop<W: Write>(mut self, writer: &mut W) -> Result<M> {
        let mut queue: VecDeque<Message> = VecDeque::new();

        // Report the initial window size before the first update
        if let Ok((width, height)) = terminal::size() {
            queue.push_back(Message::new(WindowSizeMsg { width, height }));
        }

        // Call init and handle the startup command
        if let Some(cmd) = self.model.init() {
            Self::run_command(cmd, &mut queue);
        }

        // Render initial view
        let mut last_view = String::new();
        self.render(writer, &mut last_view)?;

        let frame_duration = Duration::from_secs_f64(1.0 / f64::from(self.options.fps));

        loop {
            // Poll for events with frame-rate limiting
            if event::poll(frame_duration).map_err(Error::EventPoll)? {
                match event::read().map_err(Error::EventPoll)? {
                    Event::Key(key_event) => {
                        // Only handle key press events, not release
                        if key_event.kind != KeyEventKind::Press {
                            continue;
                        }

                        let key_msg = from_crossterm_key(key_event.code, key_event.modifiers);

                        // Ctrl+C is an interrupt, not ordinary input
                        if key_msg.key_type == KeyType::CtrlC {
                            queue.push_back(Message::new(InterruptMsg));
                        } else {
                            queue.push_back(Message::new(key_msg));
                        }
                    }
                    Event::Mouse(mouse_event) => {
                        queue.push_back(Message::new(from_crossterm_mouse(mouse_event)));
                    }
                    Event::Resize(width, height) => {
                        queue.push_back(Message::new(WindowSizeMsg { width, height }));
                    }
                    _ => {}
                }
            }

            // Process all pending messages
            let mut needs_render = false;
            while let Some(msg) = queue.pop_front() {
                if msg.is::<QuitMsg>() || msg.is::<InterruptMsg>() {
                    return Ok(self.model);
                }

                if let Some(cmd) = self.model.update(msg) {
                    Self::run_command(cmd, &mut queue);
                }
                needs_render = true;
            }

            if needs_render {
                self.render(writer, &mut last_view)?;
            }
        }
    }

    /// Execute a command and queue any message it produces.
    ///
    /// Commands run on the dispatch thread: updates never interleave.
    fn run_command(cmd: Cmd, queue: &mut VecDeque<Message>) {
        if let Some(msg) = cmd.execute() {
            queue.push_back(msg);
        }
    }

    fn render<W: Write>(&self, writer: &mut W, last_view: &mut String) -> Result<()> {
        let view = self.model.view();

        // Skip if view hasn't changed
        if view == *last_view {
            return Ok(());
        }

        execute!(writer, MoveTo(0, 0), Clear(ClearType::All)).map_err(Error::Render)?;
        write!(writer, "{view}").map_err(Error::Render)?;
        writer.flush().map_err(Error::Render)?;

        *last_view = view;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo(String);

    impl Model for Echo {
        fn init(&self) -> Option<Cmd> {
            None
        }

        fn update(&mut self, _msg: Message) -> Option<Cmd> {
            None
        }

        fn view(&self) -> String {
            self.0.clone()
        }
    }

    #[test]
    fn test_fps_clamped() {
        let program = Program::new(Echo(String::new())).with_fps(500);
        assert_eq!(program.options.fps, 120);

        let program = Program::new(Echo(String::new())).with_fps(0);
        assert_eq!(program.options.fps, 1);
    }

    #[test]
    fn test_options_builders() {
        let program = Program::new(Echo(String::new())).with_alt_screen().with_mouse();
        assert!(program.options.alt_screen);
        assert!(program.options.mouse);
    }

    #[test]
    fn test_render_skips_unchanged_view() {
        let program = Program::new(Echo("hello".into()));
        let mut out = Vec::new();
        let mut last_view = String::new();

        program.render(&mut out, &mut last_view).unwrap();
        assert_eq!(last_view, "hello");
        let first_len = out.len();

        // Same view again writes nothing
        program.render(&mut out, &mut last_view).unwrap();
        assert_eq!(out.len(), first_len);
    }

    #[test]
    fn test_error_display() {
        let err = Error::RawModeFailure {
            action: "enable",
            source: io::Error::other("nope"),
        };
        assert!(err.to_string().contains("enable raw mode"));
    }
}
