//! Editor model - the complete state of a running session
//!
//! One `EditorState` is created at startup and passed by `&mut` through the
//! parse/dispatch pipeline.

pub mod buffer;

pub use buffer::Buffer;

use std::path::PathBuf;

use crate::config::EditorConfig;

/// Default width of the line-number column when printing
pub const DEFAULT_NUMBER_WIDTH: usize = 4;

/// Default command sentinel byte
pub const DEFAULT_SENTINEL: u8 = b'.';

/// Editor mode; exactly one is active at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Non-command lines are appended to the buffer
    Append,
    /// Non-command lines are ignored
    #[default]
    Command,
    /// The session is over
    Quit,
}

/// The complete editor state
#[derive(Debug, Clone)]
pub struct EditorState {
    pub mode: Mode,
    pub buffer: Buffer,
    /// Buffer changed since the last successful write
    pub changed: bool,
    /// Print line numbers in front of each line
    pub line_numbers: bool,
    /// File associated with the buffer (set by a read or a write)
    pub filename: Option<PathBuf>,
    /// Byte that marks a line as a command
    pub sentinel: u8,
    /// Width of the line-number column
    pub number_width: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            mode: Mode::Command,
            buffer: Buffer::new(),
            changed: false,
            line_numbers: false,
            filename: None,
            sentinel: DEFAULT_SENTINEL,
            number_width: DEFAULT_NUMBER_WIDTH,
        }
    }
}

impl EditorState {
    /// Create a fresh state in command mode with an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the display settings taken from config
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            line_numbers: config.line_numbers,
            sentinel: config.sentinel_byte(),
            number_width: config.number_width,
            ..Self::default()
        }
    }

    /// Create a state with the given lines already loaded (not dirty)
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            buffer: Buffer::from_lines(lines),
            ..Self::default()
        }
    }

    /// Append one line of literal text and mark the buffer dirty
    pub fn append_line(&mut self, text: &str) {
        self.buffer.push_line(text);
        self.changed = true;
    }

    /// Whether a raw input line is a command line
    pub fn is_command_line(&self, raw: &str) -> bool {
        raw.as_bytes().first() == Some(&self.sentinel)
    }

    pub fn is_quit(&self) -> bool {
        self.mode == Mode::Quit
    }
}
