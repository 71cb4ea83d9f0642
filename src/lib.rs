//! lined - a line-oriented text editor
//!
//! This crate provides the buffer model, the address and command parser, the
//! command handlers and the session loop used by the `lined` binary.

pub mod address;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod model;
pub mod parser;
pub mod runtime;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use address::Range;
pub use commands::CommandId;
pub use config::EditorConfig;
pub use error::{EditorError, EditorResult};
pub use model::{Buffer, EditorState, Mode};
pub use parser::{parse_command, Command};
pub use runtime::Outcome;
