//! Error taxonomy for the editor
//!
//! Every variant is recoverable: the session loop reports the message and
//! moves on to the next input line.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing or executing a command
#[derive(Debug, Error)]
pub enum EditorError {
    /// None of the command forms matched
    #[error("syntax error")]
    Syntax,

    /// Well-formed prefix, but the letter has no handler
    #[error("unknown command: {0}")]
    UnknownCommand(char),

    /// Print requested on a buffer with no lines
    #[error("buffer empty")]
    EmptyBuffer,

    /// Read or write without a path and without an associated filename
    #[error("file name undefined")]
    MissingFilename,

    /// Writing command output failed
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias used by the parser and the handlers
pub type EditorResult<T> = Result<T, EditorError>;

impl EditorError {
    /// Wrap an I/O error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
