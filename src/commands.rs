//! Command registry and handlers
//!
//! Every command letter maps to a [`CommandDef`] in [`COMMANDS`]. Handlers
//! receive the editor state, the argument list built by the parser and a
//! writer for their output.
//!
//! The first two arguments are always the encoded range (see
//! [`Range::to_args`]); the rest are free tokens from the command line.

use std::io::Write;
use std::path::PathBuf;

use crate::address::Range;
use crate::error::{EditorError, EditorResult};
use crate::model::{EditorState, Mode};
use crate::util::file_store;

/// Handler bound to a command letter
pub type Handler = fn(&mut EditorState, &[String], &mut dyn Write) -> EditorResult<()>;

/// Number of leading arguments that encode the range
pub const RANGE_ARGS: usize = 2;

/// Identifies a registered command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    Print,
    Quit,
    Append,
    /// Leave append mode
    Dot,
    Read,
    Write,
    Numbers,
    New,
}

/// A command definition in the registry
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
    pub letter: char,
    pub id: CommandId,
    pub label: &'static str,
    pub handler: Handler,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        letter: 'p',
        id: CommandId::Print,
        label: "Print lines",
        handler: print,
    },
    CommandDef {
        letter: 'q',
        id: CommandId::Quit,
        label: "Quit",
        handler: quit,
    },
    CommandDef {
        letter: 'a',
        id: CommandId::Append,
        label: "Append text",
        handler: append,
    },
    CommandDef {
        letter: 'r',
        id: CommandId::Read,
        label: "Read file",
        handler: read_file,
    },
    CommandDef {
        letter: 'w',
        id: CommandId::Write,
        label: "Write file",
        handler: write_file,
    },
    CommandDef {
        letter: 'l',
        id: CommandId::Numbers,
        label: "Toggle line numbers",
        handler: numbers,
    },
    CommandDef {
        letter: '.',
        id: CommandId::Dot,
        label: "Leave append mode",
        handler: dot,
    },
    CommandDef {
        letter: 'n',
        id: CommandId::New,
        label: "New document",
        handler: new_document,
    },
];

/// Find the definition bound to `letter`
pub fn lookup(letter: char) -> Option<&'static CommandDef> {
    COMMANDS.iter().find(|def| def.letter == letter)
}

/// Find the definition for a command id
pub fn definition(id: CommandId) -> &'static CommandDef {
    match COMMANDS.iter().find(|def| def.id == id) {
        Some(def) => def,
        None => unreachable!("every CommandId has an entry in COMMANDS"),
    }
}

/// Write one `letter  label` line per registered command
pub fn write_summary(out: &mut dyn Write) -> std::io::Result<()> {
    for def in COMMANDS {
        writeln!(out, "{}  {}", def.letter, def.label)?;
    }
    Ok(())
}

/// Free tokens after the encoded range
pub fn free_args(args: &[String]) -> &[String] {
    args.get(RANGE_ARGS..).unwrap_or(&[])
}

// ============================================================================
// Handlers
// ============================================================================

fn print(state: &mut EditorState, args: &[String], out: &mut dyn Write) -> EditorResult<()> {
    if state.buffer.is_empty() {
        return Err(EditorError::EmptyBuffer);
    }

    let len = state.buffer.len();
    let range = Range::from_args(args, len).unwrap_or_else(|| Range::whole(len));

    for (offset, line) in state.buffer.slice(range.start, range.end).iter().enumerate() {
        if state.line_numbers {
            writeln!(
                out,
                "{:<width$}{}",
                range.start + offset + 1,
                line,
                width = state.number_width
            )?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

fn quit(state: &mut EditorState, _args: &[String], _out: &mut dyn Write) -> EditorResult<()> {
    if state.changed {
        tracing::warn!("Quitting with unsaved changes");
    }
    state.mode = Mode::Quit;
    Ok(())
}

fn append(state: &mut EditorState, _args: &[String], _out: &mut dyn Write) -> EditorResult<()> {
    state.mode = Mode::Append;
    Ok(())
}

fn dot(state: &mut EditorState, _args: &[String], _out: &mut dyn Write) -> EditorResult<()> {
    state.mode = Mode::Command;
    Ok(())
}

fn numbers(state: &mut EditorState, _args: &[String], _out: &mut dyn Write) -> EditorResult<()> {
    state.line_numbers = !state.line_numbers;
    Ok(())
}

fn new_document(
    state: &mut EditorState,
    _args: &[String],
    _out: &mut dyn Write,
) -> EditorResult<()> {
    state.buffer.clear();
    Ok(())
}

fn read_file(state: &mut EditorState, args: &[String], _out: &mut dyn Write) -> EditorResult<()> {
    let path = target_path(state, args)?;
    load_file(state, path)
}

/// Replace the buffer with the content of `path`
///
/// On error the buffer, filename and dirty flag are left untouched.
pub fn load_file(state: &mut EditorState, path: PathBuf) -> EditorResult<()> {
    let lines = file_store::read_lines(&path).map_err(|e| EditorError::io(&path, e))?;
    tracing::info!("Loaded {} lines from {}", lines.len(), path.display());

    state.buffer.replace(lines);
    state.changed = true;
    state.filename = Some(path);
    Ok(())
}

fn write_file(state: &mut EditorState, args: &[String], _out: &mut dyn Write) -> EditorResult<()> {
    let path = target_path(state, args)?;

    file_store::write_lines_atomic(&path, state.buffer.lines())
        .map_err(|e| EditorError::io(&path, e))?;
    tracing::info!("Saved {} lines to {}", state.buffer.len(), path.display());

    state.changed = false;
    if state.filename.is_none() {
        state.filename = Some(path);
    }
    Ok(())
}

/// Path named on the command line, or the file already associated with the buffer
fn target_path(state: &EditorState, args: &[String]) -> EditorResult<PathBuf> {
    match free_args(args).first() {
        Some(name) => Ok(PathBuf::from(name.trim())),
        None => state.filename.clone().ok_or(EditorError::MissingFilename),
    }
}
