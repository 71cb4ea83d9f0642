//! Session loop
//!
//! Reads input one line at a time, routes command lines through the parser
//! and appends everything else while in append mode. Errors from commands are
//! reported on the output and never end the session.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::commands;
use crate::model::{EditorState, Mode};
use crate::parser;

/// Why the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The quit command ran
    Quit,
    /// Input ran out
    EndOfInput,
}

/// Process a single raw input line
///
/// Fails only when writing to `out` fails.
pub fn handle_line(state: &mut EditorState, raw: &str, out: &mut dyn Write) -> io::Result<()> {
    let line = raw
        .strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(raw);

    if state.is_command_line(line) {
        if let Err(e) = parser::handle_command(line.trim_end(), state, out) {
            tracing::debug!("Command {:?} failed: {}", line, e);
            writeln!(out, "{}", e)?;
        }
        return Ok(());
    }

    match state.mode {
        Mode::Append => state.append_line(line),
        Mode::Command | Mode::Quit => {
            tracing::debug!("Ignoring text outside append mode: {:?}", line);
        }
    }
    Ok(())
}

/// Run the editor until quit or end of input, then print `farewell`
///
/// End of input while appending leaves append mode first; either way the
/// session finishes in [`Mode::Quit`].
pub fn run<R: BufRead>(
    state: &mut EditorState,
    mut input: R,
    out: &mut dyn Write,
    farewell: &str,
) -> io::Result<Outcome> {
    let mut raw = Vec::new();

    let outcome = loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            if state.mode == Mode::Append {
                tracing::debug!("End of input in append mode");
                state.mode = Mode::Command;
            }
            state.mode = Mode::Quit;
            break Outcome::EndOfInput;
        }

        handle_line(state, &String::from_utf8_lossy(&raw), out)?;
        out.flush()?;

        if state.is_quit() {
            break Outcome::Quit;
        }
    };

    if state.changed {
        tracing::warn!("Session ended with unsaved changes");
    }
    writeln!(out, "{}", farewell)?;
    out.flush()?;
    tracing::info!("Session ended: {:?}", outcome);
    Ok(outcome)
}

/// Read the file given on the command line before the first command
///
/// A file that cannot be read is reported on `out` and still becomes the
/// associated filename, so a later `w` creates it.
pub fn open_initial(state: &mut EditorState, path: PathBuf, out: &mut dyn Write) -> io::Result<()> {
    if let Err(e) = commands::load_file(state, path.clone()) {
        writeln!(out, "{}", e)?;
        state.filename = Some(path);
        return Ok(());
    }
    // Nothing has been edited yet.
    state.changed = false;
    Ok(())
}
