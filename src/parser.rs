//! Command line parsing
//!
//! A command line (sentinel already stripped) takes one of three forms,
//! tried in order:
//!
//! 1. the bare sentinel, which always leaves append mode
//! 2. a command letter with no address, applied to the whole buffer
//! 3. an address or address range followed by a command letter
//!
//! Anything else is a syntax error.

use std::io::Write;

use crate::address::{resolve_range, Range, Scanner};
use crate::commands::{self, CommandDef, CommandId, Handler};
use crate::error::{EditorError, EditorResult};
use crate::model::EditorState;

/// A parsed command, ready for dispatch
#[derive(Debug, Clone)]
pub struct Command {
    pub letter: char,
    pub id: CommandId,
    /// Encoded range followed by free tokens
    pub args: Vec<String>,
    pub handler: Handler,
}

impl Command {
    fn new(def: &CommandDef, args: Vec<String>) -> Self {
        Self {
            letter: def.letter,
            id: def.id,
            args,
            handler: def.handler,
        }
    }

    fn with_range(def: &CommandDef, range: Range, tail: &str) -> Self {
        let mut args = range.to_args().to_vec();
        args.extend(tail.split_whitespace().map(str::to_string));
        Self::new(def, args)
    }

    /// Range encoded in the leading arguments, or the whole buffer
    pub fn range(&self, buffer_len: usize) -> Range {
        Range::from_args(&self.args, buffer_len).unwrap_or_else(|| Range::whole(buffer_len))
    }

    /// Tokens after the encoded range
    pub fn free_args(&self) -> &[String] {
        commands::free_args(&self.args)
    }

    /// Run the handler against `state`
    pub fn execute(&self, state: &mut EditorState, out: &mut dyn Write) -> EditorResult<()> {
        (self.handler)(state, &self.args, out)
    }
}

/// Remove the leading sentinel from a raw command line
///
/// A line consisting of the sentinel alone is returned unchanged so that it
/// reaches the parser as the bare-sentinel form.
pub fn strip_sentinel(raw: &str, sentinel: u8) -> &str {
    match raw.as_bytes() {
        [first, _, ..] if *first == sentinel => &raw[1..],
        _ => raw,
    }
}

/// Parse a command line with the sentinel already stripped
pub fn parse_command(line: &str, state: &EditorState) -> EditorResult<Command> {
    let buffer_len = state.buffer.len();

    if line.as_bytes() == [state.sentinel] {
        return Ok(Command::new(commands::definition(CommandId::Dot), Vec::new()));
    }

    let mut scanner = Scanner::new(line);
    match scanner.peek_char() {
        Some(c) if c.is_alphabetic() => {
            scanner.bump_char();
            let def = lookup(c)?;
            Ok(Command::with_range(
                def,
                Range::whole(buffer_len),
                scanner.rest(),
            ))
        }
        Some(c) if c.is_ascii_digit() || c == '^' || c == ',' => {
            let address = resolve_range(&mut scanner, buffer_len).ok_or(EditorError::Syntax)?;
            let letter = scanner
                .bump_char()
                .filter(|c| c.is_alphabetic())
                .ok_or(EditorError::Syntax)?;
            let def = lookup(letter)?;
            Ok(Command::with_range(
                def,
                Range::resolve(address, buffer_len),
                scanner.rest(),
            ))
        }
        _ => Err(EditorError::Syntax),
    }
}

fn lookup(letter: char) -> EditorResult<&'static CommandDef> {
    commands::lookup(letter).ok_or(EditorError::UnknownCommand(letter))
}

/// Parse a raw command line and run it
pub fn handle_command(
    raw: &str,
    state: &mut EditorState,
    out: &mut dyn Write,
) -> EditorResult<CommandId> {
    let line = strip_sentinel(raw, state.sentinel);
    let command = parse_command(line, state)?;
    tracing::debug!(letter = %command.letter, args = ?command.args, "Dispatching command");
    command.execute(state, out)?;
    Ok(command.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;

    fn sample() -> EditorState {
        EditorState::with_lines(["alpha", "beta", "gamma"])
    }

    fn parse(line: &str, state: &EditorState) -> EditorResult<Command> {
        parse_command(line, state)
    }

    // ========================================================================
    // Sentinel Tests
    // ========================================================================

    #[test]
    fn test_strip_sentinel() {
        assert_eq!(strip_sentinel(".p", b'.'), "p");
        assert_eq!(strip_sentinel(".", b'.'), ".");
        assert_eq!(strip_sentinel("..", b'.'), ".");
        assert_eq!(strip_sentinel(":1,2p", b':'), "1,2p");
        assert_eq!(strip_sentinel("text", b'.'), "text");
    }

    #[test]
    fn test_bare_sentinel_is_dot() {
        let cmd = parse(".", &sample()).unwrap();
        assert_eq!(cmd.id, CommandId::Dot);
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn test_bare_custom_sentinel_is_dot() {
        let mut state = sample();
        state.sentinel = b':';
        assert_eq!(parse(":", &state).unwrap().id, CommandId::Dot);
        assert!(matches!(parse(".", &state), Err(EditorError::Syntax)));
    }

    // ========================================================================
    // Letter-First Tests
    // ========================================================================

    #[test]
    fn test_letter_defaults_to_whole_buffer() {
        let state = sample();
        let cmd = parse("p", &state).unwrap();
        assert_eq!(cmd.id, CommandId::Print);
        assert_eq!(cmd.args, ["1", "4"]);
        assert_eq!(cmd.range(3), Range::whole(3));
    }

    #[test]
    fn test_letter_on_empty_buffer() {
        let cmd = parse("p", &EditorState::new()).unwrap();
        assert_eq!(cmd.range(0), Range { start: 0, end: 0 });
    }

    #[test]
    fn test_letter_with_free_tokens() {
        let cmd = parse("w   out.txt  extra ", &sample()).unwrap();
        assert_eq!(cmd.id, CommandId::Write);
        assert_eq!(cmd.free_args(), ["out.txt", "extra"]);
    }

    #[test]
    fn test_letter_glued_to_token() {
        let cmd = parse("rnotes.txt", &sample()).unwrap();
        assert_eq!(cmd.id, CommandId::Read);
        assert_eq!(cmd.free_args(), ["notes.txt"]);
    }

    #[test]
    fn test_unknown_letter() {
        assert!(matches!(
            parse("z", &sample()),
            Err(EditorError::UnknownCommand('z'))
        ));
        assert!(matches!(
            parse("é", &sample()),
            Err(EditorError::UnknownCommand('é'))
        ));
    }

    // ========================================================================
    // Address-First Tests
    // ========================================================================

    #[test]
    fn test_single_address() {
        let cmd = parse("2p", &sample()).unwrap();
        assert_eq!(cmd.range(3), Range { start: 1, end: 2 });
    }

    #[test]
    fn test_address_range() {
        let cmd = parse("1,2p", &sample()).unwrap();
        assert_eq!(cmd.range(3), Range { start: 0, end: 2 });
        assert_eq!(cmd.args, ["1", "3"]);
    }

    #[test]
    fn test_anchored_range() {
        assert_eq!(
            parse("^,$p", &sample()).unwrap().range(3),
            Range { start: 0, end: 3 }
        );
        assert_eq!(
            parse("^+2,$-1p", &sample()).unwrap().range(3),
            Range { start: 1, end: 2 }
        );
    }

    #[test]
    fn test_leading_comma() {
        assert_eq!(
            parse(",2p", &sample()).unwrap().range(3),
            Range { start: 0, end: 2 }
        );
    }

    #[test]
    fn test_address_out_of_bounds_is_clamped() {
        let cmd = parse("2,100p", &sample()).unwrap();
        assert_eq!(cmd.range(3), Range { start: 1, end: 3 });
    }

    #[test]
    fn test_address_with_free_tokens() {
        let cmd = parse("1,$w copy.txt", &sample()).unwrap();
        assert_eq!(cmd.id, CommandId::Write);
        assert_eq!(cmd.free_args(), ["copy.txt"]);
    }

    #[test]
    fn test_address_without_letter() {
        assert!(matches!(parse("12", &sample()), Err(EditorError::Syntax)));
        assert!(matches!(parse("1,2", &sample()), Err(EditorError::Syntax)));
        assert!(matches!(parse("1,$", &sample()), Err(EditorError::Syntax)));
        assert!(matches!(parse("1;p", &sample()), Err(EditorError::Syntax)));
    }

    #[test]
    fn test_address_with_unknown_letter() {
        assert!(matches!(
            parse("1,2x", &sample()),
            Err(EditorError::UnknownCommand('x'))
        ));
    }

    // ========================================================================
    // Syntax Error Tests
    // ========================================================================

    #[test]
    fn test_syntax_errors() {
        for line in ["", " p", "$p", "-1p", "+p", "!", "#"] {
            assert!(
                matches!(parse(line, &sample()), Err(EditorError::Syntax)),
                "expected syntax error for {:?}",
                line
            );
        }
    }

    // ========================================================================
    // Dispatch Tests
    // ========================================================================

    #[test]
    fn test_handle_command_runs_handler() {
        let mut state = sample();
        let mut out = Vec::new();
        let id = handle_command(".2p", &mut state, &mut out).unwrap();
        assert_eq!(id, CommandId::Print);
        assert_eq!(String::from_utf8(out).unwrap(), "beta\n");
    }

    #[test]
    fn test_handle_command_surfaces_handler_error() {
        let mut state = EditorState::new();
        let mut out = Vec::new();
        let err = handle_command(".p", &mut state, &mut out).unwrap_err();
        assert!(matches!(err, EditorError::EmptyBuffer));
    }

    #[test]
    fn test_handle_bare_sentinel_leaves_append() {
        let mut state = sample();
        state.mode = Mode::Append;
        let mut out = Vec::new();
        handle_command(".", &mut state, &mut out).unwrap();
        assert_eq!(state.mode, Mode::Command);
    }
}
