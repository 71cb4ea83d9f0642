//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::io::Cursor;

use lined::model::EditorState;
use lined::runtime::{self, Outcome};

/// The three-line buffer used by most scenarios
pub fn greek() -> EditorState {
    EditorState::with_lines(["alpha", "beta", "gamma"])
}

/// Run one command line and return what it printed
pub fn exec(state: &mut EditorState, line: &str) -> String {
    let mut out = Vec::new();
    runtime::handle_line(state, line, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Feed a whole input stream through a session
pub fn session(state: &mut EditorState, input: &str) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = runtime::run(state, Cursor::new(input.as_bytes()), &mut out, "Goodbye!").unwrap();
    (outcome, String::from_utf8(out).unwrap())
}
