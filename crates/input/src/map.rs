//! Mapping from typed lines to shell commands.

use crate::types::Command;

/// What a line typed at the command prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Nothing but whitespace.
    Blank,
    /// Anything that is not a known command word.
    Unknown(String),
}

/// Map a command-prompt line to an [`Input`] (case-insensitive).
pub fn parse_input(line: &str) -> Input {
    let word = line.trim();
    if word.is_empty() {
        return Input::Blank;
    }
    match Command::from_str(word) {
        Some(cmd) => Input::Command(cmd),
        None => Input::Unknown(word.to_string()),
    }
}
