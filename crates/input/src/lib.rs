//! Line input module (shell-facing).
//!
//! This crate is independent of any terminal backend. It maps typed command
//! words into [`crate::types::Command`], splits a roll line into pin counts,
//! and reads trimmed lines from any buffered reader (stdin in the binary,
//! byte slices in tests).

pub mod map;
pub mod pins;
pub mod reader;

pub use tui_bowling_types as types;

pub use map::{parse_input, Input};
pub use pins::{parse_pins, PinTokens, PinsError};
pub use reader::LineReader;
