//! TUI Bowling (workspace facade crate).
//!
//! This package exposes `tui_bowling::{core,engine,input,term,types}` as one
//! public API while the implementation lives in dedicated crates under `crates/`.

pub use tui_bowling_core as core;
pub use tui_bowling_engine as engine;
pub use tui_bowling_input as input;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;
