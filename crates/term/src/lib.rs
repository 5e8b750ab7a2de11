//! Terminal output for the scorekeeper.
//!
//! A small rendering layer for a line-oriented shell. The scorecard is drawn
//! into a character framebuffer first, then flushed as styled lines; replies
//! and prompts go through the same crossterm command path.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep the scorecard layout testable without a terminal
//! - Degrade to plain text when color is off or stdout is piped

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod shell;

pub use tui_bowling_core as core;
pub use tui_bowling_engine as engine;
pub use tui_bowling_input as input;
pub use tui_bowling_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, CARD_HEIGHT, CARD_WIDTH};
pub use renderer::{encode_lines_into, Console};
pub use shell::Shell;
