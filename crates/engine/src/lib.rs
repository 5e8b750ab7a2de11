//! Command session module - the shell's view of a game
//!
//! The session holds the optional current [`Game`](crate::core::Game), turns
//! parsed shell input into [`Reply`] values, and optionally appends every
//! exchange to an NDJSON transcript. It never prints; rendering the replies is
//! the terminal crate's job.
//!
//! # Environment Variables
//!
//! - `BOWLING_LOG_PATH`: append a transcript line per command to this file
//! - `BOWLING_NO_COLOR` / `NO_COLOR`: disable colored output
//! - `BOWLING_SHOW_CARD`: set to "1" or "true" to print the scorecard after each roll
//! - `BOWLING_PROMPT`: override the command prompt
//!
//! # Example
//!
//! ```
//! use tui_bowling_engine::{Reply, Session, Step};
//! use tui_bowling_engine::input::parse_input;
//!
//! let mut session = Session::new();
//! assert!(matches!(session.execute(&parse_input("new")), Step::Reply(Reply::GameCreated)));
//! assert!(matches!(session.execute(&parse_input("roll")), Step::PromptPins));
//!
//! let replies = session.roll_line("10 3 4");
//! assert_eq!(replies.len(), 3);
//! assert_eq!(session.game().unwrap().score(), 24);
//! ```

pub mod config;
pub mod reply;
pub mod session;
pub mod transcript;

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_types as types;

pub use config::ShellConfig;
pub use reply::{Reply, SessionError};
pub use session::{Session, Step, PINS_PROMPT};
pub use transcript::{Transcript, TranscriptRecord};
