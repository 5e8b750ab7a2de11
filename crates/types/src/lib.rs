//! Core types module - shared constants and small enums
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, making them usable
//! in any context (scoring core, command session, terminal rendering).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_PINS` | 10 | Pins standing at the start of a rack |
//! | `MAX_ROLLS_PER_FRAME` | 2 | Balls a frame can hold |
//! | `SCORING_FRAMES` | 10 | Frames that contribute to the score |
//! | `TOTAL_FRAMES` | 12 | Scoring frames plus the two bonus slots |
//!
//! Frame numbers are 1-based (1..=12). Frame indices are 0-based (0..12).
//!
//! # Examples
//!
//! ```
//! use tui_bowling_types::{Command, GameStatus, MAX_PINS, TOTAL_FRAMES};
//!
//! // Commands are case-insensitive
//! assert_eq!(Command::from_str("ROLL"), Some(Command::Roll));
//! assert_eq!(Command::from_str("bowl"), None);
//!
//! assert_eq!(GameStatus::InProgress.as_str(), "InProgress");
//!
//! assert_eq!(MAX_PINS, 10);
//! assert_eq!(TOTAL_FRAMES, 12);
//! ```

/// Pins standing at the start of every rack.
pub const MAX_PINS: u8 = 10;

/// Maximum number of balls recorded in a single frame.
pub const MAX_ROLLS_PER_FRAME: usize = 2;

/// Number of frames that are scored (1 through 10).
pub const SCORING_FRAMES: usize = 10;

/// Scoring frames plus the 11th/12th bonus slots.
pub const TOTAL_FRAMES: usize = 12;

/// 0-based index of the tenth frame.
pub const TENTH_FRAME_INDEX: usize = 9;

/// 0-based index of the first bonus frame (the "11th").
pub const ELEVENTH_FRAME_INDEX: usize = 10;

/// 0-based index of the second bonus frame (the "12th").
pub const TWELFTH_FRAME_INDEX: usize = 11;

/// Best possible total (twelve strikes in a row).
pub const PERFECT_SCORE: u32 = 300;

/// Lifecycle of a single game.
///
/// `Finished` is terminal: once a game reports it, no further rolls are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "InProgress",
            GameStatus::Finished => "Finished",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished)
    }
}

/// Commands understood by the interactive shell
///
/// Each command maps to a single word typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Start a fresh game, discarding any current one
    New,
    /// Prompt for pin counts and apply them in order
    Roll,
    /// Print the current total
    Score,
    /// Print progress, frame and score
    Status,
    /// Print the frame-by-frame scorecard
    Card,
    /// Print the command list
    Help,
    /// Leave the program
    Quit,
}

impl Command {
    /// All commands, in the order they are listed to the user.
    pub const ALL: [Command; 7] = [
        Command::New,
        Command::Roll,
        Command::Score,
        Command::Status,
        Command::Card,
        Command::Help,
        Command::Quit,
    ];

    /// Parse a command word (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::Command;
    ///
    /// assert_eq!(Command::from_str("new"), Some(Command::New));
    /// assert_eq!(Command::from_str("  Status "), Some(Command::Status));
    /// assert_eq!(Command::from_str("QUIT"), Some(Command::Quit));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "new" => Some(Command::New),
            "roll" => Some(Command::Roll),
            "score" => Some(Command::Score),
            "status" => Some(Command::Status),
            "card" => Some(Command::Card),
            "help" => Some(Command::Help),
            "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::New => "new",
            Command::Roll => "roll",
            Command::Score => "score",
            Command::Status => "status",
            Command::Card => "card",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    /// One-line description shown in the command list.
    pub fn description(&self) -> &'static str {
        match self {
            Command::New => "Starts a new game, discarding any current game",
            Command::Roll => "Allows user to enter bowling results",
            Command::Score => "Shows the game's current score",
            Command::Status => "Shows the current status of the game",
            Command::Card => "Shows the frame-by-frame scorecard",
            Command::Help => "Lists the available commands",
            Command::Quit => "Exits program",
        }
    }

    /// Whether the command only makes sense once a game exists.
    pub fn needs_game(&self) -> bool {
        matches!(
            self,
            Command::Roll | Command::Score | Command::Status | Command::Card
        )
    }
}
