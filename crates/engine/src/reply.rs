//! Replies produced by the session, one per user-visible line (or block).

use std::fmt;

use thiserror::Error;

use crate::core::{GameSnapshot, RollError};
use crate::input::PinsError;
use crate::types::{Command, GameStatus};

/// Why a command was refused before touching the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Warning. You must create a new game before using this command. Hint: Type \"new\" to create a game.")]
    NoGame,
    #[error("Game has already ended. Final score was {final_score}.")]
    AlreadyFinished { final_score: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    GameCreated,
    Closing,
    Help,
    Unknown(String),
    Refused(SessionError),
    Score(u32),
    /// `frame` is only printed while the game is in progress; the finished
    /// line reads "Game finished. Score: N".
    Status {
        status: GameStatus,
        frame: u8,
        score: u32,
    },
    RollAdded {
        pins: u8,
        frame: u8,
    },
    /// The last ball just ended the game.
    GameFinished {
        score: u32,
    },
    RollRejected(RollError),
    BadToken(PinsError),
    NoRollValues,
    Card(Box<GameSnapshot>),
}

impl Reply {
    /// Whether the reply should be shown as a warning.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Reply::Unknown(_)
                | Reply::Refused(SessionError::NoGame)
                | Reply::RollRejected(_)
                | Reply::BadToken(_)
                | Reply::NoRollValues
        )
    }

    /// Short machine-friendly name used in the transcript.
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::GameCreated => "game_created",
            Reply::Closing => "closing",
            Reply::Help => "help",
            Reply::Unknown(_) => "unknown_command",
            Reply::Refused(_) => "refused",
            Reply::Score(_) => "score",
            Reply::Status { .. } => "status",
            Reply::RollAdded { .. } => "roll_added",
            Reply::GameFinished { .. } => "game_finished",
            Reply::RollRejected(_) => "roll_rejected",
            Reply::BadToken(_) => "bad_token",
            Reply::NoRollValues => "no_roll_values",
            Reply::Card(_) => "card",
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::GameCreated => write!(f, "New game has been created."),
            Reply::Closing => write!(f, "Closing program."),
            Reply::Help => {
                write!(f, "Continue by using the following commands:")?;
                for cmd in Command::ALL {
                    write!(f, "\n- {} : {}", cmd.as_str(), cmd.description())?;
                }
                Ok(())
            }
            Reply::Unknown(_) => write!(f, "Warning. Unknown command used."),
            Reply::Refused(err) => write!(f, "{err}"),
            Reply::Score(score) => write!(f, "{score}"),
            Reply::Status {
                status: GameStatus::Finished,
                score,
                ..
            } => write!(f, "Game finished. Score: {score}"),
            Reply::Status {
                status: GameStatus::InProgress,
                frame,
                score,
            } => write!(f, "Game in progress. Frame: {frame}. Current Score: {score}"),
            Reply::RollAdded { pins, frame } => write!(f, "{pins} points added to frame {frame}"),
            Reply::GameFinished { score } => write!(f, "Game finished. Final score: {score}"),
            Reply::RollRejected(err) => write!(f, "Warning. Roll not added. {err}"),
            Reply::BadToken(err) => write!(f, "Warning. Roll not added. {err}"),
            Reply::NoRollValues => write!(f, "Warning. No roll values were found"),
            Reply::Card(snap) => {
                // Compact one-line card; the terminal crate draws the full grid.
                for frame in snap.scoring_frames() {
                    let marks: String = frame.marks().iter().collect();
                    write!(f, "|{marks:<2}")?;
                }
                let bonus: String = snap
                    .bonus_frames()
                    .iter()
                    .flat_map(|frame| frame.marks())
                    .collect();
                if !bonus.is_empty() {
                    write!(f, "|{bonus}")?;
                }
                write!(f, "| {}", snap.score)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, InvalidRoll};

    #[test]
    fn status_lines_match_lifecycle() {
        let in_progress = Reply::Status {
            status: GameStatus::InProgress,
            frame: 4,
            score: 38,
        };
        assert_eq!(
            in_progress.to_string(),
            "Game in progress. Frame: 4. Current Score: 38"
        );

        let finished = Reply::Status {
            status: GameStatus::Finished,
            frame: 10,
            score: 128,
        };
        assert_eq!(finished.to_string(), "Game finished. Score: 128");
    }

    #[test]
    fn warnings_are_flagged() {
        assert!(Reply::Unknown("bowl".into()).is_warning());
        assert!(Reply::Refused(SessionError::NoGame).is_warning());
        assert!(Reply::NoRollValues.is_warning());
        assert!(Reply::RollRejected(RollError::InvalidRoll(InvalidRoll::OutOfRange {
            pins: 12
        }))
        .is_warning());
        assert!(!Reply::Score(10).is_warning());
        assert!(!Reply::Refused(SessionError::AlreadyFinished { final_score: 0 }).is_warning());
    }

    #[test]
    fn rejected_roll_explains_reason() {
        let reply = Reply::RollRejected(RollError::InvalidRoll(InvalidRoll::ExceedsFrame {
            pins: 6,
            standing: 2,
        }));
        let text = reply.to_string();
        assert!(text.starts_with("Warning. Roll not added. "));
        assert!(text.contains("cannot exceed 10"));
    }

    #[test]
    fn help_lists_every_command() {
        let text = Reply::Help.to_string();
        for cmd in Command::ALL {
            assert!(text.contains(&format!("- {} : ", cmd.as_str())));
        }
    }

    #[test]
    fn compact_card_shows_marks_and_total() {
        let mut game = Game::new();
        for pins in [10, 7, 3, 0, 4] {
            game.roll(pins).unwrap();
        }
        let text = Reply::Card(Box::new(game.snapshot())).to_string();
        assert!(text.starts_with("|X |7/|-4|"));
        assert!(text.ends_with(&format!("| {}", game.score())));
    }
}
