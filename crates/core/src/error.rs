//! Roll rejection reasons.
//!
//! Every rejected roll leaves the frame and the game exactly as they were, so
//! callers can report the error and keep going.

use thiserror::Error;

/// Why a pin count cannot be recorded in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRoll {
    /// Pin count outside [0, 10].
    #[error("Number of pins knocked down must be in range [0,10], got {pins}.")]
    OutOfRange { pins: i32 },
    /// Second ball would knock down more pins than are standing.
    #[error("Total Score for a frame cannot exceed 10 (only {standing} pins standing, got {pins}).")]
    ExceedsFrame { pins: i32, standing: u8 },
    /// The frame already holds all the balls it can take.
    #[error("Frame {frame} is already complete.")]
    FrameComplete { frame: u8 },
}

/// Error returned by [`crate::Game::roll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error(transparent)]
    InvalidRoll(#[from] InvalidRoll),
    #[error("Unable to roll. Game has ended with a final score of {final_score}.")]
    GameOver { final_score: u32 },
}

impl RollError {
    pub fn is_game_over(&self) -> bool {
        matches!(self, RollError::GameOver { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_roll_converts_into_roll_error() {
        let err: RollError = InvalidRoll::OutOfRange { pins: 11 }.into();
        assert_eq!(err, RollError::InvalidRoll(InvalidRoll::OutOfRange { pins: 11 }));
        assert!(!err.is_game_over());
        assert!(err.to_string().contains("[0,10]"));
    }

    #[test]
    fn game_over_mentions_final_score() {
        let err = RollError::GameOver { final_score: 187 };
        assert!(err.is_game_over());
        assert!(err.to_string().contains("187"));
    }
}
