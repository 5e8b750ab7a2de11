//! Snapshot module - plain, serializable copies of a game for the scorecard and the transcript

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{GameStatus, MAX_PINS, MAX_ROLLS_PER_FRAME, SCORING_FRAMES, TOTAL_FRAMES};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub number: u8,
    pub rolls: ArrayVec<u8, MAX_ROLLS_PER_FRAME>,
    pub strike: bool,
    pub spare: bool,
    /// Cumulative score through this frame, present once it can no longer change.
    pub running_total: Option<u32>,
}

impl FrameSnapshot {
    pub fn empty(number: u8) -> Self {
        Self {
            number,
            rolls: ArrayVec::new(),
            strike: false,
            spare: false,
            running_total: None,
        }
    }

    pub fn is_bonus(&self) -> bool {
        self.number as usize > SCORING_FRAMES
    }

    /// Scorecard notation for each ball: `X` strike, `/` spare, `-` gutter.
    pub fn marks(&self) -> ArrayVec<char, MAX_ROLLS_PER_FRAME> {
        let mut marks = ArrayVec::new();
        let mut standing = MAX_PINS;
        for &pins in &self.rolls {
            let mark = if pins == MAX_PINS && marks.is_empty() {
                'X'
            } else if pins == standing && !marks.is_empty() {
                '/'
            } else if pins == 0 {
                '-'
            } else {
                char::from_digit(pins as u32, 10).unwrap_or('?')
            };
            marks.push(mark);
            standing = standing.saturating_sub(pins);
        }
        marks
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; TOTAL_FRAMES],
    pub score: u32,
    #[serde(with = "status_serde")]
    pub status: GameStatus,
    pub current_frame: u8,
}

impl GameSnapshot {
    pub fn scoring_frames(&self) -> &[FrameSnapshot] {
        &self.frames[..SCORING_FRAMES]
    }

    pub fn bonus_frames(&self) -> &[FrameSnapshot] {
        &self.frames[SCORING_FRAMES..]
    }

    pub fn finished(&self) -> bool {
        self.status.is_finished()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            frames: std::array::from_fn(|i| FrameSnapshot::empty(i as u8 + 1)),
            score: 0,
            status: GameStatus::InProgress,
            current_frame: 1,
        }
    }
}

/// `GameStatus` lives in the dependency-free types crate, so it is written
/// here by name ("InProgress" / "Finished").
mod status_serde {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    use crate::types::GameStatus;

    pub fn serialize<S: Serializer>(status: &GameStatus, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(status.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<GameStatus, D::Error> {
        let raw = String::deserialize(d)?;
        match raw.as_str() {
            "InProgress" => Ok(GameStatus::InProgress),
            "Finished" => Ok(GameStatus::Finished),
            other => Err(D::Error::custom(format!("unknown game status: {other}"))),
        }
    }
}
