//! Game module - the scoring state machine
//!
//! A game owns twelve frame slots: the ten scoring frames plus two bonus slots
//! that only exist to hold the extra balls a tenth-frame strike or spare earns.
//! Rolls are routed to the right slot, the game finishes exactly once, and the
//! score is recomputed from the recorded balls on demand.

use crate::error::{InvalidRoll, RollError};
use crate::frame::Frame;
use crate::scoring::{running_totals, total_score};
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::*;

/// Where an accepted roll ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollOutcome {
    /// 1-based number of the frame the ball was recorded in.
    pub frame: u8,
    pub pins: u8,
    /// The roll ended the game.
    pub finished: bool,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    frames: [Frame; TOTAL_FRAMES],
    /// Index of the frame that received the last ball. Never moves backwards.
    cursor: usize,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create an empty game (all slots with zero rolls)
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(|i| Frame::new(i as u8 + 1)),
            cursor: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frame by 1-based number.
    pub fn frame(&self, number: u8) -> Option<&Frame> {
        (number as usize)
            .checked_sub(1)
            .and_then(|index| self.frames.get(index))
    }

    /// Total balls recorded so far, bonus slots included.
    pub fn roll_count(&self) -> usize {
        self.frames.iter().map(Frame::roll_count).sum()
    }

    /// 1-based number of the frame the next ball goes into.
    ///
    /// Once the game is finished this is the last frame that received a ball.
    pub fn current_frame(&self) -> u8 {
        let index = if self.is_finished() {
            self.cursor
        } else {
            self.target_index()
        };
        self.frames[index].number()
    }

    /// Total score over the ten scoring frames.
    pub fn score(&self) -> u32 {
        total_score(&self.frames)
    }

    /// Cumulative score through each scoring frame, once that frame is final.
    pub fn frame_totals(&self) -> [Option<u32>; SCORING_FRAMES] {
        running_totals(&self.frames)
    }

    /// Record one ball.
    ///
    /// The target slot is validated before anything changes, so a rejected
    /// ball leaves the game exactly as it was.
    pub fn roll(&mut self, pins: i32) -> Result<RollOutcome, RollError> {
        if self.is_finished() {
            return Err(self.game_over());
        }
        if !(0..=MAX_PINS as i32).contains(&pins) {
            return Err(InvalidRoll::OutOfRange { pins }.into());
        }

        let target = self.target_index();
        if target >= ELEVENTH_FRAME_INDEX {
            return self.roll_bonus(target, pins);
        }

        self.frames[target].add_roll(pins)?;
        self.cursor = target;

        let frame = &self.frames[target];
        if target == TENTH_FRAME_INDEX && frame.is_finished() && frame.score() < MAX_PINS as u32 {
            self.status = GameStatus::Finished;
        }
        Ok(self.outcome(pins))
    }

    /// Apply balls in order, stopping at the first rejected one.
    ///
    /// Balls accepted before the failure stay recorded.
    pub fn roll_many<I>(&mut self, rolls: I) -> Result<usize, RollError>
    where
        I: IntoIterator<Item = i32>,
    {
        let mut applied = 0;
        for pins in rolls {
            self.roll(pins)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Plain copy of the game for rendering and logging.
    pub fn snapshot(&self) -> GameSnapshot {
        let totals = self.frame_totals();
        GameSnapshot {
            frames: std::array::from_fn(|i| {
                let frame = &self.frames[i];
                FrameSnapshot {
                    number: frame.number(),
                    rolls: frame.rolls().iter().copied().collect(),
                    strike: frame.is_strike(),
                    spare: frame.is_spare(),
                    running_total: totals.get(i).copied().flatten(),
                }
            }),
            score: self.score(),
            status: self.status,
            current_frame: self.current_frame(),
        }
    }

    /// Slot the next ball should go into.
    fn target_index(&self) -> usize {
        if self.frames[self.cursor].is_finished() && self.cursor + 1 < TOTAL_FRAMES {
            self.cursor + 1
        } else {
            self.cursor
        }
    }

    /// Balls after the tenth frame.
    ///
    /// Spare: one extra ball in the 11th slot. Strike: two extra balls, the
    /// second going into the 12th slot only when the first was itself a strike.
    fn roll_bonus(&mut self, target: usize, pins: i32) -> Result<RollOutcome, RollError> {
        let tenth = &self.frames[TENTH_FRAME_INDEX];
        let tenth_strike = tenth.is_strike();
        if !tenth_strike && !tenth.is_spare() {
            // Open tenth frame already ends the game; getting here means the
            // status was never updated.
            self.status = GameStatus::Finished;
            return Err(self.game_over());
        }

        match target {
            ELEVENTH_FRAME_INDEX if tenth_strike => {
                self.frames[target].add_roll(pins)?;
                self.cursor = target;
                if self.frames[target].roll_count() == MAX_ROLLS_PER_FRAME {
                    self.status = GameStatus::Finished;
                }
            }
            ELEVENTH_FRAME_INDEX => {
                if self.frames[target].roll_count() > 0 {
                    self.status = GameStatus::Finished;
                    return Err(self.game_over());
                }
                self.frames[target].add_roll(pins)?;
                self.cursor = target;
                self.status = GameStatus::Finished;
            }
            TWELFTH_FRAME_INDEX
                if tenth_strike && self.frames[ELEVENTH_FRAME_INDEX].is_strike() =>
            {
                self.frames[target].add_roll(pins)?;
                self.cursor = target;
                self.status = GameStatus::Finished;
            }
            _ => {
                self.status = GameStatus::Finished;
                return Err(self.game_over());
            }
        }
        Ok(self.outcome(pins))
    }

    fn outcome(&self, pins: i32) -> RollOutcome {
        RollOutcome {
            frame: self.frames[self.cursor].number(),
            pins: pins as u8,
            finished: self.is_finished(),
        }
    }

    fn game_over(&self) -> RollError {
        RollError::GameOver {
            final_score: self.score(),
        }
    }
}
