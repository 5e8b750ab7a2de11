//! Frame module - the rolls of a single turn
//!
//! A frame holds at most two balls, stored inline (no allocation).
//! Frames are append-only: once a roll is recorded it never changes.

use arrayvec::ArrayVec;

use crate::error::InvalidRoll;
use crate::types::{MAX_PINS, MAX_ROLLS_PER_FRAME};

/// One frame of a game (1-based `number`, 1..=12).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    number: u8,
    rolls: ArrayVec<u8, MAX_ROLLS_PER_FRAME>,
}

impl Frame {
    /// Create an empty frame
    pub fn new(number: u8) -> Self {
        Self {
            number,
            rolls: ArrayVec::new(),
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    pub fn roll_count(&self) -> usize {
        self.rolls.len()
    }

    /// Pins still standing for the next ball in this frame.
    pub fn pins_standing(&self) -> u8 {
        MAX_PINS.saturating_sub(self.score() as u8)
    }

    /// Validate a roll without recording it.
    ///
    /// Returns the pin count narrowed to `u8` on success.
    pub fn check_roll(&self, pins: i32) -> Result<u8, InvalidRoll> {
        if !(0..=MAX_PINS as i32).contains(&pins) {
            return Err(InvalidRoll::OutOfRange { pins });
        }
        if self.is_finished() {
            return Err(InvalidRoll::FrameComplete { frame: self.number });
        }
        let standing = self.pins_standing();
        if pins > standing as i32 {
            return Err(InvalidRoll::ExceedsFrame { pins, standing });
        }
        Ok(pins as u8)
    }

    /// Record a roll. The frame is left untouched on error.
    pub fn add_roll(&mut self, pins: i32) -> Result<(), InvalidRoll> {
        let pins = self.check_roll(pins)?;
        self.rolls.push(pins);
        Ok(())
    }

    /// First ball knocked down all ten pins.
    pub fn is_strike(&self) -> bool {
        self.rolls.first() == Some(&MAX_PINS)
    }

    /// Two balls recorded that together knocked down all ten pins.
    pub fn is_spare(&self) -> bool {
        self.rolls.len() == MAX_ROLLS_PER_FRAME && self.score() == MAX_PINS as u32
    }

    /// No more balls can go into this frame.
    pub fn is_finished(&self) -> bool {
        self.is_strike() || self.rolls.len() == MAX_ROLLS_PER_FRAME
    }

    /// Sum of the recorded balls (0 when empty).
    pub fn score(&self) -> u32 {
        self.rolls.iter().map(|&p| p as u32).sum()
    }

    /// First recorded ball, or 0 when empty.
    pub fn first_roll(&self) -> u32 {
        self.rolls.first().map(|&p| p as u32).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_frame_reports_nothing() {
        let frame = Frame::new(1);
        assert_eq!(frame.number(), 1);
        assert_eq!(frame.score(), 0);
        assert_eq!(frame.first_roll(), 0);
        assert!(!frame.is_strike());
        assert!(!frame.is_spare());
        assert!(!frame.is_finished());
    }

    #[test]
    fn open_frame_sums_both_balls() {
        for p1 in 0..=10 {
            for p2 in 0..=(10 - p1) {
                let mut frame = Frame::new(3);
                frame.add_roll(p1).unwrap();
                if p1 == 10 {
                    assert!(frame.is_finished());
                    continue;
                }
                frame.add_roll(p2).unwrap();
                assert_eq!(frame.score(), (p1 + p2) as u32);
                assert_eq!(frame.first_roll(), p1 as u32);
                assert!(frame.is_finished());
                assert_eq!(frame.is_spare(), p1 + p2 == 10);
            }
        }
    }

    #[test]
    fn strike_finishes_after_one_ball() {
        let mut frame = Frame::new(1);
        frame.add_roll(10).unwrap();
        assert!(frame.is_strike());
        assert!(!frame.is_spare());
        assert!(frame.is_finished());
        assert_eq!(
            frame.add_roll(0),
            Err(InvalidRoll::FrameComplete { frame: 1 })
        );
    }

    #[test]
    fn zero_then_ten_is_a_spare_not_a_strike() {
        let mut frame = Frame::new(1);
        frame.add_roll(0).unwrap();
        frame.add_roll(10).unwrap();
        assert!(frame.is_spare());
        assert!(!frame.is_strike());
    }

    #[test]
    fn out_of_range_pins_are_rejected() {
        let mut frame = Frame::new(1);
        assert_eq!(frame.add_roll(-1), Err(InvalidRoll::OutOfRange { pins: -1 }));
        assert_eq!(frame.add_roll(11), Err(InvalidRoll::OutOfRange { pins: 11 }));
        assert_eq!(frame.roll_count(), 0);
    }

    #[test]
    fn second_ball_cannot_exceed_standing_pins() {
        let mut frame = Frame::new(1);
        frame.add_roll(7).unwrap();
        let before = frame.clone();
        assert_eq!(
            frame.add_roll(4),
            Err(InvalidRoll::ExceedsFrame {
                pins: 4,
                standing: 3
            })
        );
        assert_eq!(frame, before);
        frame.add_roll(3).unwrap();
        assert!(frame.is_spare());
    }
}
