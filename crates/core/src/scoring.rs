//! Scoring module - ten-pin lookahead rules
//!
//! All functions are pure and work on the full slot array (10 scoring frames
//! followed by the two bonus slots). Nothing is cached: totals are recomputed
//! from the recorded balls every time.
//!
//! - Open frame: pins knocked down.
//! - Spare: 10 + the next ball.
//! - Strike: 10 + the next two balls, which may span two frames.
//! - Bonus slots (11th/12th) only feed lookahead; they are never scored on their own.
//!
//! A slot with no balls yet contributes 0, so a running total is always a lower
//! bound of the final one.

use crate::frame::Frame;
use crate::types::SCORING_FRAMES;

/// Frame after `index`, or `None` past the last slot.
pub fn next_frame(frames: &[Frame], index: usize) -> Option<&Frame> {
    frames.get(index.checked_add(1)?)
}

fn first_roll_of(frame: Option<&Frame>) -> u32 {
    frame.map(Frame::first_roll).unwrap_or(0)
}

/// Bonus points a scoring frame earns from later balls.
pub fn frame_bonus(frames: &[Frame], index: usize) -> u32 {
    let Some(frame) = frames.get(index) else {
        return 0;
    };

    if frame.is_spare() {
        first_roll_of(next_frame(frames, index))
    } else if frame.is_strike() {
        match next_frame(frames, index) {
            Some(next) if next.is_strike() => {
                next.first_roll() + first_roll_of(next_frame(frames, index + 1))
            }
            Some(next) => next.score(),
            None => 0,
        }
    } else {
        0
    }
}

/// Own pins plus lookahead bonus for one frame.
pub fn frame_score(frames: &[Frame], index: usize) -> u32 {
    frames
        .get(index)
        .map(|frame| frame.score() + frame_bonus(frames, index))
        .unwrap_or(0)
}

/// Total over the ten scoring frames.
pub fn total_score(frames: &[Frame]) -> u32 {
    (0..SCORING_FRAMES.min(frames.len()))
        .map(|index| frame_score(frames, index))
        .sum()
}

/// Number of later balls a finished frame needs before its score is final.
fn bonus_balls_needed(frame: &Frame) -> usize {
    if frame.is_strike() {
        2
    } else if frame.is_spare() {
        1
    } else {
        0
    }
}

/// Whether a frame's score can no longer change.
///
/// The frame must be finished and every ball its bonus looks at must be recorded.
pub fn is_resolved(frames: &[Frame], index: usize) -> bool {
    let Some(frame) = frames.get(index) else {
        return false;
    };
    if !frame.is_finished() {
        return false;
    }

    let needed = bonus_balls_needed(frame);
    let available = frames[index + 1..]
        .iter()
        .flat_map(|f| f.rolls().iter())
        .take(needed)
        .count();
    available == needed
}

/// Cumulative total through each scoring frame, once it is final.
///
/// Entries after the first unresolved frame are `None` even if their own
/// frames are complete, since the cumulative value would still move.
pub fn running_totals(frames: &[Frame]) -> [Option<u32>; SCORING_FRAMES] {
    let mut totals = [None; SCORING_FRAMES];
    let mut acc = 0u32;
    for (index, slot) in totals.iter_mut().enumerate() {
        if !is_resolved(frames, index) {
            break;
        }
        acc += frame_score(frames, index);
        *slot = Some(acc);
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TOTAL_FRAMES;

    fn frames_from(rolls: &[&[i32]]) -> Vec<Frame> {
        let mut frames: Vec<Frame> = (1..=TOTAL_FRAMES as u8).map(Frame::new).collect();
        for (frame, balls) in frames.iter_mut().zip(rolls) {
            for &pins in *balls {
                frame.add_roll(pins).unwrap();
            }
        }
        frames
    }

    #[test]
    fn open_frames_score_their_pins() {
        let frames = frames_from(&[&[3, 4], &[2, 5]]);
        assert_eq!(frame_score(&frames, 0), 7);
        assert_eq!(frame_score(&frames, 1), 7);
        assert_eq!(total_score(&frames), 14);
    }

    #[test]
    fn spare_takes_next_first_ball() {
        let frames = frames_from(&[&[6, 4], &[3, 2]]);
        assert_eq!(frame_bonus(&frames, 0), 3);
        assert_eq!(total_score(&frames), 13 + 5);
    }

    #[test]
    fn strike_takes_next_frame_total() {
        let frames = frames_from(&[&[10], &[3, 4]]);
        assert_eq!(frame_bonus(&frames, 0), 7);
        assert_eq!(total_score(&frames), 17 + 7);
    }

    #[test]
    fn double_strike_reaches_two_frames_ahead() {
        let frames = frames_from(&[&[10], &[10], &[4, 2]]);
        assert_eq!(frame_bonus(&frames, 0), 14);
        assert_eq!(frame_bonus(&frames, 1), 6);
        assert_eq!(total_score(&frames), 24 + 16 + 6);
    }

    #[test]
    fn bonus_slots_are_never_scored_directly() {
        let frames = frames_from(&[
            &[0, 0],
            &[0, 0],
            &[0, 0],
            &[0, 0],
            &[0, 0],
            &[0, 0],
            &[0, 0],
            &[0, 0],
            &[0, 0],
            &[10],
            &[10],
            &[7],
        ]);
        assert_eq!(frame_bonus(&frames, 9), 17);
        assert_eq!(total_score(&frames), 27);
    }

    #[test]
    fn lookahead_past_last_slot_is_none() {
        let frames = frames_from(&[]);
        assert!(next_frame(&frames, TOTAL_FRAMES - 1).is_none());
        assert_eq!(frame_bonus(&frames, TOTAL_FRAMES - 1), 0);
        assert_eq!(frame_score(&frames, TOTAL_FRAMES + 3), 0);
    }

    #[test]
    fn pending_strike_has_no_running_total() {
        let frames = frames_from(&[&[3, 4], &[10], &[5]]);
        let totals = running_totals(&frames);
        assert_eq!(totals[0], Some(7));
        assert_eq!(totals[1], None);
        assert_eq!(totals[2], None);
        assert!(!is_resolved(&frames, 1));
    }

    #[test]
    fn spare_resolves_after_one_more_ball() {
        let frames = frames_from(&[&[5, 5], &[2]]);
        assert!(is_resolved(&frames, 0));
        assert!(!is_resolved(&frames, 1));
        assert_eq!(running_totals(&frames)[0], Some(12));
    }
}
