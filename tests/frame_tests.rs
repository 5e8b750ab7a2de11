//! Frame tests - the per-frame roll contract

use tui_bowling::core::{Frame, InvalidRoll};

#[test]
fn test_every_legal_open_frame() {
    for p1 in 0..10 {
        for p2 in 0..=(10 - p1) {
            let mut frame = Frame::new(1);
            assert!(frame.add_roll(p1).is_ok());
            assert!(frame.add_roll(p2).is_ok());
            assert_eq!(frame.score(), (p1 + p2) as u32);
            assert!(frame.is_finished());
        }
    }
}

#[test]
fn test_illegal_second_ball_leaves_frame_unchanged() {
    for p1 in 0..10 {
        for p2 in (11 - p1)..=10 {
            let mut frame = Frame::new(1);
            frame.add_roll(p1).unwrap();
            let before = frame.clone();
            assert!(matches!(
                frame.add_roll(p2),
                Err(InvalidRoll::ExceedsFrame { .. })
            ));
            assert_eq!(frame, before);
        }
    }
}

#[test]
fn test_out_of_range_balls() {
    let mut frame = Frame::new(1);
    for pins in [-100, -1, 11, 100, i32::MIN, i32::MAX] {
        assert_eq!(frame.add_roll(pins), Err(InvalidRoll::OutOfRange { pins }));
    }
    assert_eq!(frame.roll_count(), 0);
}

#[test]
fn test_strike_and_spare_flags() {
    let mut strike = Frame::new(1);
    strike.add_roll(10).unwrap();
    assert!(strike.is_strike());
    assert!(!strike.is_spare());
    assert_eq!(strike.first_roll(), 10);

    let mut spare = Frame::new(2);
    spare.add_roll(3).unwrap();
    assert!(!spare.is_finished());
    assert!(!spare.is_spare());
    spare.add_roll(7).unwrap();
    assert!(spare.is_spare());
    assert!(!spare.is_strike());
    assert_eq!(spare.first_roll(), 3);
}
