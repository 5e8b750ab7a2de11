//! Game tests - whole-game scoring scenarios

use tui_bowling::core::{Game, InvalidRoll, RollError};
use tui_bowling::types::{GameStatus, PERFECT_SCORE};

fn play(rolls: &[i32]) -> Game {
    let mut game = Game::new();
    for (i, &pins) in rolls.iter().enumerate() {
        game.roll(pins)
            .unwrap_or_else(|e| panic!("roll #{} ({}) rejected: {}", i + 1, pins, e));
    }
    game
}

#[test]
fn test_gutter_game_ends_after_twentieth_ball() {
    let mut game = Game::new();
    for i in 0..20 {
        assert!(!game.is_finished(), "finished early at ball {}", i);
        game.roll(0).unwrap();
    }
    assert!(game.is_finished());
    assert_eq!(game.score(), 0);

    // Balls 21-24 are all refused.
    for _ in 20..24 {
        assert_eq!(game.roll(0), Err(RollError::GameOver { final_score: 0 }));
    }
    assert_eq!(game.roll_count(), 20);
}

#[test]
fn test_perfect_game() {
    let mut game = Game::new();
    for i in 0..12 {
        assert!(!game.is_finished(), "finished early at ball {}", i);
        game.roll(10).unwrap();
    }
    assert!(game.is_finished());
    assert_eq!(game.score(), PERFECT_SCORE);
    assert_eq!(game.current_frame(), 12);
    assert!(game.roll(10).unwrap_err().is_game_over());
}

#[test]
fn test_all_spares() {
    let game = play(&[5; 21]);
    assert!(game.is_finished());
    assert_eq!(game.score(), 150);
}

#[test]
fn test_strike_followed_by_gutters() {
    let mut rolls = vec![10];
    rolls.extend([0; 18]);
    let game = play(&rolls);

    assert!(game.is_finished());
    // Frame 1 earns no bonus since the next frame knocked down nothing.
    assert_eq!(game.frame_totals()[0], Some(10));
    assert_eq!(game.score(), 10);
}

#[test]
fn test_typical_game() {
    // X 7/ 9- X -8 8/ -6 X X X81
    let game = play(&[10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1]);
    assert!(game.is_finished());
    assert_eq!(game.score(), 167);
    assert_eq!(
        game.frame_totals(),
        [
            Some(20),
            Some(39),
            Some(48),
            Some(66),
            Some(74),
            Some(84),
            Some(90),
            Some(120),
            Some(148),
            Some(167)
        ]
    );
}

#[test]
fn test_running_score_is_a_lower_bound() {
    let rolls = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];
    let final_score = play(&rolls).score();

    let mut game = Game::new();
    let mut last = 0;
    for &pins in &rolls {
        game.roll(pins).unwrap();
        let score = game.score();
        assert!(score >= last, "score went down: {} -> {}", last, score);
        assert!(score <= final_score);
        last = score;
    }
}

#[test]
fn test_rolls_after_finish_leave_score_unchanged() {
    let mut game = play(&[3; 20]);
    let score = game.score();
    let before = game.clone();
    for pins in [-1, 0, 5, 10, 11] {
        assert_eq!(game.roll(pins), Err(RollError::GameOver { final_score: score }));
    }
    assert_eq!(game, before);
    assert_eq!(game.score(), 60);
}

#[test]
fn test_invalid_rolls_leave_game_unchanged() {
    let mut game = play(&[4]);
    let before = game.snapshot();

    assert_eq!(
        game.roll(-1),
        Err(RollError::InvalidRoll(InvalidRoll::OutOfRange { pins: -1 }))
    );
    assert_eq!(
        game.roll(11),
        Err(RollError::InvalidRoll(InvalidRoll::OutOfRange { pins: 11 }))
    );
    assert_eq!(
        game.roll(7),
        Err(RollError::InvalidRoll(InvalidRoll::ExceedsFrame {
            pins: 7,
            standing: 6
        }))
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_status_before_any_roll() {
    let game = Game::new();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_frame(), 1);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_tenth_frame_strike_then_open_bonus() {
    let mut rolls = vec![0; 18];
    rolls.extend([10, 4, 5]);
    let game = play(&rolls);
    assert!(game.is_finished());
    assert_eq!(game.score(), 19);
    assert_eq!(game.frame(11).unwrap().rolls(), &[4, 5]);
    assert!(game.frame(12).unwrap().rolls().is_empty());
}

#[test]
fn test_ninth_strike_reads_into_bonus_slot() {
    // Frame 9 strike, frame 10 strike: frame 9's second bonus ball is the 11th slot's first.
    let mut rolls = vec![0; 16];
    rolls.extend([10, 10, 6, 2]);
    let game = play(&rolls);
    assert!(game.is_finished());
    assert_eq!(game.frame_totals()[8], Some(26));
    assert_eq!(game.frame_totals()[9], Some(26 + 18));
    assert_eq!(game.score(), 44);
}
