//! Game integration tests.

use tenpin::{FRAME_COUNT, Frame, Game, MAX_PINS, Roll, RollError};

fn roll_all(game: &mut Game, rolls: &[u8]) {
    for &pins in rolls {
        game.roll(pins).unwrap();
    }
}

#[test]
fn gutter_game_scores_zero() {
    let mut game = Game::new();
    roll_all(&mut game, &[0; 2 * FRAME_COUNT]);

    assert_eq!(game.score(), 0);
    assert_eq!(game.roll_count(), 20);
    assert!(game.is_complete());
}

#[test]
fn perfect_game_scores_300() {
    let mut game = Game::new();
    for _ in 0..12 {
        game.roll(MAX_PINS).unwrap();
    }

    assert_eq!(game.score(), 300);
    assert_eq!(game.roll_count(), 12);
    assert!(game.is_complete());

    // The tenth frame holds its strike plus exactly two bonus balls.
    assert_eq!(game.roll(MAX_PINS).unwrap_err(), RollError::TooManyRolls);
    assert_eq!(game.roll_count(), 12);
}

#[test]
fn all_open_frames_sum_plainly() {
    let mut game = Game::new();
    for _ in 0..FRAME_COUNT {
        roll_all(&mut game, &[5, 4]);
    }

    assert_eq!(game.score(), 90);
    assert!(game.is_complete());
}

#[test]
fn spare_bonus_counts_next_roll() {
    let mut game = Game::new();
    roll_all(&mut game, &[5, 5, 3]);

    // Frame one scores 10 + 3, frame two holds its own 3 so far.
    assert_eq!(game.score(), 16);

    roll_all(&mut game, &[0; 17]);
    assert_eq!(game.score(), 16);
    assert!(game.is_complete());
}

#[test]
fn strike_bonus_counts_next_two_rolls() {
    let mut game = Game::new();
    roll_all(&mut game, &[10, 3, 4]);

    assert_eq!(game.score(), 24);

    roll_all(&mut game, &[0; 16]);
    assert_eq!(game.score(), 24);
    assert!(game.is_complete());
}

#[test]
fn unresolved_bonuses_count_as_zero() {
    let mut game = Game::new();
    game.roll(10).unwrap();
    assert_eq!(game.score(), 10);

    game.roll(3).unwrap();
    // Strike bonus sees one of its two balls; the second is still pending.
    assert_eq!(game.score(), 16);

    game.roll(4).unwrap();
    assert_eq!(game.score(), 24);
}

#[test]
fn consecutive_strikes_chain_lookahead() {
    let mut game = Game::new();
    roll_all(&mut game, &[10, 10, 10]);

    // 10+10+10, 10+10+0, 10+0+0 so far.
    assert_eq!(game.score(), 60);
}

#[test]
fn overflow_roll_is_rejected_without_side_effects() {
    let mut game = Game::new();
    game.roll(6).unwrap();

    assert_eq!(game.roll(6).unwrap_err(), RollError::FramePinsExceeded);
    assert_eq!(game.current_frame().rolls(), &[Roll::new(6)]);
    assert_eq!(game.current_frame_index(), 0);
    assert_eq!(game.roll_count(), 1);
    assert_eq!(game.score(), 6);

    // The frame still accepts a legal second ball.
    game.roll(4).unwrap();
    assert!(game.frames()[0].is_spare());
}

#[test]
fn tenth_frame_double_strike_bonus_scores_30() {
    let mut game = Game::new();
    roll_all(&mut game, &[0; 18]);
    roll_all(&mut game, &[10, 10, 10]);

    assert_eq!(game.score(), 30);
    assert!(game.is_complete());
    assert_eq!(game.frames()[9].extra_roll(), Some(Roll::new(10)));
}

#[test]
fn tenth_frame_spare_takes_a_single_bonus_ball() {
    let mut game = Game::new();
    roll_all(&mut game, &[0; 18]);
    roll_all(&mut game, &[5, 5, 7]);

    assert_eq!(game.score(), 17);
    assert_eq!(game.roll(1).unwrap_err(), RollError::TooManyRolls);
}

#[test]
fn open_tenth_frame_rejects_bonus_roll() {
    let mut game = Game::new();
    roll_all(&mut game, &[0; 18]);
    roll_all(&mut game, &[3, 4]);

    assert_eq!(game.roll(2).unwrap_err(), RollError::ExtraRollOnOpenFrame);
    assert_eq!(game.score(), 7);
    assert!(game.is_complete());
}

#[test]
fn strike_advances_to_the_next_frame_immediately() {
    let mut game = Game::new();
    assert_eq!(game.current_frame_index(), 0);

    game.roll(10).unwrap();
    assert_eq!(game.current_frame_index(), 1);

    game.roll(3).unwrap();
    assert_eq!(game.current_frame_index(), 1);
    game.roll(4).unwrap();
    assert_eq!(game.current_frame_index(), 2);
}

#[test]
fn bonus_rolls_stay_in_the_tenth_frame() {
    let mut game = Game::new();
    roll_all(&mut game, &[0; 18]);
    assert_eq!(game.current_frame_index(), 9);

    game.roll(10).unwrap();
    assert_eq!(game.current_frame_index(), 9);
    game.roll(10).unwrap();
    assert_eq!(game.current_frame_index(), 9);
    game.roll(10).unwrap();
    assert_eq!(game.current_frame_index(), 9);
}

#[test]
fn score_is_idempotent() {
    let mut game = Game::new();
    roll_all(&mut game, &[10, 5, 5, 3]);

    assert_eq!(game.score(), game.score());
}

#[test]
fn restart_then_replay_reproduces_the_score() {
    let rolls = [10, 5, 5, 3, 4, 10, 2, 6, 0, 0, 9, 1, 7, 2, 10, 10, 10, 8];
    let mut game = Game::new();
    roll_all(&mut game, &rolls);
    let first = game.score();
    assert!(game.is_complete());

    game.restart();
    assert_eq!(game.score(), 0);
    assert_eq!(game.roll_count(), 0);
    assert_eq!(game.current_frame_index(), 0);
    assert!(!game.is_complete());

    roll_all(&mut game, &rolls);
    assert_eq!(game.score(), first);
}

#[test]
fn frame_rendering_tokens() {
    let mut frame = Frame::normal();
    assert_eq!(frame.to_string(), "");

    frame.add_roll(5).unwrap();
    assert_eq!(frame.to_string(), "5 | ");

    frame.add_roll(5).unwrap();
    assert_eq!(frame.to_string(), "5 | /");

    let mut open = Frame::normal();
    open.add_roll(5).unwrap();
    open.add_roll(3).unwrap();
    assert_eq!(open.to_string(), "5 | 3");

    let mut strike = Frame::normal();
    strike.add_roll(10).unwrap();
    assert_eq!(strike.to_string(), "X");

    let mut tenth = Frame::tenth();
    tenth.add_roll(10).unwrap();
    assert_eq!(tenth.to_string(), "X");
}

#[test]
fn frame_detects_strike_and_spare() {
    let mut frame = Frame::normal();
    assert!(!frame.is_strike());
    assert!(!frame.is_spare());
    assert!(!frame.is_complete());

    frame.add_roll(10).unwrap();
    assert!(frame.is_strike());
    assert!(!frame.is_spare());
    assert!(frame.is_complete());

    let mut spare = Frame::tenth();
    spare.add_roll(7).unwrap();
    spare.add_roll(3).unwrap();
    assert!(spare.is_spare());
    assert!(!spare.is_complete());
    spare.add_roll(4).unwrap();
    assert!(spare.is_complete());
    assert_eq!(spare.score(None, None), 14);
}
