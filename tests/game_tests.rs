// Integration tests for the game rules and replay sessions

use pi_hangman::config::GameConfig;
use pi_hangman::digits::DigitSequence;
use pi_hangman::game::{Game, GameStatus, GuessOutcome, Session};
use pi_hangman::storage::{MemoryScores, ScoreRepository};
use std::rc::Rc;

const PI_50: &str = "14159265358979323846264338327950288419716939937510";

fn config(max_digits: usize) -> GameConfig {
    GameConfig {
        max_digits,
        ..GameConfig::default()
    }
}

fn digits() -> DigitSequence {
    DigitSequence::new(PI_50).expect("valid digits")
}

#[test]
fn test_lost_scenario_from_fresh_start() {
    let mut session = Session::new(digits(), MemoryScores::new(), config(50));

    assert_eq!(
        session.submit("1").unwrap(),
        GuessOutcome::Correct { new_record: true }
    );
    assert_eq!(session.game().position(), 1);
    assert_eq!(session.high_score(), 1);
    assert_eq!(session.scores().saves, vec![1]);

    assert_eq!(
        session.submit("4").unwrap(),
        GuessOutcome::Correct { new_record: true }
    );
    assert_eq!(session.high_score(), 2);

    // Expected digit is 1
    assert_eq!(session.submit("2").unwrap(), GuessOutcome::Wrong);
    assert_eq!(session.game().mistakes(), 1);
    assert_eq!(session.game().position(), 2);

    for _ in 0..5 {
        assert_eq!(session.game().status(), GameStatus::Playing);
        assert_eq!(session.submit("2").unwrap(), GuessOutcome::Wrong);
    }

    let game = session.game();
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.mistakes(), 6);
    assert_eq!(game.lives(), 0);
    assert_eq!(game.position(), 2);
    assert_eq!(game.high_score(), 2);
    assert_eq!(game.preview(), "1592653589");
    assert_eq!(session.scores().saves, vec![1, 2]);
    assert_eq!(session.scores().load(), 2);
}

#[test]
fn test_input_after_game_over_is_rejected() {
    let mut session = Session::new(digits(), MemoryScores::new(), config(50));
    for _ in 0..6 {
        session.submit("0").unwrap();
    }
    assert_eq!(session.game().status(), GameStatus::Lost);
    assert_eq!(session.submit("1").unwrap(), GuessOutcome::Finished);
    assert_eq!(session.game().position(), 0);
}

#[test]
fn test_won_regardless_of_lives() {
    let mut session = Session::new(digits(), MemoryScores::new(), config(5));
    session.submit("0").unwrap();
    session.submit("0").unwrap();
    for guess in ["1", "4", "1", "5"] {
        session.submit(guess).unwrap();
        assert_eq!(session.game().status(), GameStatus::Playing);
    }
    session.submit("9").unwrap();

    assert_eq!(session.game().status(), GameStatus::Won);
    assert_eq!(session.game().position(), 5);
    assert_eq!(session.game().lives(), 4);
}

#[test]
fn test_high_score_tracks_best_position() {
    let digits = Rc::new(digits());
    let mut scores = MemoryScores::with_score(3);
    let mut game = Game::new(Rc::clone(&digits), &config(50), scores.load());

    let guesses = ["1", "4", "x", "1", "7", "5", "9", "12", "2"];
    let mut previous = game.high_score();
    let mut best = 3;
    for guess in guesses {
        game.submit(guess, &mut scores).unwrap();
        best = best.max(game.position() as u64);
        assert!(game.high_score() >= previous);
        assert_eq!(game.high_score(), best);
        previous = game.high_score();
    }

    assert_eq!(game.position(), 6);
    assert_eq!(game.mistakes(), 1);
    assert_eq!(scores.saves, vec![4, 5, 6]);
}

#[test]
fn test_replay_resets_game_but_keeps_high_score() {
    let mut session = Session::new(digits(), MemoryScores::with_score(1), config(50));
    assert_eq!(session.high_score(), 1);

    for guess in ["1", "4", "1"] {
        session.submit(guess).unwrap();
    }
    for _ in 0..6 {
        session.submit("0").unwrap();
    }
    assert_eq!(session.game().status(), GameStatus::Lost);

    session.restart();
    let game = session.game();
    assert_eq!(game.status(), GameStatus::Playing);
    assert_eq!(game.position(), 0);
    assert_eq!(game.mistakes(), 0);
    assert_eq!(game.high_score(), 3);
    assert_eq!(session.games_played(), 2);

    // Matching the old record is not a new one
    for guess in ["1", "4", "1"] {
        assert_eq!(
            session.submit(guess).unwrap(),
            GuessOutcome::Correct { new_record: false }
        );
    }
    assert_eq!(
        session.submit("5").unwrap(),
        GuessOutcome::Correct { new_record: true }
    );
    assert_eq!(session.scores().saves, vec![2, 3, 4]);
}
