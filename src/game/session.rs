//! Replaying games within one run of the program

use super::engine::{Game, GuessOutcome};
use crate::config::GameConfig;
use crate::digits::DigitSequence;
use crate::errors::GameError;
use crate::storage::ScoreRepository;
use std::rc::Rc;

/// Whether the answer to "play again?" is yes.
///
/// Only a lone `y` or `Y` counts; the answer is not trimmed.
pub fn wants_replay(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y")
}

/// A run of games sharing one digit sequence and one high score.
///
/// The high score is read from the repository once, when the session starts,
/// and afterwards carried from game to game in memory.
pub struct Session<S: ScoreRepository> {
    digits: Rc<DigitSequence>,
    scores: S,
    config: GameConfig,
    game: Game,
    games_played: u32,
}

impl<S: ScoreRepository> Session<S> {
    pub fn new(digits: DigitSequence, scores: S, config: GameConfig) -> Self {
        let digits = Rc::new(digits);
        let high_score = scores.load();
        log::info!("Starting session, high score {}", high_score);
        let game = Game::new(Rc::clone(&digits), &config, high_score);
        Session {
            digits,
            scores,
            config,
            game,
            games_played: 1,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn submit(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        self.game.submit(input, &mut self.scores)
    }

    /// Start a new game, keeping the high score reached so far
    pub fn restart(&mut self) {
        let high_score = self.game.high_score();
        self.game = Game::new(Rc::clone(&self.digits), &self.config, high_score);
        self.games_played += 1;
        log::info!("Starting game {}", self.games_played);
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn high_score(&self) -> u64 {
        self.game.high_score()
    }

    pub fn scores(&self) -> &S {
        &self.scores
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_replay() {
        assert!(wants_replay("y"));
        assert!(wants_replay("Y"));
        assert!(!wants_replay("n"));
        assert!(!wants_replay(""));
        assert!(!wants_replay("yes"));
        assert!(!wants_replay(" y"));
    }
}
