//! Single play-through of the memorization game

use crate::config::{GameConfig, PREVIEW_LEN};
use crate::digits::DigitSequence;
use crate::errors::GameError;
use crate::storage::ScoreRepository;
use std::rc::Rc;

/// Where a play-through stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// Reached the maximum number of digits
    Won,
    /// Ran out of lives
    Lost,
}

/// Result of submitting one line of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not a single digit; nothing changed
    Ignored,
    Correct { new_record: bool },
    Wrong,
    /// The game had already ended
    Finished,
}

/// Mutable part of a play-through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameState {
    /// Correct digits so far, and the index of the next digit to enter
    pub position: usize,
    pub mistakes: u32,
    /// Best position ever reached, including previous sessions
    pub high_score: u64,
}

/// Parse one line of input as a guess.
///
/// Surrounding whitespace is ignored; what remains must be exactly one
/// ASCII digit.
pub fn parse_guess(input: &str) -> Option<u8> {
    match input.trim().as_bytes() {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    digits: Rc<DigitSequence>,
    state: GameState,
    status: GameStatus,
    max_digits: usize,
    max_mistakes: u32,
}

impl Game {
    /// Start a fresh play-through seeded with a previous best score
    pub fn new(digits: Rc<DigitSequence>, config: &GameConfig, high_score: u64) -> Self {
        // A short sequence caps the game rather than running off its end
        let max_digits = config.max_digits.min(digits.len());
        let mut game = Game {
            digits,
            state: GameState {
                position: 0,
                mistakes: 0,
                high_score,
            },
            status: GameStatus::Playing,
            max_digits,
            max_mistakes: config.max_mistakes,
        };
        game.update_status();
        game
    }

    /// Submit one line of input.
    ///
    /// A new best score is written to `scores` before this returns. A failed
    /// write is returned as an error; the in-memory state has already moved on.
    pub fn submit<S: ScoreRepository + ?Sized>(
        &mut self,
        input: &str,
        scores: &mut S,
    ) -> Result<GuessOutcome, GameError> {
        if self.status != GameStatus::Playing {
            return Ok(GuessOutcome::Finished);
        }
        let Some(guess) = parse_guess(input) else {
            return Ok(GuessOutcome::Ignored);
        };

        let outcome = if self.digits.digit(self.state.position) == Some(guess) {
            self.state.position += 1;
            let reached = self.state.position as u64;
            let new_record = reached > self.state.high_score;
            if new_record {
                self.state.high_score = reached;
                scores.save(reached)?;
                log::debug!("New high score: {}", reached);
            }
            GuessOutcome::Correct { new_record }
        } else {
            self.state.mistakes += 1;
            GuessOutcome::Wrong
        };

        self.update_status();
        Ok(outcome)
    }

    fn update_status(&mut self) {
        if self.state.position >= self.max_digits {
            self.status = GameStatus::Won;
        } else if self.state.mistakes >= self.max_mistakes {
            self.status = GameStatus::Lost;
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn position(&self) -> usize {
        self.state.position
    }

    pub fn mistakes(&self) -> u32 {
        self.state.mistakes
    }

    pub fn high_score(&self) -> u64 {
        self.state.high_score
    }

    pub fn max_mistakes(&self) -> u32 {
        self.max_mistakes
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub fn lives(&self) -> u32 {
        self.max_mistakes.saturating_sub(self.state.mistakes)
    }

    pub fn digits(&self) -> &DigitSequence {
        &self.digits
    }

    /// The digits the player failed to continue from
    pub fn preview(&self) -> &str {
        self.digits.slice(self.state.position, PREVIEW_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryScores;

    fn game(digits: &str, max_digits: usize, high_score: u64) -> Game {
        let config = GameConfig {
            max_digits,
            ..GameConfig::default()
        };
        let digits = Rc::new(DigitSequence::new(digits).unwrap());
        Game::new(digits, &config, high_score)
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("5"), Some(5));
        assert_eq!(parse_guess(" 0\n"), Some(0));
        assert_eq!(parse_guess(""), None);
        assert_eq!(parse_guess(" "), None);
        assert_eq!(parse_guess("12"), None);
        assert_eq!(parse_guess("a"), None);
        assert_eq!(parse_guess("٣"), None);
    }

    #[test]
    fn test_ignored_input_changes_nothing() {
        let mut g = game("1415926535", 10, 0);
        let mut scores = MemoryScores::new();
        for input in ["", "12", "a", " "] {
            assert_eq!(g.submit(input, &mut scores).unwrap(), GuessOutcome::Ignored);
        }
        assert_eq!(g.position(), 0);
        assert_eq!(g.mistakes(), 0);
        assert!(scores.saves.is_empty());
    }

    #[test]
    fn test_wrong_guess_costs_a_life() {
        let mut g = game("3", 1, 0);
        let mut scores = MemoryScores::new();
        assert_eq!(g.submit("5", &mut scores).unwrap(), GuessOutcome::Wrong);
        assert_eq!(g.mistakes(), 1);
        assert_eq!(g.lives(), 5);
        assert_eq!(g.position(), 0);
    }

    #[test]
    fn test_record_only_saved_when_beaten() {
        let mut g = game("1415926535", 10, 2);
        let mut scores = MemoryScores::with_score(2);
        assert_eq!(
            g.submit("1", &mut scores).unwrap(),
            GuessOutcome::Correct { new_record: false }
        );
        assert_eq!(
            g.submit("4", &mut scores).unwrap(),
            GuessOutcome::Correct { new_record: false }
        );
        assert_eq!(
            g.submit("1", &mut scores).unwrap(),
            GuessOutcome::Correct { new_record: true }
        );
        assert_eq!(g.high_score(), 3);
        assert_eq!(scores.saves, vec![3]);
    }

    #[test]
    fn test_zero_max_digits_is_won_immediately() {
        let mut g = game("14159", 0, 0);
        assert_eq!(g.status(), GameStatus::Won);
        let mut scores = MemoryScores::new();
        assert_eq!(g.submit("1", &mut scores).unwrap(), GuessOutcome::Finished);
    }

    #[test]
    fn test_short_sequence_caps_the_game() {
        let g = game("141", 1_000_000, 0);
        assert_eq!(g.max_digits(), 3);
    }

    #[test]
    fn test_preview_clamps_at_end() {
        let mut g = game("14159", 5, 0);
        let mut scores = MemoryScores::new();
        g.submit("1", &mut scores).unwrap();
        g.submit("4", &mut scores).unwrap();
        assert_eq!(g.preview(), "159");
    }
}
