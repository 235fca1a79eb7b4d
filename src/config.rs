//! Game configuration and fixed constants

use std::path::PathBuf;

/// Digits the player has to reach to win outright
pub const MAX_DIGITS: usize = 1_000_000;

/// Wrong guesses allowed before the figure is fully drawn
pub const MAX_MISTAKES: u32 = 6;

/// Number of upcoming digits revealed when a game is lost
pub const PREVIEW_LEN: usize = 10;

pub const DIGITS_FILE: &str = "pi_digits.txt";
pub const SCORE_FILE: &str = "pi_high_score.json";
pub const LOG_FILE: &str = "pi_game.log";

/// Runtime configuration for a game session.
///
/// There are no command-line flags; the binary always runs with
/// [`GameConfig::default`]. Tests build smaller configs so that winning
/// does not require a million correct guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_digits: usize,
    pub max_mistakes: u32,
    pub digits_path: PathBuf,
    pub score_path: PathBuf,
    pub log_path: PathBuf,
}

impl GameConfig {
    /// Digits computed when the cache has to be (re)built.
    ///
    /// One past `max_digits` so the preview after the last guess still has
    /// something to show.
    pub fn generation_len(&self) -> usize {
        self.max_digits + 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_digits: MAX_DIGITS,
            max_mistakes: MAX_MISTAKES,
            digits_path: PathBuf::from(DIGITS_FILE),
            score_path: PathBuf::from(SCORE_FILE),
            log_path: PathBuf::from(LOG_FILE),
        }
    }
}
