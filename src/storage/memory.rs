//! In-memory repositories

use super::{DigitRepository, ScoreRepository};
use crate::digits::DigitSequence;
use crate::errors::GameError;

/// Serves a fixed digit sequence
#[derive(Debug, Clone)]
pub struct MemoryDigits {
    digits: DigitSequence,
}

impl MemoryDigits {
    pub fn new(digits: DigitSequence) -> Self {
        MemoryDigits { digits }
    }
}

impl DigitRepository for MemoryDigits {
    fn load_or_generate(&self) -> Result<DigitSequence, GameError> {
        Ok(self.digits.clone())
    }
}

/// Keeps the best score in memory and remembers every save
#[derive(Debug, Clone, Default)]
pub struct MemoryScores {
    stored: Option<u64>,
    pub saves: Vec<u64>,
}

impl MemoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing record
    pub fn with_score(score: u64) -> Self {
        MemoryScores {
            stored: Some(score),
            saves: Vec::new(),
        }
    }
}

impl ScoreRepository for MemoryScores {
    fn load(&self) -> u64 {
        self.stored.unwrap_or(0)
    }

    fn save(&mut self, score: u64) -> Result<(), GameError> {
        self.stored = Some(score);
        self.saves.push(score);
        Ok(())
    }
}
