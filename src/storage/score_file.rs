//! High score record stored as JSON

use super::ScoreRepository;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the record: `{"high_score": N}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HighScoreRecord {
    pub high_score: u64,
}

/// Best score kept in a JSON file at `path`
#[derive(Debug, Clone)]
pub struct ScoreFile {
    path: PathBuf,
}

impl ScoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScoreFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_record(&self) -> Result<HighScoreRecord, GameError> {
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

impl ScoreRepository for ScoreFile {
    fn load(&self) -> u64 {
        match self.read_record() {
            Ok(record) => record.high_score,
            Err(e) => {
                log::debug!("No usable high score in {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, score: u64) -> Result<(), GameError> {
        let json = serde_json::to_string(&HighScoreRecord { high_score: score })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
