//! Error types for the game
//!
//! Only two kinds of failure are fatal: building or writing the digit cache,
//! and writing the high score record. Everything else (an unreadable score
//! record, a malformed guess) is handled in place and never surfaces here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not encode the high score record")]
    Json(#[from] serde_json::Error),

    /// The digit cache exists but is not usable as-is
    #[error("invalid digit cache: {reason}")]
    InvalidDigitCache { reason: String },

    /// The π computation produced something other than the requested digits
    #[error("pi computation failed: {0}")]
    PiComputation(String),
}
