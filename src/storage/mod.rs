//! Persistence behind two narrow interfaces
//!
//! The game never touches the filesystem directly. It is handed a
//! [`DigitRepository`] and a [`ScoreRepository`]:
//!
//! - [`digit_cache`]: digits cached in a plain text file, generated on first use
//! - [`score_file`]: the best score as a small JSON record
//! - [`memory`]: in-memory stand-ins for both, used by tests
//!
//! Only one process is expected to touch either file; the last write wins.

pub mod digit_cache;
pub mod memory;
pub mod score_file;

use crate::digits::DigitSequence;
use crate::errors::GameError;

pub use digit_cache::DigitCache;
pub use memory::{MemoryDigits, MemoryScores};
pub use score_file::ScoreFile;

/// Source of the π digits
pub trait DigitRepository {
    /// Load the cached digits, computing and caching them first if needed.
    ///
    /// Failures here are fatal to the program.
    fn load_or_generate(&self) -> Result<DigitSequence, GameError>;
}

/// Storage for the single best score
pub trait ScoreRepository {
    /// The stored best score, or 0 when there is no usable record
    fn load(&self) -> u64;

    /// Overwrite the stored best score
    fn save(&mut self, score: u64) -> Result<(), GameError>;
}
