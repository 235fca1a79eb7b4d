//! Digit cache backed by a plain text file

use super::DigitRepository;
use crate::digits::{generate_pi_digits, DigitSequence};
use crate::errors::GameError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// π digits cached at `path`.
///
/// The file holds nothing but ASCII digits (no `3.` prefix). A cache that is
/// missing, shorter than `min_len`, or contains anything else is rebuilt.
#[derive(Debug, Clone)]
pub struct DigitCache {
    path: PathBuf,
    min_len: usize,
    generate_len: usize,
}

impl DigitCache {
    /// `min_len` is the shortest acceptable cache; `generate_len` is how
    /// many digits to compute when the cache has to be rebuilt
    pub fn new(path: impl Into<PathBuf>, min_len: usize, generate_len: usize) -> Self {
        DigitCache {
            path: path.into(),
            min_len,
            generate_len: generate_len.max(min_len),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a cache file is present (valid or not)
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn read_cached(&self) -> Result<Option<DigitSequence>, GameError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let digits = match DigitSequence::new(contents.trim()) {
            Ok(digits) => digits,
            Err(e) => {
                log::warn!("Ignoring digit cache {}: {}", self.path.display(), e);
                return Ok(None);
            }
        };

        if digits.len() < self.min_len {
            log::warn!(
                "Ignoring digit cache {}: holds {} digits, need {}",
                self.path.display(),
                digits.len(),
                self.min_len
            );
            return Ok(None);
        }

        Ok(Some(digits))
    }

    fn generate(&self) -> Result<DigitSequence, GameError> {
        log::info!("Generating {} digits of pi", self.generate_len);
        let started = Instant::now();
        let digits = generate_pi_digits(self.generate_len)?;
        log::info!("Generated digits in {:.1?}", started.elapsed());

        fs::write(&self.path, &digits)?;
        log::info!("Cached digits to {}", self.path.display());

        DigitSequence::new(digits)
    }
}

impl DigitRepository for DigitCache {
    fn load_or_generate(&self) -> Result<DigitSequence, GameError> {
        if let Some(digits) = self.read_cached()? {
            log::info!(
                "Loaded {} cached digits from {}",
                digits.len(),
                self.path.display()
            );
            return Ok(digits);
        }
        self.generate()
    }
}
