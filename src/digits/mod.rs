//! The decimal expansion of π the player is tested against
//!
//! - [`DigitSequence`]: validated, immutable digits after the decimal point
//! - [`chudnovsky`]: arbitrary precision generation used to build the cache

pub mod chudnovsky;

use crate::errors::GameError;

pub use chudnovsky::generate_pi_digits;

/// Digits of π after the decimal point, without the leading `3.`.
///
/// Index 0 is the first decimal (`1`). Only ASCII `0`-`9` are ever stored, so
/// byte offsets and digit offsets are the same thing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence {
    digits: String,
}

impl DigitSequence {
    /// Wrap a digit string, rejecting anything that is not plain ASCII digits
    pub fn new(digits: impl Into<String>) -> Result<Self, GameError> {
        let digits = digits.into();
        if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(GameError::InvalidDigitCache {
                reason: format!("unexpected character {:?} at offset {}", c, index),
            });
        }
        Ok(DigitSequence { digits })
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Numeric value of the digit at `index`
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.digits.as_bytes().get(index).map(|b| b - b'0')
    }

    /// Digit at `index` as a display character
    pub fn digit_char(&self, index: usize) -> Option<char> {
        self.digits.as_bytes().get(index).map(|&b| b as char)
    }

    /// Up to `len` digits starting at `start`, clamped to the end of the sequence
    pub fn slice(&self, start: usize, len: usize) -> &str {
        let start = start.min(self.digits.len());
        let end = start.saturating_add(len).min(self.digits.len());
        &self.digits[start..end]
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }
}
