//! π to arbitrary precision with the Chudnovsky series
//!
//! The series is summed exactly with binary splitting, then a single integer
//! square root and division turn the sums into `floor(π * 10^n)`. Every term
//! adds roughly 14 correct decimal digits.

use crate::errors::GameError;
use num_bigint::{BigInt, BigUint};

/// 640320^3 / 24
const C3_OVER_24: u64 = 10_939_058_860_032_000;

const DIGITS_PER_TERM: f64 = 14.181_647_462_725_477;

/// Extra digits computed and thrown away to absorb truncation error
const GUARD_DIGITS: usize = 10;

/// Sums terms `a..b` of the series as the triple (P, Q, T)
fn split(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if b - a == 1 {
        if a == 0 {
            return (BigInt::from(1u32), BigInt::from(1u32), BigInt::from(13_591_409u32));
        }
        let p = BigInt::from((6 * a - 5) * (2 * a - 1) * (6 * a - 1));
        let q = BigInt::from(a).pow(3) * C3_OVER_24;
        let mut t = &p * (BigInt::from(545_140_134u64) * a + 13_591_409u64);
        if a % 2 == 1 {
            t = -t;
        }
        return (p, q, t);
    }

    let m = (a + b) / 2;
    let (p_am, q_am, t_am) = split(a, m);
    let (p_mb, q_mb, t_mb) = split(m, b);

    let t = &t_mb * &p_am + &t_am * &q_mb;
    (p_am * p_mb, q_am * q_mb, t)
}

/// `floor(π * 10^precision)` as a decimal string (starts with `3`)
fn scaled_pi(precision: usize) -> Result<String, GameError> {
    let exponent = u32::try_from(precision)
        .map_err(|_| GameError::PiComputation(format!("{} digits is too many", precision)))?;
    let terms = (precision as f64 / DIGITS_PER_TERM) as u64 + 1;
    let (_, q, t) = split(0, terms);

    let one = BigUint::from(10u32).pow(exponent);
    let sqrt_c = (BigUint::from(10_005u32) * &one * &one).sqrt();

    let pi = (q * 426_880u32 * BigInt::from(sqrt_c)) / t;
    Ok(pi.to_string())
}

/// Exactly `count` decimal digits of π after the decimal point.
///
/// The result never includes the integer part, so `generate_pi_digits(5)`
/// is `"14159"`.
pub fn generate_pi_digits(count: usize) -> Result<String, GameError> {
    if count == 0 {
        return Ok(String::new());
    }

    let scaled = scaled_pi(count + GUARD_DIGITS)?;
    if !scaled.starts_with('3') || scaled.len() != count + GUARD_DIGITS + 1 {
        return Err(GameError::PiComputation(format!(
            "expected {} digits, got {}",
            count + GUARD_DIGITS + 1,
            scaled.len()
        )));
    }

    Ok(scaled[1..=count].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_100: &str = "1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

    #[test]
    fn test_first_hundred_digits() {
        assert_eq!(generate_pi_digits(100).unwrap(), FIRST_100);
    }

    #[test]
    fn test_short_counts() {
        assert_eq!(generate_pi_digits(0).unwrap(), "");
        assert_eq!(generate_pi_digits(1).unwrap(), "1");
        assert_eq!(generate_pi_digits(5).unwrap(), "14159");
    }

    #[test]
    fn test_longer_run_extends_shorter_one() {
        let long = generate_pi_digits(2000).unwrap();
        assert_eq!(long.len(), 2000);
        assert!(long.starts_with(FIRST_100));
        // Digits 762..768 are the Feynman point
        assert_eq!(&long[761..767], "999999");
    }
}
