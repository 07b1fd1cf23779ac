//! Benchmark inputs: a dividend and a divisor sequence of equal, even length.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{check_len, validation_error, Result};
use crate::utils::AlignedBuf;
use crate::{DIVIDEND_RANGE, DIVISOR_RANGE, MIN_DIVISOR};

/// Dividends and divisors, both in 16-byte aligned buffers.
#[derive(Debug, Clone)]
pub struct Inputs {
    pub dividends: AlignedBuf,
    pub divisors: AlignedBuf,
}

impl Inputs {
    /// Draws `len` dividends from [5, 500] and `len` divisors from [1, 100]
    /// using a `StdRng` seeded with `seed`.
    ///
    /// The same seed always yields the same sequences.
    pub fn random(len: usize, seed: u64) -> Result<Self> {
        check_len(len)?;

        let mut dividends = AlignedBuf::zeroed(len)?;
        let mut divisors = AlignedBuf::zeroed(len)?;

        let mut rng = StdRng::seed_from_u64(seed);
        for (dividend, divisor) in dividends.iter_mut().zip(divisors.iter_mut()) {
            *dividend = rng.random_range(DIVIDEND_RANGE);
            *divisor = rng.random_range(DIVISOR_RANGE);
        }

        debug!("generated {len} random input pairs (seed {seed})");

        Ok(Self {
            dividends,
            divisors,
        })
    }

    /// Copies caller-supplied sequences into aligned buffers.
    ///
    /// # Errors
    ///
    /// `ValidationError` when the lengths differ, are odd or zero, or when a
    /// divisor is below 1 (or NaN).
    pub fn from_slices(dividends: &[f64], divisors: &[f64]) -> Result<Self> {
        if dividends.len() != divisors.len() {
            return Err(validation_error(format!(
                "dividends and divisors differ in length ({} vs {})",
                dividends.len(),
                divisors.len()
            )));
        }

        check_len(dividends.len())?;
        check_divisors(divisors)?;

        Ok(Self {
            dividends: AlignedBuf::from_slice(dividends)?,
            divisors: AlignedBuf::from_slice(divisors)?,
        })
    }

    pub fn len(&self) -> usize {
        self.dividends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dividends.is_empty()
    }
}

/// Rejects any divisor that is not `>= 1.0`.
pub fn check_divisors(divisors: &[f64]) -> Result<()> {
    match divisors.iter().position(|&d| d.is_nan() || d < MIN_DIVISOR) {
        Some(index) => Err(validation_error(format!(
            "divisor at index {index} is {}, expected >= {MIN_DIVISOR}",
            divisors[index]
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimddivError;

    #[test]
    fn test_random_ranges() {
        let inputs = Inputs::random(10_000, 42).unwrap();
        assert_eq!(inputs.len(), 10_000);
        assert!(inputs.dividends.iter().all(|&x| (5.0..=500.0).contains(&x)));
        assert!(inputs.divisors.iter().all(|&x| (1.0..=100.0).contains(&x)));
        assert!(check_divisors(&inputs.divisors).is_ok());
    }

    #[test]
    fn test_random_is_reproducible() {
        let first = Inputs::random(64, 7).unwrap();
        let second = Inputs::random(64, 7).unwrap();
        let other = Inputs::random(64, 8).unwrap();

        assert_eq!(first.dividends, second.dividends);
        assert_eq!(first.divisors, second.divisors);
        assert_ne!(first.dividends, other.dividends);
    }

    #[test]
    fn test_random_rejects_bad_lengths() {
        assert!(Inputs::random(0, 42).is_err());
        assert!(Inputs::random(5, 42).is_err());
    }

    #[test]
    fn test_from_slices() {
        let inputs = Inputs::from_slices(&[8.0, 16.0], &[2.0, 4.0]).unwrap();
        assert_eq!(&*inputs.dividends, &[8.0, 16.0]);
        assert_eq!(&*inputs.divisors, &[2.0, 4.0]);
    }

    #[test]
    fn test_from_slices_rejects_small_divisors() {
        let err = Inputs::from_slices(&[1.0, 2.0], &[1.0, 0.5]).unwrap_err();
        match err {
            SimddivError::ValidationError { message } => assert!(message.contains("index 1")),
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(Inputs::from_slices(&[1.0, 2.0], &[f64::NAN, 2.0]).is_err());
        assert!(Inputs::from_slices(&[1.0, 2.0], &[0.0, 2.0]).is_err());
    }

    #[test]
    fn test_from_slices_rejects_mismatched_lengths() {
        assert!(Inputs::from_slices(&[1.0, 2.0], &[1.0, 2.0, 3.0, 4.0]).is_err());
        assert!(Inputs::from_slices(&[1.0], &[1.0]).is_err());
    }
}
