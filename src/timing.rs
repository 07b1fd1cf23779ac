//! Mean wall-clock duration of a callable over a fixed number of rounds.
//!
//! Rounds are measured with [`std::time::Instant`], which is monotonic and not
//! affected by system clock adjustments. There is no warm-up round.

use std::time::Instant;

use log::debug;

use crate::error::{validation_error, Result};

/// Per-round samples and their arithmetic mean, in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Timing {
    pub samples_ms: Vec<f64>,
    pub mean_ms: f64,
}

impl Timing {
    fn from_samples(samples_ms: Vec<f64>) -> Self {
        let mean_ms = samples_ms.iter().sum::<f64>() / samples_ms.len() as f64;
        Self {
            samples_ms,
            mean_ms,
        }
    }

    pub fn rounds(&self) -> usize {
        self.samples_ms.len()
    }

    pub fn min_ms(&self) -> f64 {
        self.samples_ms.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max_ms(&self) -> f64 {
        self.samples_ms.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Runs `f` `rounds` times and returns the mean duration.
///
/// # Errors
///
/// `ValidationError` if `rounds` is zero.
pub fn time_rounds<F>(rounds: usize, mut f: F) -> Result<Timing>
where
    F: FnMut(),
{
    try_time_rounds(rounds, || {
        f();
        Ok(())
    })
}

/// Like [`time_rounds`] for a fallible callable; the first error aborts the
/// measurement and is returned as-is.
pub fn try_time_rounds<F, T>(rounds: usize, mut f: F) -> Result<Timing>
where
    F: FnMut() -> Result<T>,
{
    if rounds == 0 {
        return Err(validation_error("at least one timing round is required"));
    }

    let mut samples_ms = Vec::with_capacity(rounds);

    for round in 0..rounds {
        let start = Instant::now();
        let output = f();
        let elapsed = start.elapsed();

        output?;

        let ms = elapsed.as_secs_f64() * 1_000.0;
        debug!("round {}/{rounds}: {ms:.3} ms", round + 1);
        samples_ms.push(ms);
    }

    Ok(Timing::from_samples(samples_ms))
}

/// `scalar_ms / simd_ms`, or `None` when the SIMD time is not positive.
pub fn speedup(scalar_ms: f64, simd_ms: f64) -> Option<f64> {
    (simd_ms > 0.0).then(|| scalar_ms / simd_ms)
}
