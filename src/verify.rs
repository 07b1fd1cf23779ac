//! Agreement check between the scalar and the packed kernel outputs.

use std::fmt;

use crate::{TOLERANCE, VERIFY_PREFIX};

/// First index at which the two outputs disagree beyond [`TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    pub index: usize,
    pub scalar: f64,
    pub simd: f64,
    pub diff: f64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Verification FAILED at index {}: scalar = {:.12}, simd = {:.12}, |diff| = {:e}",
            self.index, self.scalar, self.simd, self.diff
        )
    }
}

/// Result of comparing the leading `checked` outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    pub checked: usize,
    pub max_abs_diff: f64,
    pub first_mismatch: Option<Mismatch>,
}

impl Verification {
    pub fn passed(&self) -> bool {
        self.first_mismatch.is_none()
    }
}

/// Compares `scalar` and `simd` over the first `min(1000, len)` indices.
pub fn verify(scalar: &[f64], simd: &[f64]) -> Verification {
    verify_prefix(scalar, simd, VERIFY_PREFIX)
}

/// Compares `scalar` and `simd` over the first `min(prefix, len)` indices,
/// `len` being the shorter of the two.
///
/// A NaN on either side counts as a mismatch.
pub fn verify_prefix(scalar: &[f64], simd: &[f64], prefix: usize) -> Verification {
    let checked = prefix.min(scalar.len()).min(simd.len());

    let mut max_abs_diff = 0.0f64;
    let mut first_mismatch = None;

    for (index, (&x, &y)) in scalar.iter().zip(simd.iter()).take(checked).enumerate() {
        let diff = (x - y).abs();

        if diff > max_abs_diff {
            max_abs_diff = diff;
        }

        if first_mismatch.is_none() && (diff.is_nan() || diff > TOLERANCE) {
            first_mismatch = Some(Mismatch {
                index,
                scalar: x,
                simd: y,
                diff,
            });
        }
    }

    Verification {
        checked,
        max_abs_diff,
        first_mismatch,
    }
}
