//! Scalar and packed division kernels over `f64` slices.
//!
//! Every kernel takes two inputs and an output of one shared, even, non-zero
//! length and writes `out[i]` from `a[i]` and `b[i]` only. Callers guarantee
//! `b[i] >= 1`, so no kernel has to deal with zero or non-finite divisors.

use std::hint::black_box;
use std::ptr;

use crate::error::{check_operands, Result};
use crate::simd::{Alignment, F64x2, SimdDiv, SimdLoad, SimdStore, LANE_COUNT};
use crate::utils::AlignedBuf;

/// `out[i] = a[i] / b[i]`, one element per step.
///
/// Each quotient is stored with a volatile write. The optimizer must emit every
/// store individually and in order, so the loop cannot be auto-vectorized and
/// the division stays a scalar `DIVSD`.
#[inline(never)]
pub fn scalar_div(a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()> {
    check_operands(a, b, out)?;

    for (slot, (&x, &y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
        // SAFETY: `slot` is a valid, exclusive reference into `out`.
        unsafe { ptr::write_volatile(slot, x / y) };
    }

    Ok(())
}

/// Repeats a full pass `iterations` times, three chained divisions per element:
/// `r = a / b; r = r / (b + 1); r = r / (a + 2)`.
#[inline(never)]
pub fn scalar_div_intensive(
    a: &[f64],
    b: &[f64],
    out: &mut [f64],
    iterations: usize,
) -> Result<()> {
    check_operands(a, b, out)?;

    for _ in 0..iterations {
        // Opaque inputs per pass, so passes cannot be folded into one.
        let (a, b) = (black_box(a), black_box(b));

        for (slot, (&x, &y)) in out.iter_mut().zip(a.iter().zip(b.iter())) {
            let mut r = x / y;
            r /= y + 1.0;
            r /= x + 2.0;
            // SAFETY: as in `scalar_div`.
            unsafe { ptr::write_volatile(slot, r) };
        }
    }

    Ok(())
}

/// `out[i] = a[i] / b[i]`, two lanes per packed divide.
#[inline(never)]
pub fn simd_div(a: &[f64], b: &[f64], out: &mut [f64]) -> Result<()> {
    check_operands(a, b, out)?;

    if all_aligned(a, b, out) {
        simd_div_pass::<true>(a, b, out);
    } else {
        simd_div_pass::<false>(a, b, out);
    }

    Ok(())
}

/// Packed counterpart of [`scalar_div_intensive`]: `(b + 1)` and `(a + 2)` are
/// formed with packed adds against splatted constants.
#[inline(never)]
pub fn simd_div_intensive(
    a: &[f64],
    b: &[f64],
    out: &mut [f64],
    iterations: usize,
) -> Result<()> {
    check_operands(a, b, out)?;

    let aligned = all_aligned(a, b, out);

    for _ in 0..iterations {
        let (a, b) = (black_box(a), black_box(b));

        if aligned {
            simd_div_intensive_pass::<true>(a, b, out);
        } else {
            simd_div_intensive_pass::<false>(a, b, out);
        }
    }

    Ok(())
}

#[inline(always)]
fn all_aligned(a: &[f64], b: &[f64], out: &[f64]) -> bool {
    F64x2::is_aligned(a.as_ptr()) && F64x2::is_aligned(b.as_ptr()) && F64x2::is_aligned(out.as_ptr())
}

#[inline(always)]
unsafe fn load<const ALIGNED: bool>(ptr: *const f64) -> F64x2 {
    if ALIGNED {
        unsafe { F64x2::load_aligned(ptr) }
    } else {
        unsafe { F64x2::load_unaligned(ptr) }
    }
}

#[inline(always)]
unsafe fn store<const ALIGNED: bool>(value: F64x2, ptr: *mut f64) {
    if ALIGNED {
        unsafe { value.store_aligned_at(ptr) }
    } else {
        unsafe { value.store_unaligned_at(ptr) }
    }
}

// Lengths are checked by the callers: equal and a multiple of LANE_COUNT, so
// `chunks_exact` leaves no remainder.
#[inline(always)]
fn simd_div_pass<const ALIGNED: bool>(a: &[f64], b: &[f64], out: &mut [f64]) {
    let pairs = a.chunks_exact(LANE_COUNT).zip(b.chunks_exact(LANE_COUNT));

    for (out_chunk, (a_chunk, b_chunk)) in out.chunks_exact_mut(LANE_COUNT).zip(pairs) {
        // SAFETY: every chunk holds exactly LANE_COUNT values; with ALIGNED the
        // slice starts are 16-byte aligned and chunks advance by 16 bytes.
        unsafe {
            let quotient = load::<ALIGNED>(a_chunk.as_ptr()) / load::<ALIGNED>(b_chunk.as_ptr());
            store::<ALIGNED>(quotient, out_chunk.as_mut_ptr());
        }
    }
}

#[inline(always)]
fn simd_div_intensive_pass<const ALIGNED: bool>(a: &[f64], b: &[f64], out: &mut [f64]) {
    let one = F64x2::splat(1.0);
    let two = F64x2::splat(2.0);

    let pairs = a.chunks_exact(LANE_COUNT).zip(b.chunks_exact(LANE_COUNT));

    for (out_chunk, (a_chunk, b_chunk)) in out.chunks_exact_mut(LANE_COUNT).zip(pairs) {
        // SAFETY: as in `simd_div_pass`.
        unsafe {
            let va = load::<ALIGNED>(a_chunk.as_ptr());
            let vb = load::<ALIGNED>(b_chunk.as_ptr());

            let mut r = va / vb;
            r = r / (vb + one);
            r = r / (va + two);

            store::<ALIGNED>(r, out_chunk.as_mut_ptr());
        }
    }
}

impl<'b> SimdDiv<&'b [f64]> for &[f64] {
    type Output = Result<AlignedBuf>;

    #[inline(always)]
    fn scalar_div(self, rhs: &'b [f64]) -> Self::Output {
        let mut out = AlignedBuf::zeroed(self.len())?;
        scalar_div(self, rhs, &mut out)?;
        Ok(out)
    }

    #[inline(always)]
    fn simd_div(self, rhs: &'b [f64]) -> Self::Output {
        let mut out = AlignedBuf::zeroed(self.len())?;
        simd_div(self, rhs, &mut out)?;
        Ok(out)
    }

    #[inline(always)]
    fn scalar_div_intensive(self, rhs: &'b [f64], iterations: usize) -> Self::Output {
        let mut out = AlignedBuf::zeroed(self.len())?;
        scalar_div_intensive(self, rhs, &mut out, iterations)?;
        Ok(out)
    }

    #[inline(always)]
    fn simd_div_intensive(self, rhs: &'b [f64], iterations: usize) -> Self::Output {
        let mut out = AlignedBuf::zeroed(self.len())?;
        simd_div_intensive(self, rhs, &mut out, iterations)?;
        Ok(out)
    }
}
