//! SSE2 2-lane f64 SIMD vector implementation.
//!
//! `F64x2` wraps the `__m128d` register and exposes exactly what the division
//! benchmark needs: loads, stores, a broadcast, lane-wise `+` and the packed
//! divide `_mm_div_pd` (`DIVPD`).
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 128 bits (2 × f64)
//! - **Memory Alignment**: `_mm_load_pd` / `_mm_store_pd` need 16-byte alignment,
//!   the `u` forms accept any address
//! - **Division**: one `DIVPD` retires two IEEE-754 divisions

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div};

use crate::simd::{Alignment, SimdLoad, SimdStore};

/// SSE memory alignment requirement in bytes.
pub const SSE_ALIGNMENT: usize = 16;

/// Number of f64 lanes in a 128-bit register.
pub const LANE_COUNT: usize = 2;

/// Instruction the vector kernel is built around.
pub const TARGET_INSTRUCTION: &str = "_mm_div_pd";

/// SSE2 SIMD vector containing 2 packed f64 values.
///
/// ```rust
/// # #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
/// # {
/// use simddiv::simd::F64x2;
///
/// let a = F64x2::from([8.0, 16.0].as_slice());
/// let b = F64x2::from([2.0, 4.0].as_slice());
/// assert_eq!((a / b).to_array(), [4.0, 4.0]);
/// # }
/// ```
#[derive(Copy, Clone, Debug)]
pub struct F64x2 {
    /// SSE2 128-bit register containing 2 packed f64 values
    pub elements: __m128d,
}

impl F64x2 {
    /// Copies both lanes out of the register.
    #[inline(always)]
    pub fn to_array(self) -> [f64; LANE_COUNT] {
        let mut lanes = [0.0f64; LANE_COUNT];
        unsafe { _mm_storeu_pd(lanes.as_mut_ptr(), self.elements) };
        lanes
    }
}

impl Alignment<f64> for F64x2 {
    #[inline(always)]
    fn is_aligned(ptr: *const f64) -> bool {
        (ptr as usize) % core::mem::align_of::<__m128d>() == 0
    }
}

impl From<&[f64]> for F64x2 {
    /// Loads the first two values of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if the slice holds fewer than 2 values.
    fn from(slice: &[f64]) -> Self {
        assert!(
            slice.len() >= LANE_COUNT,
            "slice must hold at least {LANE_COUNT} values, got {}",
            slice.len()
        );

        unsafe { Self::load(slice.as_ptr()) }
    }
}

impl SimdLoad<f64> for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn splat(value: f64) -> Self::Output {
        Self {
            elements: unsafe { _mm_set1_pd(value) },
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match F64x2::is_aligned(ptr) {
            true => unsafe { Self::load_aligned(ptr) },
            false => unsafe { Self::load_unaligned(ptr) },
        }
    }

    /// Uses `_mm_load_pd`.
    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self::Output {
        Self {
            elements: _mm_load_pd(ptr),
        }
    }

    /// Uses `_mm_loadu_pd`.
    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self::Output {
        Self {
            elements: _mm_loadu_pd(ptr),
        }
    }
}

impl SimdStore<f64> for F64x2 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");

        match F64x2::is_aligned(ptr) {
            true => unsafe { self.store_aligned_at(ptr) },
            false => unsafe { self.store_unaligned_at(ptr) },
        }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f64) {
        _mm_store_pd(ptr, self.elements)
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f64) {
        _mm_storeu_pd(ptr, self.elements)
    }
}

impl Add for F64x2 {
    type Output = Self;

    /// Lane-wise addition with `_mm_add_pd`.
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_add_pd(self.elements, rhs.elements) },
        }
    }
}

impl Div for F64x2 {
    type Output = Self;

    /// Lane-wise division with `_mm_div_pd`.
    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { _mm_div_pd(self.elements, rhs.elements) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::AlignedBuf;

    mod alignment_tests {
        use super::*;

        #[test]
        fn test_is_aligned_16_byte_boundary() {
            let buf = AlignedBuf::zeroed(4).unwrap();
            assert!(F64x2::is_aligned(buf.as_ptr()));
        }

        #[test]
        fn test_is_not_aligned() {
            let buf = AlignedBuf::zeroed(4).unwrap();
            let unaligned_ptr = unsafe { buf.as_ptr().add(1) }; // 8 bytes past a 16-byte boundary
            assert!(!F64x2::is_aligned(unaligned_ptr));
        }
    }

    mod load_store_tests {
        use super::*;

        #[test]
        fn test_from_slice() {
            let data = [1.5, -2.25, 3.0];
            let vec = F64x2::from(data.as_slice());
            assert_eq!(vec.to_array(), [1.5, -2.25]);
        }

        #[test]
        #[should_panic(expected = "at least 2 values")]
        fn test_from_short_slice_panics() {
            let data = [1.0];
            let _ = F64x2::from(data.as_slice());
        }

        #[test]
        fn test_splat() {
            assert_eq!(F64x2::splat(7.0).to_array(), [7.0, 7.0]);
        }

        #[test]
        fn test_aligned_and_unaligned_round_trip() {
            let src = AlignedBuf::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
            let mut dst = AlignedBuf::zeroed(4).unwrap();

            unsafe {
                let aligned = F64x2::load_aligned(src.as_ptr());
                aligned.store_aligned_at(dst.as_mut_ptr());

                let unaligned = F64x2::load_unaligned(src.as_ptr().add(1));
                unaligned.store_unaligned_at(dst.as_mut_ptr().add(2));
            }

            assert_eq!(&*dst, &[1.0, 2.0, 2.0, 3.0]);
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_div_lanes_are_independent() {
            let a = F64x2::from([8.0, 16.0].as_slice());
            let b = F64x2::from([2.0, 4.0].as_slice());
            assert_eq!((a / b).to_array(), [4.0, 4.0]);

            let a = F64x2::from([20.0, 100.0].as_slice());
            let b = F64x2::from([10.0, 25.0].as_slice());
            assert_eq!((a / b).to_array(), [2.0, 4.0]);
        }

        #[test]
        fn test_div_matches_scalar_bitwise() {
            let a = [355.0, 1.0];
            let b = [113.0, 3.0];
            let packed = (F64x2::from(a.as_slice()) / F64x2::from(b.as_slice())).to_array();
            assert_eq!(packed[0].to_bits(), (a[0] / b[0]).to_bits());
            assert_eq!(packed[1].to_bits(), (a[1] / b[1]).to_bits());
        }

        #[test]
        fn test_add_splat() {
            let a = F64x2::from([1.0, 2.0].as_slice());
            assert_eq!((a + F64x2::splat(1.0)).to_array(), [2.0, 3.0]);
        }
    }
}
