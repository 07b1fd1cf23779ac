#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use std::ops::{Add, Div};

use crate::simd::{Alignment, SimdLoad, SimdStore};

pub const NEON_ALIGNMENT: usize = 16;

pub const LANE_COUNT: usize = 2;

pub const TARGET_INSTRUCTION: &str = "vdivq_f64";

/// A SIMD vector of 2 64-bit floating point values
#[derive(Copy, Clone, Debug)]
pub struct F64x2 {
    pub elements: float64x2_t,
}

impl F64x2 {
    /// Copies both lanes out of the register.
    #[inline(always)]
    pub fn to_array(self) -> [f64; LANE_COUNT] {
        let mut lanes = [0.0f64; LANE_COUNT];
        unsafe { vst1q_f64(lanes.as_mut_ptr(), self.elements) };
        lanes
    }
}

impl Alignment<f64> for F64x2 {
    #[inline(always)]
    fn is_aligned(ptr: *const f64) -> bool {
        (ptr as usize) % NEON_ALIGNMENT == 0
    }
}

impl From<&[f64]> for F64x2 {
    fn from(slice: &[f64]) -> Self {
        assert!(
            slice.len() >= LANE_COUNT,
            "slice must hold at least {LANE_COUNT} values, got {}",
            slice.len()
        );

        unsafe { Self::load(slice.as_ptr()) }
    }
}

// `vld1q_f64` / `vst1q_f64` have no alignment requirement beyond the element,
// so the aligned and unaligned forms are the same instruction.
impl SimdLoad<f64> for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn splat(value: f64) -> Self::Output {
        Self {
            elements: unsafe { vdupq_n_f64(value) },
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self::Output {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        unsafe { Self::load_unaligned(ptr) }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self::Output {
        unsafe { Self::load_unaligned(ptr) }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self::Output {
        Self {
            elements: vld1q_f64(ptr),
        }
    }
}

impl SimdStore<f64> for F64x2 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f64) {
        debug_assert!(!ptr.is_null(), "Pointer must not be null");
        unsafe { self.store_unaligned_at(ptr) }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f64) {
        unsafe { self.store_unaligned_at(ptr) }
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f64) {
        vst1q_f64(ptr, self.elements)
    }
}

impl Add for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vaddq_f64(self.elements, rhs.elements) },
        }
    }
}

impl Div for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: unsafe { vdivq_f64(self.elements, rhs.elements) },
        }
    }
}
