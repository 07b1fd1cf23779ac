//! Portable 2 × f64 vector for targets without a packed double divide.
//!
//! The lanes live in a 16-byte aligned array so the type has the same size and
//! alignment as the hardware registers; each operation is two scalar ops.

use std::ops::{Add, Div};

use crate::simd::{Alignment, SimdLoad, SimdStore};

pub const LANE_COUNT: usize = 2;

pub const TARGET_INSTRUCTION: &str = "portable f64x2";

#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct F64x2 {
    pub elements: [f64; LANE_COUNT],
}

impl F64x2 {
    #[inline(always)]
    pub fn to_array(self) -> [f64; LANE_COUNT] {
        self.elements
    }
}

impl Alignment<f64> for F64x2 {
    #[inline(always)]
    fn is_aligned(ptr: *const f64) -> bool {
        (ptr as usize) % core::mem::align_of::<F64x2>() == 0
    }
}

impl From<&[f64]> for F64x2 {
    fn from(slice: &[f64]) -> Self {
        assert!(
            slice.len() >= LANE_COUNT,
            "slice must hold at least {LANE_COUNT} values, got {}",
            slice.len()
        );

        Self {
            elements: [slice[0], slice[1]],
        }
    }
}

impl SimdLoad<f64> for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn splat(value: f64) -> Self::Output {
        Self {
            elements: [value; LANE_COUNT],
        }
    }

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self::Output {
        unsafe { Self::load_unaligned(ptr) }
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const f64) -> Self::Output {
        unsafe { Self::load_unaligned(ptr) }
    }

    #[inline(always)]
    unsafe fn load_unaligned(ptr: *const f64) -> Self::Output {
        Self {
            elements: [*ptr, *ptr.add(1)],
        }
    }
}

impl SimdStore<f64> for F64x2 {
    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut f64) {
        unsafe { self.store_unaligned_at(ptr) }
    }

    #[inline(always)]
    unsafe fn store_aligned_at(&self, ptr: *mut f64) {
        unsafe { self.store_unaligned_at(ptr) }
    }

    #[inline(always)]
    unsafe fn store_unaligned_at(&self, ptr: *mut f64) {
        *ptr = self.elements[0];
        *ptr.add(1) = self.elements[1];
    }
}

impl Add for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            elements: [
                self.elements[0] + rhs.elements[0],
                self.elements[1] + rhs.elements[1],
            ],
        }
    }
}

impl Div for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self::Output {
        Self {
            elements: [
                self.elements[0] / rhs.elements[0],
                self.elements[1] / rhs.elements[1],
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_register() {
        assert_eq!(core::mem::size_of::<F64x2>(), 16);
        assert_eq!(core::mem::align_of::<F64x2>(), 16);
    }

    #[test]
    fn test_div_and_add() {
        let a = F64x2::from([8.0, 16.0].as_slice());
        let b = F64x2::from([2.0, 4.0].as_slice());
        assert_eq!((a / b).to_array(), [4.0, 4.0]);
        assert_eq!((a + F64x2::splat(2.0)).to_array(), [10.0, 18.0]);
    }
}
