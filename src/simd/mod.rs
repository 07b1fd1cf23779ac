//! Two-lane `f64` vector type and the slice kernels built on it.
//!
//! `build.rs` selects exactly one backend for [`F64x2`]:
//!
//! - `sse2`: `__m128d` with `_mm_div_pd` (x86 / x86_64)
//! - `neon`: `float64x2_t` with `vdivq_f64` (aarch64)
//! - `fallback`: a 16-byte aligned `[f64; 2]` for every other target

#[cfg(sse2)]
pub mod sse2;

#[cfg(neon)]
pub mod neon;

#[cfg(fallback)]
pub mod fallback;

pub mod slice;
pub mod traits;

pub use traits::{Alignment, SimdDiv, SimdLoad, SimdStore};

#[cfg(sse2)]
pub use sse2::f64x2::{F64x2, LANE_COUNT, TARGET_INSTRUCTION};

#[cfg(neon)]
pub use neon::f64x2::{F64x2, LANE_COUNT, TARGET_INSTRUCTION};

#[cfg(fallback)]
pub use fallback::{F64x2, LANE_COUNT, TARGET_INSTRUCTION};

/// Name of the backend `build.rs` selected for this build.
pub const BACKEND: &str = if cfg!(sse2) {
    "sse2"
} else if cfg!(neon) {
    "neon"
} else {
    "fallback"
};
