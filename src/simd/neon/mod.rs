//! ARM NEON implementation of the 128-bit packed double vector.
//!
//! AArch64 NEON has a true packed double divide (`FDIV Vd.2D`, exposed as
//! `vdivq_f64`), which is the nearest equivalent of SSE2's `_mm_div_pd`.
//! 32-bit ARM NEON has no f64 lanes, so `build.rs` only selects this backend
//! on `aarch64`.

pub mod f64x2;
