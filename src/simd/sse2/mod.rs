//! SSE2 implementation of the 128-bit packed double vector.
//!
//! SSE2 is part of the x86_64 baseline, so on that architecture this backend is
//! always selected. On 32-bit x86 it is selected only when the target enables
//! `sse2` (e.g. `i686-*`); `i586-*` targets get the portable fallback.
//!
//! # Available Types
//!
//! - [`f64x2::F64x2`]: `__m128d` holding 2 packed double-precision values

pub mod f64x2;
