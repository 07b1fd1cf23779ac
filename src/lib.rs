//! Micro-benchmark of the 128-bit packed double division against a scalar loop.
//!
//! The crate divides two `f64` sequences elementwise twice, once one element at
//! a time and once two lanes per packed divide ([`simd::F64x2`]), times both,
//! and checks that the results agree.
//!
//! ```rust
//! use simddiv::simd::SimdDiv;
//!
//! let a = [8.0, 16.0, 20.0, 100.0];
//! let b = [2.0, 4.0, 10.0, 25.0];
//!
//! let scalar = a.as_slice().scalar_div(b.as_slice()).unwrap();
//! let simd = a.as_slice().simd_div(b.as_slice()).unwrap();
//!
//! assert_eq!(&*scalar, &[4.0, 4.0, 2.0, 4.0]);
//! assert!(simddiv::verify::verify(&scalar, &simd).passed());
//! ```

use std::ops::RangeInclusive;

pub mod bench;
pub mod data;
pub mod error;
pub mod report;
pub mod simd;
pub mod timing;
pub mod utils;
pub mod verify;

pub use bench::{run, BenchConfig, Outcome, Workload};
pub use error::{Result, SimddivError};
pub use simd::SimdDiv;

/// Seed for the random scenarios.
pub const DEFAULT_SEED: u64 = 42;

pub const DIVIDEND_RANGE: RangeInclusive<f64> = 5.0..=500.0;
pub const DIVISOR_RANGE: RangeInclusive<f64> = 1.0..=100.0;
pub const MIN_DIVISOR: f64 = 1.0;

/// Largest absolute difference the two kernels may show at any index.
pub const TOLERANCE: f64 = 1e-9;
/// Number of leading outputs the verifier compares.
pub const VERIFY_PREFIX: usize = 1000;

pub const SIMPLE_LEN: usize = 20_000_000;
pub const INTENSIVE_LEN: usize = 10_000_000;
pub const INTENSIVE_ITERATIONS: usize = 10;
pub const INTENSIVE_ROUNDS: usize = 3;

pub const DEMO_DIVIDENDS: [f64; 4] = [8.0, 16.0, 20.0, 100.0];
pub const DEMO_DIVISORS: [f64; 4] = [2.0, 4.0, 10.0, 25.0];

/// Scenarios this short also print their vectors.
pub const SHOW_VECTORS_UP_TO: usize = 16;
