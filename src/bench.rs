//! Benchmark scenarios: what to divide, how often, and how to time it.

use std::hint::black_box;
use std::io::Write;

use log::{info, warn};

use crate::data::Inputs;
use crate::error::Result;
use crate::report::Reporter;
use crate::simd::slice::{scalar_div, scalar_div_intensive, simd_div, simd_div_intensive};
use crate::timing::{speedup, try_time_rounds, Timing};
use crate::utils::AlignedBuf;
use crate::verify::{verify, Verification};
use crate::{
    DEFAULT_SEED, DEMO_DIVIDENDS, DEMO_DIVISORS, INTENSIVE_ITERATIONS, INTENSIVE_LEN,
    INTENSIVE_ROUNDS, SIMPLE_LEN,
};

/// Which kernel pair a scenario times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// One division per element, one pass.
    Simple,
    /// Three chained divisions per element, `iterations` passes.
    Intensive { iterations: usize },
}

impl Workload {
    pub fn iterations(&self) -> usize {
        match self {
            Workload::Simple => 1,
            Workload::Intensive { iterations } => *iterations,
        }
    }
}

/// Where a scenario's inputs come from.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Random { len: usize, seed: u64 },
    Fixed { dividends: Vec<f64>, divisors: Vec<f64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub name: String,
    pub workload: Workload,
    pub rounds: usize,
    pub inputs: InputSource,
}

impl BenchConfig {
    pub fn random(name: impl Into<String>, workload: Workload, len: usize, seed: u64) -> Self {
        Self {
            name: name.into(),
            workload,
            rounds: 1,
            inputs: InputSource::Random { len, seed },
        }
    }

    pub fn fixed(
        name: impl Into<String>,
        workload: Workload,
        dividends: &[f64],
        divisors: &[f64],
    ) -> Self {
        Self {
            name: name.into(),
            workload,
            rounds: 1,
            inputs: InputSource::Fixed {
                dividends: dividends.to_vec(),
                divisors: divisors.to_vec(),
            },
        }
    }

    /// Four hand-picked pairs whose quotients are exact: `[4, 4, 2, 4]`.
    pub fn demo() -> Self {
        Self::fixed("demo", Workload::Simple, &DEMO_DIVIDENDS, &DEMO_DIVISORS)
    }

    /// 2×10^7 random pairs, one pass, one round.
    pub fn simple() -> Self {
        Self::random("simple", Workload::Simple, SIMPLE_LEN, DEFAULT_SEED)
    }

    /// 10^7 random pairs, 10 intensive passes, mean of 3 rounds.
    pub fn intensive() -> Self {
        Self::random(
            "intensive",
            Workload::Intensive {
                iterations: INTENSIVE_ITERATIONS,
            },
            INTENSIVE_LEN,
            DEFAULT_SEED,
        )
        .with_rounds(INTENSIVE_ROUNDS)
    }

    /// The scenario list the binary runs, in order.
    pub fn presets() -> Vec<Self> {
        vec![Self::demo(), Self::simple(), Self::intensive()]
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Resizes a random scenario; fixed inputs keep their own length.
    pub fn with_len(mut self, new_len: usize) -> Self {
        if let InputSource::Random { len, .. } = &mut self.inputs {
            *len = new_len;
        }
        self
    }

    pub fn with_seed(mut self, new_seed: u64) -> Self {
        if let InputSource::Random { seed, .. } = &mut self.inputs {
            *seed = new_seed;
        }
        self
    }

    /// Sets the pass count; turns a simple scenario into an intensive one.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.workload = Workload::Intensive { iterations };
        self
    }

    pub fn len(&self) -> usize {
        match &self.inputs {
            InputSource::Random { len, .. } => *len,
            InputSource::Fixed { dividends, .. } => dividends.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn seed(&self) -> Option<u64> {
        match &self.inputs {
            InputSource::Random { seed, .. } => Some(*seed),
            InputSource::Fixed { .. } => None,
        }
    }

    fn generate(&self) -> Result<Inputs> {
        match &self.inputs {
            InputSource::Random { len, seed } => Inputs::random(*len, *seed),
            InputSource::Fixed {
                dividends,
                divisors,
            } => Inputs::from_slices(dividends, divisors),
        }
    }
}

/// Timings and verification of one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub scalar: Timing,
    pub simd: Timing,
    pub verification: Verification,
}

impl Outcome {
    pub fn speedup(&self) -> Option<f64> {
        speedup(self.scalar.mean_ms, self.simd.mean_ms)
    }

    pub fn passed(&self) -> bool {
        self.verification.passed()
    }
}

/// Runs one scenario end to end and reports it.
///
/// Each timed region covers exactly one kernel call; input generation,
/// allocation and reporting happen outside of it, and the scalar rounds finish
/// before the first SIMD round starts.
pub fn run<W: Write>(config: &BenchConfig, reporter: &mut Reporter<W>) -> Result<Outcome> {
    info!(
        "scenario `{}`: N = {}, T = {}, R = {}",
        config.name,
        config.len(),
        config.workload.iterations(),
        config.rounds
    );

    reporter.scenario(config)?;
    reporter.initializing(config.len())?;

    let inputs = config.generate()?;
    let mut scalar_out = AlignedBuf::zeroed(inputs.len())?;
    let mut simd_out = AlignedBuf::zeroed(inputs.len())?;

    reporter.initialized()?;

    let (a, b) = (&*inputs.dividends, &*inputs.divisors);

    let (scalar, simd) = match config.workload {
        Workload::Simple => (
            try_time_rounds(config.rounds, || scalar_div(a, b, black_box(&mut scalar_out)))?,
            try_time_rounds(config.rounds, || simd_div(a, b, black_box(&mut simd_out)))?,
        ),
        Workload::Intensive { iterations } => (
            try_time_rounds(config.rounds, || {
                scalar_div_intensive(a, b, black_box(&mut scalar_out), iterations)
            })?,
            try_time_rounds(config.rounds, || {
                simd_div_intensive(a, b, black_box(&mut simd_out), iterations)
            })?,
        ),
    };

    reporter.timing("Scalar (normal loop)", &scalar)?;
    reporter.timing(&format!("SIMD ({})", crate::simd::TARGET_INSTRUCTION), &simd)?;

    if config.len() <= crate::SHOW_VECTORS_UP_TO {
        reporter.vectors(a, b, &simd_out)?;
    }

    let verification = verify(&scalar_out, &simd_out);
    if let Some(mismatch) = &verification.first_mismatch {
        warn!("scenario `{}`: {mismatch}", config.name);
    }

    let outcome = Outcome {
        scalar,
        simd,
        verification,
    };

    reporter.conclusion(&outcome)?;
    reporter.verification(&outcome.verification)?;

    info!(
        "scenario `{}` finished: speedup {:?}, verification {}",
        config.name,
        outcome.speedup(),
        if outcome.passed() { "passed" } else { "failed" }
    );

    Ok(outcome)
}
