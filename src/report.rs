//! Human-readable benchmark report.
//!
//! The layout is meant for people, not parsers: a banner, then per scenario
//! the parameters, per-kernel mean times, the speedup and the verification
//! outcome.

use std::io::{self, Write};

use chrono::{DateTime, Local};

use crate::bench::{BenchConfig, Outcome};
use crate::simd::{BACKEND, TARGET_INSTRUCTION};
use crate::timing::Timing;
use crate::verify::Verification;

const RULE_WIDTH: usize = 29;

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, started: &DateTime<Local>) -> io::Result<()> {
        writeln!(self.out, "--- SIMD Performance Test ---")?;
        writeln!(self.out, "Target Instruction: {TARGET_INSTRUCTION}")?;
        writeln!(self.out, "Backend: {BACKEND}")?;
        writeln!(self.out, "Started: {}", started.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
    }

    pub fn scenario(&mut self, config: &BenchConfig) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== Scenario: {} ===", config.name)?;
        write!(
            self.out,
            "N = {}, T = {}, R = {}",
            config.len(),
            config.workload.iterations(),
            config.rounds
        )?;
        match config.seed() {
            Some(seed) => writeln!(self.out, ", seed = {seed}"),
            None => writeln!(self.out, ", fixed inputs"),
        }
    }

    pub fn initializing(&mut self, len: usize) -> io::Result<()> {
        writeln!(self.out, "Initializing {len} elements...")
    }

    pub fn initialized(&mut self) -> io::Result<()> {
        writeln!(self.out, "Initialization complete.")?;
        writeln!(self.out)
    }

    pub fn timing(&mut self, label: &str, timing: &Timing) -> io::Result<()> {
        write!(self.out, "{label} division took: {:.3} ms", timing.mean_ms)?;
        if timing.rounds() > 1 {
            write!(
                self.out,
                " (mean of {} rounds, min {:.3} ms, max {:.3} ms)",
                timing.rounds(),
                timing.min_ms(),
                timing.max_ms()
            )?;
        }
        writeln!(self.out)
    }

    /// Prints inputs and result with two decimals; meant for tiny scenarios.
    pub fn vectors(&mut self, a: &[f64], b: &[f64], result: &[f64]) -> io::Result<()> {
        writeln!(self.out)?;
        self.vector("Vector A: ", a)?;
        self.vector("Vector B: ", b)?;
        self.vector("Result  : ", result)
    }

    fn vector(&mut self, label: &str, values: &[f64]) -> io::Result<()> {
        let joined = values
            .iter()
            .map(|v| format!("{v:.2}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{label}{joined}")
    }

    pub fn conclusion(&mut self, outcome: &Outcome) -> io::Result<()> {
        writeln!(self.out)?;
        match outcome.speedup() {
            Some(speedup) => writeln!(self.out, "Speedup (scalar / SIMD): {speedup:.2}x")?,
            None => writeln!(self.out, "Speedup (scalar / SIMD): n/a")?,
        }

        match outcome.speedup() {
            Some(speedup) if speedup > 1.0 => {
                writeln!(self.out, "Conclusion: SIMD is {speedup:.2} times faster!")
            }
            _ => writeln!(
                self.out,
                "Conclusion: SIMD is not faster. Check the build profile (ensure --release is used)!"
            ),
        }
    }

    pub fn verification(&mut self, verification: &Verification) -> io::Result<()> {
        match &verification.first_mismatch {
            None => writeln!(
                self.out,
                "Verification PASSED for the first {} elements (max |diff| = {:e}).",
                verification.checked, verification.max_abs_diff
            ),
            Some(mismatch) => writeln!(
                self.out,
                "Verification FAILED at index {} of the first {} elements (max |diff| = {:e}).",
                mismatch.index, verification.checked, verification.max_abs_diff
            ),
        }
    }

    pub fn finished(&mut self, passed: usize, total: usize) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(self.out, "{passed}/{total} scenarios verified.")?;
        self.out.flush()
    }
}
