use std::io;
use std::process::ExitCode;

use chrono::Local;
use log::debug;

use simddiv::report::Reporter;
use simddiv::simd::{BACKEND, TARGET_INSTRUCTION};
use simddiv::{run, BenchConfig};

fn main() -> ExitCode {
    env_logger::init();

    debug!("backend `{BACKEND}`, target instruction `{TARGET_INSTRUCTION}`");

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());

    if let Err(e) = reporter.banner(&Local::now()) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let scenarios = BenchConfig::presets();
    let total = scenarios.len();
    let mut passed = 0;

    for config in &scenarios {
        match run(config, &mut reporter) {
            Ok(outcome) => match outcome.verification.first_mismatch {
                None => passed += 1,
                Some(mismatch) => {
                    eprintln!("{mismatch}");
                    let _ = reporter.finished(passed, total);
                    return ExitCode::FAILURE;
                }
            },
            Err(e) => {
                eprintln!("error: scenario `{}` aborted: {e}", config.name);
                return ExitCode::FAILURE;
            }
        }
    }

    if let Err(e) = reporter.finished(passed, total) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
