//! End-to-end scenario runs through the report pipeline.
//!
//! The random scenarios are scaled down from the binary's presets so the suite
//! stays fast in debug builds; the pipeline is the same.

use simddiv::bench::InputSource;
use simddiv::report::Reporter;
use simddiv::{run, BenchConfig, SimddivError, Workload};

fn run_captured(config: &BenchConfig) -> (simddiv::Result<simddiv::Outcome>, String) {
    let mut reporter = Reporter::new(Vec::new());
    let outcome = run(config, &mut reporter);
    let text = String::from_utf8(reporter.into_inner()).expect("report is UTF-8");
    (outcome, text)
}

#[test]
fn test_demo_scenario() {
    let (outcome, text) = run_captured(&BenchConfig::demo());
    let outcome = outcome.unwrap();

    println!("{text}");

    assert!(outcome.passed());
    assert_eq!(outcome.verification.checked, 4);
    assert!(text.contains("Initializing 4 elements..."));
    assert!(text.contains("Vector A: 8.00 16.00 20.00 100.00"));
    assert!(text.contains("Vector B: 2.00 4.00 10.00 25.00"));
    assert!(text.contains("Result  : 4.00 4.00 2.00 4.00"));
    assert!(text.contains("Verification PASSED for the first 4 elements"));
}

#[test]
fn test_simple_scenario_scaled_down() {
    let config = BenchConfig::simple().with_len(20_000);
    let (outcome, text) = run_captured(&config);
    let outcome = outcome.unwrap();

    assert!(outcome.passed());
    assert_eq!(outcome.verification.checked, 1_000);
    assert!(outcome.verification.max_abs_diff <= 1e-9);
    assert_eq!(outcome.scalar.rounds(), 1);
    assert!(outcome.scalar.mean_ms.is_finite());
    assert!(outcome.simd.mean_ms.is_finite());
    assert!(text.contains("N = 20000, T = 1, R = 1, seed = 42"));
    assert!(text.contains("Speedup (scalar / SIMD)"));
    assert!(!text.contains("Vector A:"));
}

#[test]
fn test_intensive_scenario_scaled_down() {
    let config = BenchConfig::intensive().with_len(10_000).with_iterations(2);
    let (outcome, text) = run_captured(&config);
    let outcome = outcome.unwrap();

    assert!(outcome.passed());
    assert_eq!(outcome.scalar.rounds(), 3);
    assert_eq!(outcome.simd.rounds(), 3);
    assert!(text.contains("N = 10000, T = 2, R = 3, seed = 42"));
    assert!(text.contains("mean of 3 rounds"));
}

#[test]
fn test_fixed_inputs_with_bad_divisor_fail_before_timing() {
    let config = BenchConfig::fixed("bad", Workload::Simple, &[1.0, 2.0], &[1.0, 0.0]);
    let (outcome, text) = run_captured(&config);

    assert!(matches!(
        outcome,
        Err(SimddivError::ValidationError { .. })
    ));
    assert!(!text.contains("division took"));
}

#[test]
fn test_custom_config() {
    let config = BenchConfig {
        name: "custom".to_string(),
        workload: Workload::Intensive { iterations: 1 },
        rounds: 2,
        inputs: InputSource::Fixed {
            dividends: vec![8.0, 16.0],
            divisors: vec![2.0, 4.0],
        },
    };

    let (outcome, text) = run_captured(&config);
    let outcome = outcome.unwrap();

    assert!(outcome.passed());
    assert!(text.contains("Result  : 0.13 0.04"));
}
