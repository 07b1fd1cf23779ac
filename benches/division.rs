use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use simddiv::data::Inputs;
use simddiv::simd::slice::{scalar_div, scalar_div_intensive, simd_div, simd_div_intensive};
use simddiv::simd::TARGET_INSTRUCTION;
use simddiv::utils::AlignedBuf;
use simddiv::DEFAULT_SEED;

// --- Configuration ---
const VECTOR_LENGTHS: &[usize] = &[
    1_024,
    65_536,
    1_048_576,
    20_000_000, // Size the binary runs with
];

const INTENSIVE_LENGTHS: &[usize] = &[65_536, 1_048_576];
const INTENSIVE_ITERATIONS: usize = 10;

fn configure_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3))
        .sample_size(20)
}

fn bench_division(c: &mut Criterion) {
    for &len in VECTOR_LENGTHS {
        let mut group = c.benchmark_group(format!("Division/{len}"));
        group.throughput(Throughput::Elements(len as u64));

        let inputs = Inputs::random(len, DEFAULT_SEED).expect("inputs");
        let mut out = AlignedBuf::zeroed(len).expect("output buffer");

        group.bench_function("scalar", |bencher| {
            bencher.iter(|| {
                scalar_div(
                    black_box(&inputs.dividends),
                    black_box(&inputs.divisors),
                    black_box(&mut out),
                )
            });
        });

        group.bench_function(format!("simd ({TARGET_INSTRUCTION})"), |bencher| {
            bencher.iter(|| {
                simd_div(
                    black_box(&inputs.dividends),
                    black_box(&inputs.divisors),
                    black_box(&mut out),
                )
            });
        });

        group.finish();
    }
}

fn bench_division_intensive(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("IntensiveDivision/T={INTENSIVE_ITERATIONS}"));

    for &len in INTENSIVE_LENGTHS {
        group.throughput(Throughput::Elements((len * INTENSIVE_ITERATIONS) as u64));

        let inputs = Inputs::random(len, DEFAULT_SEED).expect("inputs");
        let mut out = AlignedBuf::zeroed(len).expect("output buffer");

        group.bench_with_input(BenchmarkId::new("scalar", len), &len, |bencher, _| {
            bencher.iter(|| {
                scalar_div_intensive(
                    black_box(&inputs.dividends),
                    black_box(&inputs.divisors),
                    black_box(&mut out),
                    INTENSIVE_ITERATIONS,
                )
            });
        });

        group.bench_with_input(BenchmarkId::new("simd", len), &len, |bencher, _| {
            bencher.iter(|| {
                simd_div_intensive(
                    black_box(&inputs.dividends),
                    black_box(&inputs.divisors),
                    black_box(&mut out),
                    INTENSIVE_ITERATIONS,
                )
            });
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = configure_criterion();
    targets = bench_division, bench_division_intensive
);

criterion_main!(benches);
