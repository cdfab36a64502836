//! Mauka Match Benchmarks
//!
//! Criterion benchmarks for the exact and approximate matchers over
//! generated text.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use mauka_match_lib::matching::{ApproximateAlgorithm, EditCosts, ExactAlgorithm, PatternSet};
use std::time::Duration;

const WORDS: [&str; 12] = [
    "the", "board", "and", "chief", "executive", "officer", "met", "on", "monday", "to",
    "review", "results",
];

/// Deterministic pseudo-prose of roughly `len` symbols.
fn generate_text(len: usize) -> String {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut text = String::with_capacity(len + 16);
    while text.len() < len {
        // xorshift64
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        text.push_str(WORDS[(state % WORDS.len() as u64) as usize]);
        text.push(' ');
    }
    text
}

/// Benchmark the exact matchers on one pattern and on a pattern set
fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let single = PatternSet::single("executive officer").unwrap();
    let many = PatternSet::new(["chief", "officer", "review the", "monday to", "board and"]).unwrap();

    for size in [1_000, 10_000, 100_000] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));

        for algorithm in ExactAlgorithm::ALL {
            let matcher = algorithm.build();
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm}/single"), size),
                &text,
                |b, text| b.iter(|| matcher.matches(black_box(&single), black_box(text))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm}/set"), size),
                &text,
                |b, text| b.iter(|| matcher.matches(black_box(&many), black_box(text))),
            );
        }
    }

    group.finish();
}

/// Benchmark the approximate matchers for growing edit budgets
fn bench_approximate(c: &mut Criterion) {
    let mut group = c.benchmark_group("approximate");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(20);

    let patterns = PatternSet::single("and chief executive officer").unwrap();
    let text = generate_text(20_000);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for max_edits in [1, 3] {
        for algorithm in ApproximateAlgorithm::ALL {
            let matcher = algorithm.build(EditCosts::default());
            group.bench_with_input(
                BenchmarkId::new(algorithm.as_str(), max_edits),
                &max_edits,
                |b, &max_edits| {
                    b.iter(|| matcher.matches(black_box(&patterns), black_box(&text), max_edits))
                },
            );
        }
    }

    group.finish();
}

// Group all benchmarks together
criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_exact, bench_approximate
}

criterion_main!(benches);
