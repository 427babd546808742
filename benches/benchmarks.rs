//! Benchmarks for samplestats algorithms
//!
//! Run with: cargo bench --features full

// Require all features for benchmarks
#[cfg(not(all(feature = "statistics", feature = "frequency", feature = "histogram")))]
compile_error!("Benchmarks require all features. Run: cargo bench --features full");

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use samplestats::frequency::{count_values, mode, modes};
use samplestats::histogram::{assign_bins, create_bins, histogram, BinningMode};
use samplestats::statistics::{
    covariance, kurtosis, least_squares, mean, median, pearson, skewness, variance,
    MomentAccumulator,
};

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

/// Deterministic pseudo-random samples in `[0, 1000)`
fn samples(n: usize) -> Vec<f64> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state % 1_000_000) as f64 / 1_000.0
        })
        .collect()
}

// ============================================================================
// Moment Benchmarks
// ============================================================================

fn bench_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("moments");

    for size in SIZES {
        let data = samples(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("mean", size), &data, |b, data| {
            b.iter(|| black_box(mean(data)))
        });
        group.bench_with_input(BenchmarkId::new("variance", size), &data, |b, data| {
            b.iter(|| black_box(variance(data)))
        });
        group.bench_with_input(BenchmarkId::new("skewness", size), &data, |b, data| {
            b.iter(|| black_box(skewness(data)))
        });
        group.bench_with_input(BenchmarkId::new("kurtosis", size), &data, |b, data| {
            b.iter(|| black_box(kurtosis(data)))
        });
        group.bench_with_input(BenchmarkId::new("median", size), &data, |b, data| {
            b.iter(|| black_box(median(data)))
        });
    }

    group.throughput(Throughput::Elements(1));
    group.bench_function("accumulator_add", |b| {
        let mut acc = MomentAccumulator::new();
        let mut i = 0u64;
        b.iter(|| {
            acc.add(black_box(i as f64));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("accumulator_merge", |b| {
        let mut left = MomentAccumulator::new();
        let mut right = MomentAccumulator::new();
        left.extend(samples(10_000));
        right.extend(samples(20_000));
        b.iter(|| {
            let mut acc = left.clone();
            acc.merge(black_box(&right));
            acc
        });
    });

    group.finish();
}

// ============================================================================
// Pairwise / Regression Benchmarks
// ============================================================================

fn bench_bivariate(c: &mut Criterion) {
    let mut group = c.benchmark_group("bivariate");

    for size in SIZES {
        let xs = samples(size);
        let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x + 7.0).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(BenchmarkId::new("covariance", size), |b| {
            b.iter(|| black_box(covariance(&xs, &ys)))
        });
        group.bench_function(BenchmarkId::new("pearson", size), |b| {
            b.iter(|| black_box(pearson(&xs, &ys)))
        });
        group.bench_function(BenchmarkId::new("least_squares", size), |b| {
            b.iter(|| black_box(least_squares(xs.iter().zip(ys.iter()))))
        });
    }

    group.finish();
}

// ============================================================================
// Frequency Benchmarks
// ============================================================================

fn bench_frequency(c: &mut Criterion) {
    let mut group = c.benchmark_group("frequency");

    for size in SIZES {
        let data: Vec<u32> = samples(size).into_iter().map(|x| x as u32 % 97).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("count_values", size), &data, |b, data| {
            b.iter(|| black_box(count_values(data)))
        });
        group.bench_with_input(BenchmarkId::new("mode", size), &data, |b, data| {
            b.iter(|| black_box(mode(data)))
        });
        group.bench_with_input(BenchmarkId::new("modes", size), &data, |b, data| {
            b.iter(|| black_box(modes(data)))
        });
    }

    group.finish();
}

// ============================================================================
// Histogram Benchmarks
// ============================================================================

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    let data = samples(100_000);
    group.throughput(Throughput::Elements(data.len() as u64));

    for mode in [
        BinningMode::Unbounded,
        BinningMode::ExpandRange,
        BinningMode::MaxValueInclusive,
    ] {
        for bin_count in [10, 50] {
            let id = BenchmarkId::new(format!("{:?}", mode), bin_count);
            group.bench_function(id, |b| {
                b.iter(|| black_box(histogram(&data, bin_count, mode)))
            });
        }
    }

    group.bench_function("assign_only", |b| {
        let layout = create_bins(0.0, 1_000.0, 20, BinningMode::MaxValueInclusive)
            .expect("valid layout");
        b.iter(|| black_box(assign_bins(&data, &layout)))
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(
    benches,
    bench_moments,
    bench_bivariate,
    bench_frequency,
    bench_histogram,
);

criterion_main!(benches);
