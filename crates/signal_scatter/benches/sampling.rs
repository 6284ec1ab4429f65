mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mint::Vector3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use signal_scatter::sampling::{RadialSampling, RingSampler};

const COUNTS: [usize; 4] = [100, 400, 1600, 6400];

const ORIGIN: Vector3<f32> = Vector3 {
    x: 0.0,
    y: 0.0,
    z: 0.0,
};

fn sampling_ring_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/ring");

    for &count in &COUNTS {
        group.throughput(common::elements_throughput(count));

        let strategy = RingSampler::new();
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let samples = strategy.generate(ORIGIN, 5.0, 150.0, count, &mut rng);
                black_box(samples.len());
            });
        });
    }

    group.finish();
}

fn sampling_jitter_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/ring_jitter");

    for &count in &COUNTS {
        group.throughput(common::elements_throughput(count));

        let strategy = RingSampler::new().with_jitter(5.0);
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let samples = strategy.generate(ORIGIN, 5.0, 150.0, count, &mut rng);
                black_box(samples.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_ring_benches, sampling_jitter_benches
}
criterion_main!(benches);
