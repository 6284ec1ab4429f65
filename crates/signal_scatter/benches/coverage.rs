mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use signal_scatter::prelude::*;

const EMITTER_COUNTS: [usize; 3] = [1, 4, 16];

fn grid_scene(emitters: usize) -> MemoryScene {
    let mut scene = MemoryScene::new();
    for i in 0..emitters {
        let x = (i % 4) as f32 * 400.0;
        let y = (i / 4) as f32 * 400.0;
        scene = scene.with_object(SceneObject::new(format!("Tower_{i}"), [x, y, 10.0], true));
    }
    scene
}

fn coverage_run_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage/run");

    for &emitters in &EMITTER_COUNTS {
        let scene = grid_scene(emitters);
        group.throughput(common::elements_throughput(emitters * 400));

        group.bench_with_input(
            BenchmarkId::from_parameter(emitters),
            &emitters,
            |b, _| {
                let mut engine = CoverageEngine::try_new(CoverageConfig::default(), &scene)
                    .expect("default config is valid");
                let mut rng = StdRng::seed_from_u64(7);
                b.iter(|| {
                    let run = engine.run(&mut rng).expect("run succeeds");
                    black_box(run.points.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = coverage_run_benches
}
criterion_main!(benches);
