use rand::rngs::StdRng;
use rand::SeedableRng;
use signal_scatter::prelude::*;
use signal_scatter_examples::{init_tracing, render_coverage_to_png, RenderConfig};

/// Compare the default deterministic rings against the optional radial
/// jitter: same tower, same configuration, two renders.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let scene =
        MemoryScene::new().with_object(SceneObject::new("Tower_Center", [0.0, 0.0, 20.0], true));
    let config = CoverageConfig::default().with_points_per_emitter(1200);
    let render = RenderConfig {
        world_extent: 350.0,
        ..RenderConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(42);

    // Pure rings: the RNG is never drawn from.
    let mut engine = CoverageEngine::try_new(config.clone(), &scene)?;
    let run_rings = engine.run(&mut rng)?;
    render_coverage_to_png(&run_rings, &render, "rings-deterministic.png")?;

    // Radial jitter of up to 5 world units per sample.
    let mut engine = CoverageEngine::try_new(config, &scene)?
        .with_sampler(RingSampler::new().with_jitter(5.0));
    let run_jitter = engine.run(&mut rng)?;
    render_coverage_to_png(&run_jitter, &render, "rings-jitter.png")?;

    println!("deterministic:\n{}\n", run_rings.stats);
    println!("jittered:\n{}", run_jitter.stats);

    Ok(())
}
