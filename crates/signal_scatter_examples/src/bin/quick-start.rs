use rand::rngs::StdRng;
use rand::SeedableRng;
use signal_scatter::prelude::*;
use signal_scatter_examples::{init_tracing, render_coverage_to_png, RenderConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A scene with two visible towers; anything not matching the emitter
    // prefix is ignored by discovery.
    let scene = MemoryScene::new()
        .with_object(SceneObject::new("Tower_North", [0.0, 110.0, 12.0], true))
        .with_object(SceneObject::new("Tower_South", [45.0, -90.0, 12.0], true))
        .with_object(SceneObject::new("Building_Depot", [-60.0, 0.0, 0.0], true));

    let mut engine = CoverageEngine::try_new(CoverageConfig::default(), &scene)?;
    let mut rng = StdRng::seed_from_u64(42);
    let run = engine.run(&mut rng)?;

    println!("{run}");

    render_coverage_to_png(&run, &RenderConfig::default(), "quick-start.png")?;

    Ok(())
}
