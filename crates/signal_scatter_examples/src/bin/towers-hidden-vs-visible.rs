use rand::rngs::StdRng;
use rand::SeedableRng;
use signal_scatter::prelude::*;
use signal_scatter_examples::{init_tracing, render_coverage_to_png, RenderConfig};

/// Discovery only considers visible emitters: the same scene rendered twice,
/// once with the second tower hidden and once with it shown.
fn main() -> anyhow::Result<()> {
    init_tracing();

    let render = RenderConfig::default();

    let hidden = build_scene(false);
    let run_hidden = run(&hidden)?;
    println!("--- second tower hidden ---\n{run_hidden}\n");
    render_coverage_to_png(&run_hidden, &render, "towers-hidden.png")?;

    let visible = build_scene(true);
    let run_visible = run(&visible)?;
    println!("--- second tower visible ---\n{run_visible}");
    render_coverage_to_png(&run_visible, &render, "towers-visible.png")?;

    Ok(())
}

fn build_scene(second_tower_visible: bool) -> MemoryScene {
    MemoryScene::new()
        .with_object(SceneObject::new("Tower_West", [-80.0, 0.0, 15.0], true))
        .with_object(SceneObject::new(
            "Tower_East",
            [80.0, 0.0, 15.0],
            second_tower_visible,
        ))
}

fn run(scene: &MemoryScene) -> anyhow::Result<CoverageRun> {
    let mut engine = CoverageEngine::try_new(CoverageConfig::default(), scene)?;
    let mut rng = StdRng::seed_from_u64(42);
    Ok(engine.run(&mut rng)?)
}
