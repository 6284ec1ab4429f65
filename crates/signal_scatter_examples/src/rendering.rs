//! Shared helpers for the example binaries: tracing setup and a minimal
//! top-down PNG splat of a coverage run.
use image::{Rgb as PngRgb, RgbImage};
use signal_scatter::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install a stdout tracing subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Rendering parameters for [`render_coverage_to_png`].
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Output image size in pixels (square).
    pub size_px: u32,
    /// World units covered by the image edge.
    pub world_extent: f32,
    /// Background color.
    pub background: [u8; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size_px: 512,
            world_extent: 400.0,
            background: [16, 16, 24],
        }
    }
}

/// Splat a run's point cloud into a top-down PNG centered on the world origin.
///
/// Positions are projected orthographically onto the XY plane; each sample is
/// drawn as a filled disc sized from its configured width.
pub fn render_coverage_to_png(
    run: &CoverageRun,
    config: &RenderConfig,
    path: &str,
) -> anyhow::Result<()> {
    let mut image = RgbImage::from_pixel(
        config.size_px,
        config.size_px,
        PngRgb(config.background),
    );

    let cloud = run.point_cloud();
    let scale = config.size_px as f32 / config.world_extent;
    let half = config.world_extent * 0.5;

    for ((position, color), width) in cloud
        .positions
        .iter()
        .zip(&cloud.colors)
        .zip(&cloud.widths)
    {
        let px = ((position[0] + half) * scale).round() as i64;
        let py = ((half - position[1]) * scale).round() as i64;
        let radius = ((width * 0.5 * scale).ceil() as i64).max(1);

        let pixel = PngRgb([
            (color[0] * 255.0) as u8,
            (color[1] * 255.0) as u8,
            (color[2] * 255.0) as u8,
        ]);

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let x = px + dx;
                let y = py + dy;
                if x < 0 || y < 0 || x >= config.size_px as i64 || y >= config.size_px as i64 {
                    continue;
                }
                image.put_pixel(x as u32, y as u32, pixel);
            }
        }
    }

    image.save(path)?;
    Ok(())
}
