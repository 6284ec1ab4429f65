//! Concentric ring position sampling around an emitter.
use std::f32::consts::TAU;

use mint::Vector3;
use rand::RngCore;

use crate::sampling::{rand01, RadialSampling, RingSample};

/// Number of concentric distance rings per emitter.
pub const DEFAULT_RING_COUNT: usize = 20;

/// Concentric ring sampling: evenly spaced distance rings between the range
/// bounds, with equally spaced angles inside each ring.
///
/// With `jitter == 0.0` (the default) the output is a pure function of its
/// inputs; the RNG is never drawn from. The requested count is floor-divided
/// across the rings, so up to `count % rings` trailing samples are dropped.
/// Samples come out ring-major: all of ring 0, then all of ring 1, and so on,
/// each ring sweeping angles counterclockwise from zero.
#[derive(Debug, Clone)]
pub struct RingSampler {
    /// Number of distance rings.
    pub rings: usize,
    /// Maximum radial perturbation per sample in world units.
    pub jitter: f32,
}

impl RingSampler {
    /// Create a ring sampler with the default ring count and no jitter.
    pub fn new() -> Self {
        Self {
            rings: DEFAULT_RING_COUNT,
            jitter: 0.0,
        }
    }

    /// Override the ring count.
    pub fn with_rings(mut self, rings: usize) -> Self {
        self.rings = rings;
        self
    }

    /// Perturb each sample radially by up to `jitter` world units, clamped
    /// back into the range bounds. Jittered output depends on the RNG.
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }
}

impl Default for RingSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl RadialSampling for RingSampler {
    fn generate(
        &self,
        origin: Vector3<f32>,
        min_range: f32,
        max_range: f32,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<RingSample> {
        if self.rings == 0 || count < self.rings {
            return Vec::new();
        }
        if !min_range.is_finite() || !max_range.is_finite() {
            return Vec::new();
        }
        if min_range <= 0.0 || max_range <= 0.0 || min_range > max_range {
            return Vec::new();
        }

        let points_per_ring = count / self.rings;
        let span = max_range - min_range;
        let mut out = Vec::with_capacity(points_per_ring * self.rings);

        for ring in 0..self.rings {
            let progress = if self.rings > 1 {
                ring as f32 / (self.rings - 1) as f32
            } else {
                0.0
            };
            let ring_distance = min_range + span * progress;

            for step in 0..points_per_ring {
                let angle = TAU * step as f32 / points_per_ring as f32;
                let distance = if self.jitter > 0.0 {
                    let offset = (rand01(rng) * 2.0 - 1.0) * self.jitter;
                    (ring_distance + offset).clamp(min_range, max_range)
                } else {
                    ring_distance
                };

                out.push(RingSample {
                    position: Vector3 {
                        x: origin.x + distance * angle.cos(),
                        y: origin.y + distance * angle.sin(),
                        z: origin.z,
                    },
                    distance,
                });
            }
        }

        out
    }
}
