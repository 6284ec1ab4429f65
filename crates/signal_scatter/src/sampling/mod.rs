//! Radial sampling strategies for generating coverage samples around an emitter.
//!
//! This module defines the trait and the concrete ring strategy used by the
//! coverage pipeline to propose (position, distance) samples prior to scoring.
use mint::Vector3;
use rand::RngCore;

pub mod ring;

pub use ring::{RingSampler, DEFAULT_RING_COUNT};

/// A candidate sample: a world position and its radial distance from the emitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSample {
    /// World-space position of the sample.
    pub position: Vector3<f32>,
    /// Radial distance from the emitter origin.
    pub distance: f32,
}

/// Trait for radial sample generation around an origin.
pub trait RadialSampling: Send + Sync {
    fn generate(
        &self,
        origin: Vector3<f32>,
        min_range: f32,
        max_range: f32,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Vec<RingSample>;
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}
