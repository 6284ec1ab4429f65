//! Coverage engine: discovery, sampling, scoring, and coloring in one pass.
//!
//! A run is synchronous and single-threaded: parameters in, point/score/color
//! arrays plus statistics out. Nothing is retained between runs beyond the
//! returned [`CoverageRun`].
use std::fmt;

use glam::Vec3;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::color::{gradient, Rgb};
use crate::coverage::cloud::PointCloud;
use crate::coverage::events::{CoverageEvent, CoverageEventKind, EventSink};
use crate::coverage::stats::CoverageStatistics;
use crate::error::{Error, Result};
use crate::sampling::{RadialSampling, RingSampler, DEFAULT_RING_COUNT};
use crate::scene::{Emitter, EmitterDirectory, SceneQuery};
use crate::signal::linear_strength;

/// Configuration for a coverage run.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageConfig {
    /// Far range bound in world units; signal falls to zero here.
    pub max_range: f32,
    /// Near range bound in world units; signal is full strength here.
    pub min_range: f32,
    /// Target sample count per emitter.
    pub points_per_emitter: usize,
    /// Presentation hint for point-cloud consumers; not used by the model.
    pub point_size: f32,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            max_range: 150.0,
            min_range: 5.0,
            points_per_emitter: 400,
            point_size: 4.0,
        }
    }
}

impl CoverageConfig {
    /// Creates a new [`CoverageConfig`] with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the far range bound.
    pub fn with_max_range(mut self, max_range: f32) -> Self {
        self.max_range = max_range;
        self
    }

    /// Sets the near range bound.
    pub fn with_min_range(mut self, min_range: f32) -> Self {
        self.min_range = min_range;
        self
    }

    /// Sets the target sample count per emitter.
    pub fn with_points_per_emitter(mut self, points_per_emitter: usize) -> Self {
        self.points_per_emitter = points_per_emitter;
        self
    }

    /// Sets the presentation point size.
    pub fn with_point_size(mut self, point_size: f32) -> Self {
        self.point_size = point_size;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Equal range bounds are allowed: a zero-width range has no falloff and
    /// scores every sample at full strength.
    pub fn validate(&self) -> Result<()> {
        if !self.min_range.is_finite() || self.min_range <= 0.0 {
            return Err(Error::InvalidConfig("min_range must be > 0".into()));
        }
        if !self.max_range.is_finite() || self.max_range <= 0.0 {
            return Err(Error::InvalidConfig("max_range must be > 0".into()));
        }
        if self.min_range > self.max_range {
            return Err(Error::InvalidConfig(
                "min_range must not exceed max_range".into(),
            ));
        }
        if self.points_per_emitter < DEFAULT_RING_COUNT {
            return Err(Error::InvalidConfig(format!(
                "points_per_emitter must be at least {DEFAULT_RING_COUNT}"
            )));
        }

        Ok(())
    }
}

/// One scored coverage sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    /// Index of the owning emitter in [`CoverageRun::emitters`].
    pub emitter_index: usize,
    /// World position.
    pub position: Vec3,
    /// Radial distance from the owning emitter.
    pub distance: f32,
    /// Signal strength in `[0, 100]`.
    pub strength: f32,
    /// Gradient color for this sample.
    pub color: Rgb,
}

/// Result of one coverage run; replaced wholesale by the next run.
///
/// `points` is ordered emitter-major, ring-major, angle-major. Consumers that
/// index points by position rely on that ordering.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageRun {
    /// Configuration the run was produced with.
    pub config: CoverageConfig,
    /// Emitters discovered at the start of the run, in encounter order.
    pub emitters: Vec<Emitter>,
    /// Scored samples.
    pub points: Vec<SamplePoint>,
    /// Aggregate statistics over `points`.
    pub stats: CoverageStatistics,
}

impl CoverageRun {
    /// Flat arrays for a point-cloud consumer.
    pub fn point_cloud(&self) -> PointCloud {
        PointCloud::from_run(self)
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl fmt::Display for CoverageRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "coverage run: {} emitter(s)", self.emitters.len())?;
        writeln!(
            f,
            "signal range: {:.1} - {:.1}, {} point(s) per emitter, point size {:.1}",
            self.config.min_range,
            self.config.max_range,
            self.config.points_per_emitter,
            self.config.point_size
        )?;
        fmt::Display::fmt(&self.stats, f)
    }
}

/// Orchestrates discovery, sampling, scoring, and coloring.
pub struct CoverageEngine<'a> {
    /// Run configuration applied to this engine.
    pub config: CoverageConfig,
    /// Scene backend queried for emitters.
    pub scene: &'a dyn SceneQuery,
    /// Discovery rule for emitters.
    pub directory: EmitterDirectory,
    /// Sampling strategy invoked per emitter.
    pub sampler: Box<dyn RadialSampling>,
}

impl fmt::Debug for CoverageEngine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverageEngine")
            .field("config", &self.config)
            .field("directory", &self.directory)
            .field("scene", &"<dyn SceneQuery>")
            .field("sampler", &"<dyn RadialSampling>")
            .finish()
    }
}

impl<'a> CoverageEngine<'a> {
    /// Create an engine after validating the configuration.
    pub fn try_new(config: CoverageConfig, scene: &'a dyn SceneQuery) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            scene,
            directory: EmitterDirectory::default(),
            sampler: Box::new(RingSampler::new()),
        })
    }

    /// Replace the discovery rule.
    pub fn with_directory(mut self, directory: EmitterDirectory) -> Self {
        self.directory = directory;
        self
    }

    /// Replace the sampling strategy.
    pub fn with_sampler<S: RadialSampling + 'static>(mut self, sampler: S) -> Self {
        self.sampler = Box::new(sampler);
        self
    }

    /// Run one coverage pass.
    ///
    /// Fails fast on an invalid configuration; zero discovered emitters is a
    /// valid, empty run.
    pub fn run(&mut self, rng: &mut impl RngCore) -> Result<CoverageRun> {
        self.run_with_events(rng, &mut ())
    }

    /// Run one coverage pass, forwarding progress to an event sink.
    pub fn run_with_events(
        &mut self,
        rng: &mut impl RngCore,
        sink: &mut dyn EventSink,
    ) -> Result<CoverageRun> {
        self.config.validate()?;

        let emitters = self.directory.discover(self.scene);
        info!("Discovered {} visible emitter(s).", emitters.len());
        if emitters.is_empty() {
            warn!("No visible emitters found; producing an empty run.");
        }

        if sink.wants(CoverageEventKind::RunStarted) {
            sink.send(CoverageEvent::RunStarted {
                config: self.config.clone(),
                emitter_count: emitters.len(),
            });
        }
        if sink.wants(CoverageEventKind::EmitterDiscovered) {
            for (index, emitter) in emitters.iter().enumerate() {
                sink.send(CoverageEvent::EmitterDiscovered {
                    index,
                    id: emitter.id.clone(),
                    position: emitter.position,
                });
            }
        }

        let mut points: Vec<SamplePoint> =
            Vec::with_capacity(emitters.len() * self.config.points_per_emitter);
        let mut rejected = 0usize;

        for (emitter_index, emitter) in emitters.iter().enumerate() {
            let samples = self.sampler.generate(
                emitter.position,
                self.config.min_range,
                self.config.max_range,
                self.config.points_per_emitter,
                rng,
            );

            let mut kept = 0usize;
            for sample in samples {
                let position = Vec3::from(sample.position);
                if !position.is_finite() || !sample.distance.is_finite() || sample.distance < 0.0 {
                    rejected += 1;
                    if sink.wants(CoverageEventKind::SampleRejected) {
                        sink.send(CoverageEvent::SampleRejected {
                            emitter_index,
                            distance: sample.distance,
                        });
                    }
                    continue;
                }

                let strength =
                    linear_strength(sample.distance, self.config.min_range, self.config.max_range);
                points.push(SamplePoint {
                    emitter_index,
                    position,
                    distance: sample.distance,
                    strength,
                    color: gradient(strength),
                });
                kept += 1;
            }

            info!("Emitter '{}': kept {} sample(s).", emitter.id, kept);
            if sink.wants(CoverageEventKind::EmitterSampled) {
                sink.send(CoverageEvent::EmitterSampled {
                    index: emitter_index,
                    id: emitter.id.clone(),
                    samples: kept,
                });
            }
        }

        if rejected > 0 {
            warn!("Dropped {rejected} malformed sample(s).");
            if sink.wants(CoverageEventKind::Warning) {
                sink.send(CoverageEvent::Warning {
                    context: "run".into(),
                    message: format!("Dropped {rejected} malformed sample(s)"),
                });
            }
        }

        let stats = CoverageStatistics::collect(&emitters, &points, rejected);
        if sink.wants(CoverageEventKind::RunFinished) {
            sink.send(CoverageEvent::RunFinished {
                stats: stats.clone(),
            });
        }

        Ok(CoverageRun {
            config: self.config.clone(),
            emitters,
            points,
            stats,
        })
    }
}
