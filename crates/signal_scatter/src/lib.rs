#![forbid(unsafe_code)]
//! signal_scatter: deterministic RF coverage sampling, scoring, and coloring.
//!
//! Modules:
//! - scene: scene query seam and emitter discovery
//! - sampling: radial candidate generation (concentric rings)
//! - signal: distance-to-strength falloff model
//! - color: strength-to-color gradient and band classification
//! - coverage: engine orchestration, statistics, point-cloud output, events
//!
//! For examples and docs, see README and docs.rs.
pub mod color;
pub mod coverage;
pub mod error;
pub mod sampling;
pub mod scene;
pub mod signal;

/// Convenient re-exports for common types. Import with `use signal_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::color::{gradient, Band, Rgb};
    pub use crate::coverage::cloud::PointCloud;
    pub use crate::coverage::engine::{CoverageConfig, CoverageEngine, CoverageRun, SamplePoint};
    pub use crate::coverage::events::{
        CoverageEvent, CoverageEventKind, EventSink, FnSink, MultiSink, VecSink,
    };
    pub use crate::coverage::stats::{BandBreakdown, CoverageStatistics};
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{RadialSampling, RingSample, RingSampler, DEFAULT_RING_COUNT};
    pub use crate::scene::{
        Emitter, EmitterDirectory, EmitterId, MemoryScene, SceneObject, SceneQuery,
    };
    pub use crate::signal::linear_strength;
}
