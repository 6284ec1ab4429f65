//! Coverage pipeline: engine orchestration, statistics, point-cloud output, events.
pub mod cloud;
pub mod engine;
pub mod events;
pub mod stats;
