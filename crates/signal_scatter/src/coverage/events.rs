//! Event types and sinks for observing coverage runs.
//!
//! This module defines [`CoverageEvent`] and a set of sinks and adapters to
//! emit, collect, or forward events while executing
//! [`crate::coverage::engine::CoverageEngine::run_with_events`].
use mint::Vector3;

use crate::coverage::engine::CoverageConfig;
use crate::coverage::stats::CoverageStatistics;
use crate::scene::EmitterId;

/// Discriminants for [`CoverageEvent`], used by [`EventSink::wants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverageEventKind {
    RunStarted,
    EmitterDiscovered,
    EmitterSampled,
    SampleRejected,
    RunFinished,
    Warning,
}

/// Describes events emitted during a coverage run.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum CoverageEvent {
    /// Emitted when a run starts, after discovery.
    RunStarted {
        /// The run configuration used.
        config: CoverageConfig,
        /// Number of visible emitters discovered.
        emitter_count: usize,
    },

    /// Emitted once per discovered emitter, in encounter order.
    EmitterDiscovered {
        /// Index of the emitter in the run.
        index: usize,
        /// The emitter id.
        id: EmitterId,
        /// World position of the emitter.
        position: Vector3<f32>,
    },

    /// Emitted after all samples of one emitter were scored and colored.
    EmitterSampled {
        /// Index of the emitter in the run.
        index: usize,
        /// The emitter id.
        id: EmitterId,
        /// Samples kept for this emitter.
        samples: usize,
    },

    /// Emitted when a malformed sample is dropped.
    SampleRejected {
        /// Index of the emitter the sample belonged to.
        emitter_index: usize,
        /// The offending distance value.
        distance: f32,
    },

    /// Emitted when the run finishes.
    RunFinished {
        /// Aggregate statistics for the run.
        stats: CoverageStatistics,
    },

    /// Non-fatal warning generated during a run.
    Warning {
        /// Context string (e.g. an emitter id).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

impl CoverageEvent {
    /// The kind of this event.
    pub fn kind(&self) -> CoverageEventKind {
        match self {
            CoverageEvent::RunStarted { .. } => CoverageEventKind::RunStarted,
            CoverageEvent::EmitterDiscovered { .. } => CoverageEventKind::EmitterDiscovered,
            CoverageEvent::EmitterSampled { .. } => CoverageEventKind::EmitterSampled,
            CoverageEvent::SampleRejected { .. } => CoverageEventKind::SampleRejected,
            CoverageEvent::RunFinished { .. } => CoverageEventKind::RunFinished,
            CoverageEvent::Warning { .. } => CoverageEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`CoverageEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: CoverageEvent);

    /// Whether the sink cares about events of `kind`. Senders may skip
    /// building events the sink does not want.
    fn wants(&self, kind: CoverageEventKind) -> bool {
        let _ = kind;
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: CoverageEvent) {}

    #[inline]
    fn wants(&self, _kind: CoverageEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(CoverageEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(CoverageEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(CoverageEvent),
{
    #[inline]
    fn send(&mut self, event: CoverageEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<CoverageEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<CoverageEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[CoverageEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: CoverageEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: CoverageEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let last_idx = self.sinks.len() - 1;
        for i in 0..last_idx {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: CoverageEventKind) -> bool {
        self.sinks.iter().any(|sink| sink.wants(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning() -> CoverageEvent {
        CoverageEvent::Warning {
            context: "ctx".into(),
            message: "msg".into(),
        }
    }

    #[test]
    fn event_kind_matches_variant() {
        assert_eq!(warning().kind(), CoverageEventKind::Warning);
        let finished = CoverageEvent::RunFinished {
            stats: CoverageStatistics::default(),
        };
        assert_eq!(finished.kind(), CoverageEventKind::RunFinished);
    }

    #[test]
    fn noop_sink_wants_nothing() {
        let sink = ();
        assert!(!sink.wants(CoverageEventKind::RunStarted));
        assert!(!sink.wants(CoverageEventKind::Warning));
    }

    #[test]
    fn vec_sink_collects_events() {
        let mut sink = VecSink::with_capacity(2);
        assert!(sink.is_empty());
        sink.send(warning());
        sink.send(warning());
        assert_eq!(sink.len(), 2);
        assert!(sink.wants(CoverageEventKind::SampleRejected));
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn multi_sink_fans_out_events() {
        let mut multi = MultiSink::with_sinks(vec![VecSink::new(), VecSink::new()]);
        multi.send(warning());
        assert_eq!(multi.len(), 2);
        assert_eq!(multi.sinks[0].len(), 1);
        assert_eq!(multi.sinks[1].len(), 1);
    }

    #[test]
    fn empty_multi_sink_wants_nothing() {
        let multi: MultiSink<VecSink> = MultiSink::new();
        assert!(multi.is_empty());
        assert!(!multi.wants(CoverageEventKind::RunStarted));
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_event| {
            count += 1;
        });
        sink.send(warning());
        assert_eq!(count, 1);
    }
}
