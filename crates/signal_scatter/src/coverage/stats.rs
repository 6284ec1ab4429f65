//! Aggregate statistics over one coverage run.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Band;
use crate::coverage::engine::SamplePoint;
use crate::scene::{Emitter, EmitterId};

/// Sample counts per strength band.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandBreakdown {
    /// Samples with strength in `[0, 33)`.
    pub weak: usize,
    /// Samples with strength in `[33, 66)`.
    pub medium: usize,
    /// Samples with strength in `[66, 100]`.
    pub strong: usize,
}

impl BandBreakdown {
    /// Total samples across all bands.
    pub fn total(&self) -> usize {
        self.weak + self.medium + self.strong
    }

    /// Count for one band.
    pub fn count(&self, band: Band) -> usize {
        match band {
            Band::Weak => self.weak,
            Band::Medium => self.medium,
            Band::Strong => self.strong,
        }
    }

    fn bump(&mut self, band: Band) {
        match band {
            Band::Weak => self.weak += 1,
            Band::Medium => self.medium += 1,
            Band::Strong => self.strong += 1,
        }
    }
}

/// Aggregate statistics for one coverage run.
///
/// Derived entirely from the kept samples of a single run and recomputed
/// every run. All strength fields are zero on an empty run.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageStatistics {
    /// Total samples kept in the run.
    pub total_points: usize,
    /// Kept samples per emitter, in emitter order.
    pub per_emitter: Vec<(EmitterId, usize)>,
    /// Lowest strength over all samples.
    pub min_strength: f32,
    /// Highest strength over all samples.
    pub max_strength: f32,
    /// Arithmetic mean strength.
    pub mean_strength: f32,
    /// Per-band sample counts.
    pub bands: BandBreakdown,
    /// Malformed samples dropped during the run.
    pub rejected: usize,
}

impl CoverageStatistics {
    /// Aggregate statistics from the kept samples of one run.
    pub fn collect(emitters: &[Emitter], points: &[SamplePoint], rejected: usize) -> Self {
        let mut per_emitter: Vec<(EmitterId, usize)> =
            emitters.iter().map(|e| (e.id.clone(), 0)).collect();
        let mut bands = BandBreakdown::default();
        let mut min_strength = f32::INFINITY;
        let mut max_strength = f32::NEG_INFINITY;
        let mut sum = 0.0f64;

        for point in points {
            if let Some(entry) = per_emitter.get_mut(point.emitter_index) {
                entry.1 += 1;
            }
            bands.bump(Band::classify(point.strength));
            min_strength = min_strength.min(point.strength);
            max_strength = max_strength.max(point.strength);
            sum += point.strength as f64;
        }

        let mean_strength = if points.is_empty() {
            min_strength = 0.0;
            max_strength = 0.0;
            0.0
        } else {
            (sum / points.len() as f64) as f32
        };

        Self {
            total_points: points.len(),
            per_emitter,
            min_strength,
            max_strength,
            mean_strength,
            bands,
            rejected,
        }
    }

    /// Percentage of kept samples in a band; 0 when the run is empty.
    pub fn band_percentage(&self, band: Band) -> f32 {
        if self.total_points == 0 {
            return 0.0;
        }
        self.bands.count(band) as f32 * 100.0 / self.total_points as f32
    }
}

impl fmt::Display for CoverageStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total points: {}", self.total_points)?;
        for (id, count) in &self.per_emitter {
            writeln!(f, "  {id}: {count} point(s)")?;
        }
        writeln!(
            f,
            "strength min/max/mean: {:.1} / {:.1} / {:.1}",
            self.min_strength, self.max_strength, self.mean_strength
        )?;
        if self.rejected > 0 {
            writeln!(f, "rejected samples: {}", self.rejected)?;
        }
        writeln!(
            f,
            "weak   (<33):  {} ({:.1}%)",
            self.bands.weak,
            self.band_percentage(Band::Weak)
        )?;
        writeln!(
            f,
            "medium (33-66): {} ({:.1}%)",
            self.bands.medium,
            self.band_percentage(Band::Medium)
        )?;
        write!(
            f,
            "strong (>=66): {} ({:.1}%)",
            self.bands.strong,
            self.band_percentage(Band::Strong)
        )
    }
}
