//! Strength-to-color gradient and band classification.
//!
//! Colors run red (weak) through yellow to green (strong) with the yellow
//! breakpoint at strength 50. [`Band`] buckets strengths for statistics; the
//! same thresholds drive coloring and reporting so the two always agree.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with channels in `[0, 1]`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(value: Rgb) -> Self {
        value.to_array()
    }
}

/// Lower strength bound of the medium band.
pub const MEDIUM_BAND_FROM: f32 = 33.0;
/// Lower strength bound of the strong band.
pub const STRONG_BAND_FROM: f32 = 66.0;

/// Strength classification used by statistics and reporting.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Weak,
    Medium,
    Strong,
}

impl Band {
    /// Classify a strength score: weak `[0, 33)`, medium `[33, 66)`,
    /// strong `[66, 100]`.
    pub fn classify(strength: f32) -> Self {
        if strength < MEDIUM_BAND_FROM {
            Band::Weak
        } else if strength < STRONG_BAND_FROM {
            Band::Medium
        } else {
            Band::Strong
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Band::Weak => "weak",
            Band::Medium => "medium",
            Band::Strong => "strong",
        }
    }
}

/// Map a strength score to the red-yellow-green gradient.
///
/// The input is clamped to `[0, 100]`; non-finite input maps like 0. Both
/// branches meet at exactly `(1, 1, 0)` for strength 50.
pub fn gradient(strength: f32) -> Rgb {
    let strength = if strength.is_finite() {
        strength.clamp(0.0, 100.0)
    } else {
        0.0
    };

    if strength > 50.0 {
        // Yellow toward green: the red channel fades out.
        Rgb::new(1.0 - (strength - 50.0) / 50.0, 1.0, 0.0)
    } else {
        // Red toward yellow: the green channel fades in.
        Rgb::new(1.0, strength / 50.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints() {
        assert_eq!(gradient(0.0), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(gradient(100.0), Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn gradient_is_exactly_yellow_at_the_breakpoint() {
        assert_eq!(gradient(50.0), Rgb::new(1.0, 1.0, 0.0));

        // Both branches converge on (1, 1, 0) around the breakpoint.
        let below = gradient(50.0 - 1e-3);
        let above = gradient(50.0 + 1e-3);
        assert!((below.r - 1.0).abs() < 1e-4 && (below.g - 1.0).abs() < 1e-4);
        assert!((above.r - 1.0).abs() < 1e-4 && (above.g - 1.0).abs() < 1e-4);
    }

    #[test]
    fn gradient_clamps_out_of_range_input() {
        assert_eq!(gradient(-20.0), gradient(0.0));
        assert_eq!(gradient(140.0), gradient(100.0));
        assert_eq!(gradient(f32::NAN), gradient(0.0));
    }

    #[test]
    fn gradient_never_uses_the_blue_channel() {
        for strength in [0.0, 12.5, 33.0, 50.0, 66.0, 88.0, 100.0] {
            assert_eq!(gradient(strength).b, 0.0);
        }
    }

    #[test]
    fn classify_buckets_boundaries_per_interval_notation() {
        assert_eq!(Band::classify(0.0), Band::Weak);
        assert_eq!(Band::classify(32.9), Band::Weak);
        assert_eq!(Band::classify(33.0), Band::Medium);
        assert_eq!(Band::classify(65.9), Band::Medium);
        assert_eq!(Band::classify(66.0), Band::Strong);
        assert_eq!(Band::classify(100.0), Band::Strong);
    }

    #[test]
    fn labels_are_lowercase_names() {
        assert_eq!(Band::Weak.label(), "weak");
        assert_eq!(Band::Medium.label(), "medium");
        assert_eq!(Band::Strong.label(), "strong");
    }

    #[test]
    fn rgb_converts_to_array() {
        let color = Rgb::new(0.25, 0.5, 0.75);
        assert_eq!(color.to_array(), [0.25, 0.5, 0.75]);
        let array: [f32; 3] = color.into();
        assert_eq!(array, [0.25, 0.5, 0.75]);
    }
}
