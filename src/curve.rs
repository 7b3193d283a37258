//! Easing kernels
//!
//! Every kernel is the ease-in shape of its family: a map from progress in
//! `[0, 1]` to warped progress with `kernel(0) == 0`. The out and in-out
//! variants are derived from it by [`Direction`](crate::Direction).

use crate::direction::Warp;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::ops::RangeInclusive;

/// Coefficient of restitution of the bounce kernel
const BOUNCE_RESTITUTION: f64 = 0.6;

/// Below this magnitude `sin(s) / s` is replaced by its limit
const SINC_EPSILON: f64 = 1e-9;

/// Kernel family of an easing function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurveType {
    #[default]
    Linear,
    /// Holds the segment's start value
    FirstValue,
    /// Jumps straight to the segment's end value
    NextValue,
    Step,
    Quadratic,
    Cubic,
    Quartic,
    Quintic,
    Sine,
    PseudoExponential,
    Circular,
    /// Decaying cosine, shape parameter is the crossing count
    Elastic,
    /// `sin(s) / s`, shape parameter is the crossing count
    Sinc,
    /// Quantized ramp, shape parameter is the step count
    Staircase,
    /// Ballistic bounces, shape parameter is the bounce count
    Bounce,
}

impl CurveType {
    #[must_use]
    pub fn all() -> &'static [CurveType] {
        &[
            Self::Linear,
            Self::FirstValue,
            Self::NextValue,
            Self::Step,
            Self::Quadratic,
            Self::Cubic,
            Self::Quartic,
            Self::Quintic,
            Self::Sine,
            Self::PseudoExponential,
            Self::Circular,
            Self::Elastic,
            Self::Sinc,
            Self::Staircase,
            Self::Bounce,
        ]
    }

    /// Families that bypass the direction combinator
    #[must_use]
    #[inline]
    pub fn ignores_direction(&self) -> bool {
        matches!(self, Self::Linear | Self::FirstValue | Self::NextValue)
    }

    #[must_use]
    #[inline]
    pub fn is_parameterized(&self) -> bool {
        self.shape_range().is_some()
    }

    /// Valid shape parameters of a parameterized family
    #[must_use]
    pub fn shape_range(&self) -> Option<RangeInclusive<u8>> {
        match self {
            Self::Elastic | Self::Sinc | Self::Bounce => Some(1..=8),
            Self::Staircase => Some(2..=8),
            _ => None,
        }
    }

    /// Pull `shape` into this family's range; 0 for families without one
    #[must_use]
    #[inline]
    pub fn clamp_shape(&self, shape: u8) -> u8 {
        match self.shape_range() {
            Some(range) => shape.clamp(*range.start(), *range.end()),
            None => 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CurveType::Linear => "Linear",
            CurveType::FirstValue => "First Value",
            CurveType::NextValue => "Next Value",
            CurveType::Step => "Step",
            CurveType::Quadratic => "Quadratic",
            CurveType::Cubic => "Cubic",
            CurveType::Quartic => "Quartic",
            CurveType::Quintic => "Quintic",
            CurveType::Sine => "Sine",
            CurveType::PseudoExponential => "Pseudo-Exponential",
            CurveType::Circular => "Circular",
            CurveType::Elastic => "Elastic",
            CurveType::Sinc => "Sinc",
            CurveType::Staircase => "Staircase",
            CurveType::Bounce => "Bounce",
        }
    }
}

impl std::fmt::Display for CurveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ease-in shape of one family with its shape parameter bound
///
/// For `FirstValue` and `NextValue` the kernel is the constant 0 and 1;
/// those two, like `Linear`, are never run through a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    curve: CurveType,
    shape: f64,
}

impl Kernel {
    #[must_use]
    pub fn new(curve: CurveType, shape: u8) -> Self {
        Self {
            curve,
            shape: f64::from(curve.clamp_shape(shape)),
        }
    }

    #[must_use]
    pub fn curve(&self) -> CurveType {
        self.curve
    }
}

impl Warp for Kernel {
    #[inline]
    fn ease_in(&self, t: f64) -> f64 {
        match self.curve {
            CurveType::Linear => t,
            CurveType::FirstValue | CurveType::Step => 0.0,
            CurveType::NextValue => 1.0,
            CurveType::Quadratic => t * t,
            CurveType::Cubic => t * t * t,
            CurveType::Quartic => t * t * t * t,
            CurveType::Quintic => t * t * t * t * t,
            CurveType::Sine => 1.0 - (t * FRAC_PI_2).cos(),
            CurveType::PseudoExponential => ((10.0 * t).exp2() - 1.0) / (10.0_f64.exp2() - 1.0),
            // rounding can push t a hair past 1
            CurveType::Circular => 1.0 - (1.0 - t * t).max(0.0).sqrt(),
            CurveType::Elastic => elastic(t, self.shape),
            CurveType::Sinc => sinc((1.0 - t) * self.shape * PI),
            CurveType::Staircase => (t * self.shape).floor() / self.shape,
            CurveType::Bounce => bounce(t, self.shape),
        }
    }
}

/// Decaying cosine with `crossings` zero crossings, 0 at `t = 0` and 1 at `t = 1`.
#[inline]
fn elastic(t: f64, crossings: f64) -> f64 {
    ((1.0 - t) * TAU * (crossings / 2.0 + 0.25)).cos() * (5.0 * (t - 1.0)).exp2()
}

#[inline]
fn sinc(s: f64) -> f64 {
    if s.abs() < SINC_EPSILON {
        1.0
    } else {
        s.sin() / s
    }
}

/// Parabolic arcs of a ball bouncing with restitution `k`.
///
/// Arc `p` lasts `k^p` and peaks at `k^2p`. Progress runs backwards in time
/// from the peak of the first arc (t = 1) to the landing after the last one
/// (t = 0).
fn bounce(t: f64, bounces: f64) -> f64 {
    let k = BOUNCE_RESTITUTION;
    let num_segments = bounces + 1.0;
    let total_duration = (1.0 - k.powf(num_segments)) / (1.0 - k) - 0.5;
    let tn = (1.0 - t) * total_duration + 0.5;

    let arc = ((1.0 - tn * (1.0 - k)).ln() / k.ln()).floor();
    let arc_duration = k.powf(arc);
    let arc_start = (1.0 - arc_duration) / (1.0 - k);
    let phase = (tn - arc_start) / arc_duration;

    (1.0 - (2.0 * phase - 1.0).powi(2)) * (k * k).powf(arc)
}
