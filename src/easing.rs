//! Easing function descriptors and their integer encoding
//!
//! An [`EasingFunction`] names one fully specified easing behavior: a kernel
//! family, a direction and, for the parameterized families, a shape
//! parameter. Hosts usually select one through a single integer (for example
//! a control-rate parameter), so every descriptor that can be transported
//! has a stable index:
//!
//! | Index    | Descriptors |
//! |----------|-------------|
//! | 0        | Linear |
//! | 1..=24   | Step, Quadratic, Sine, Cubic, Quartic, Quintic, Pseudo-Exponential, Circular; In, Out, In-Out each |
//! | 25..=48  | Elastic 1..=8, each In, Out, In-Out |
//! | 49..=72  | Sinc 1..=8 |
//! | 73..=93  | Staircase 2..=8 |
//! | 94..=117 | Bounce 1..=8 |
//!
//! Anything past the table decodes to Linear.

use crate::curve::{CurveType, Kernel};
use crate::direction::Direction;
use crate::error::{AutomationError, Result};
use serde::{Deserialize, Serialize};

/// Unparameterized families in index order
const STANDARD_CURVES: [CurveType; 8] = [
    CurveType::Step,
    CurveType::Quadratic,
    CurveType::Sine,
    CurveType::Cubic,
    CurveType::Quartic,
    CurveType::Quintic,
    CurveType::PseudoExponential,
    CurveType::Circular,
];

/// Parameterized families in index order
const PARAMETERIZED_CURVES: [CurveType; 4] = [
    CurveType::Elastic,
    CurveType::Sinc,
    CurveType::Staircase,
    CurveType::Bounce,
];

const DIRECTIONS: usize = 3;

/// One fully specified easing behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EasingFunction {
    curve: CurveType,
    direction: Direction,
    shape: u8,
}

impl EasingFunction {
    /// Number of encoded indices
    pub const COUNT: usize = 118;

    /// `shape` is clamped into the family's range, and zeroed for families
    /// that take no parameter.
    #[must_use]
    pub fn new(curve: CurveType, direction: Direction, shape: u8) -> Self {
        Self {
            curve,
            direction,
            shape: curve.clamp_shape(shape),
        }
    }

    #[must_use]
    pub const fn linear() -> Self {
        Self {
            curve: CurveType::Linear,
            direction: Direction::In,
            shape: 0,
        }
    }

    #[must_use]
    pub fn curve(&self) -> CurveType {
        self.curve
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn shape(&self) -> u8 {
        self.curve.clamp_shape(self.shape)
    }

    /// Decode an easing index, falling back to Linear past the table.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        let Some(mut offset) = index.checked_sub(1) else {
            return Self::linear();
        };

        if offset < STANDARD_CURVES.len() * DIRECTIONS {
            return Self {
                curve: STANDARD_CURVES[offset / DIRECTIONS],
                direction: Direction::all()[offset % DIRECTIONS],
                shape: 0,
            };
        }
        offset -= STANDARD_CURVES.len() * DIRECTIONS;

        for curve in PARAMETERIZED_CURVES {
            let Some(shapes) = curve.shape_range() else {
                continue;
            };
            let span = shapes.len() * DIRECTIONS;
            if offset < span {
                return Self {
                    curve,
                    direction: Direction::all()[offset % DIRECTIONS],
                    // a family spans at most 8 shapes
                    shape: shapes.start() + (offset / DIRECTIONS) as u8,
                };
            }
            offset -= span;
        }

        Self::linear()
    }

    /// Decode an easing index, reporting indices past the table.
    pub fn try_from_index(index: usize) -> Result<Self> {
        if index < Self::COUNT {
            Ok(Self::from_index(index))
        } else {
            tracing::debug!(index, "easing index out of range");
            Err(AutomationError::EasingIndexOutOfRange {
                index,
                count: Self::COUNT,
            })
        }
    }

    /// Decode one sample of a parameter stream.
    ///
    /// The value is truncated toward zero. Negative, NaN and out-of-range
    /// values decode to Linear.
    #[must_use]
    #[inline]
    pub fn from_parameter(value: f32) -> Self {
        if value >= 0.0 {
            Self::from_index(value as usize)
        } else {
            Self::linear()
        }
    }

    /// Index that decodes back to this descriptor
    ///
    /// Linear encodes as 0 whatever its direction. `FirstValue` and
    /// `NextValue` are not part of the table.
    #[must_use]
    pub fn to_index(&self) -> Option<usize> {
        let direction = self.direction.ordinal();
        match self.curve {
            CurveType::Linear => return Some(0),
            CurveType::FirstValue | CurveType::NextValue => return None,
            _ => {}
        }

        if let Some(position) = STANDARD_CURVES.iter().position(|&c| c == self.curve) {
            return Some(1 + position * DIRECTIONS + direction);
        }

        let mut base = 1 + STANDARD_CURVES.len() * DIRECTIONS;
        for curve in PARAMETERIZED_CURVES {
            let shapes = curve.shape_range()?;
            if curve == self.curve {
                let step = usize::from(self.shape() - shapes.start());
                return Some(base + step * DIRECTIONS + direction);
            }
            base += shapes.len() * DIRECTIONS;
        }

        None
    }

    /// Every encoded descriptor in index order
    pub fn all() -> impl Iterator<Item = EasingFunction> {
        (0..Self::COUNT).map(Self::from_index)
    }

    /// Warp normalized progress `t`.
    #[must_use]
    #[inline]
    pub fn ease(&self, t: f64) -> f64 {
        match self.curve {
            CurveType::Linear => t,
            CurveType::FirstValue => 0.0,
            CurveType::NextValue => 1.0,
            curve => self.direction.apply(&Kernel::new(curve, self.shape), t),
        }
    }

    /// Interpolate from `start` to `end` at progress `t`.
    #[must_use]
    #[inline]
    pub fn interpolate(&self, start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * self.ease(t)
    }
}

impl TryFrom<usize> for EasingFunction {
    type Error = AutomationError;

    fn try_from(index: usize) -> Result<Self> {
        Self::try_from_index(index)
    }
}

impl From<CurveType> for EasingFunction {
    fn from(curve: CurveType) -> Self {
        Self::new(curve, Direction::In, 0)
    }
}

impl std::fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.curve.ignores_direction() {
            return write!(f, "{}", self.curve);
        }
        if self.curve.is_parameterized() {
            write!(f, "{} {} {}", self.curve, self.shape(), self.direction)
        } else {
            write!(f, "{} {}", self.curve, self.direction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_index_zero_is_linear() {
        assert_eq!(EasingFunction::from_index(0), EasingFunction::linear());
    }

    #[test]
    fn test_standard_block() {
        assert_eq!(
            EasingFunction::from_index(1),
            EasingFunction::new(CurveType::Step, Direction::In, 0)
        );
        assert_eq!(
            EasingFunction::from_index(6),
            EasingFunction::new(CurveType::Quadratic, Direction::InOut, 0)
        );
        assert_eq!(
            EasingFunction::from_index(8),
            EasingFunction::new(CurveType::Sine, Direction::Out, 0)
        );
        assert_eq!(
            EasingFunction::from_index(24),
            EasingFunction::new(CurveType::Circular, Direction::InOut, 0)
        );
    }

    #[test]
    fn test_first_parameterized_entry() {
        let easing = EasingFunction::from_index(25);
        assert_eq!(easing.curve(), CurveType::Elastic);
        assert_eq!(easing.direction(), Direction::In);
        assert_eq!(easing.shape(), 1);
    }

    #[test]
    fn test_parameterized_blocks() {
        assert_eq!(
            EasingFunction::from_index(29),
            EasingFunction::new(CurveType::Elastic, Direction::Out, 2)
        );
        assert_eq!(
            EasingFunction::from_index(49),
            EasingFunction::new(CurveType::Sinc, Direction::In, 1)
        );
        assert_eq!(
            EasingFunction::from_index(73),
            EasingFunction::new(CurveType::Staircase, Direction::In, 2)
        );
        assert_eq!(
            EasingFunction::from_index(93),
            EasingFunction::new(CurveType::Staircase, Direction::InOut, 8)
        );
        assert_eq!(
            EasingFunction::from_index(94),
            EasingFunction::new(CurveType::Bounce, Direction::In, 1)
        );
        assert_eq!(
            EasingFunction::from_index(117),
            EasingFunction::new(CurveType::Bounce, Direction::InOut, 8)
        );
    }

    #[test]
    fn test_out_of_range_falls_back_to_linear() {
        assert_eq!(EasingFunction::from_index(118), EasingFunction::linear());
        assert_eq!(EasingFunction::from_index(usize::MAX), EasingFunction::linear());
    }

    #[test]
    fn test_try_from_index() {
        assert!(EasingFunction::try_from_index(117).is_ok());
        assert_eq!(
            EasingFunction::try_from(118),
            Err(AutomationError::EasingIndexOutOfRange {
                index: 118,
                count: 118
            })
        );
    }

    #[test]
    fn test_from_parameter() {
        assert_eq!(
            EasingFunction::from_parameter(25.7),
            EasingFunction::from_index(25)
        );
        assert_eq!(EasingFunction::from_parameter(-3.0), EasingFunction::linear());
        assert_eq!(EasingFunction::from_parameter(f32::NAN), EasingFunction::linear());
        assert_eq!(
            EasingFunction::from_parameter(f32::INFINITY),
            EasingFunction::linear()
        );
    }

    #[test]
    fn test_every_index_encodes_back() {
        for (index, easing) in EasingFunction::all().enumerate() {
            assert_eq!(easing.to_index(), Some(index), "{easing}");
        }
    }

    #[test]
    fn test_unindexed_curves() {
        assert_eq!(EasingFunction::from(CurveType::FirstValue).to_index(), None);
        assert_eq!(EasingFunction::from(CurveType::NextValue).to_index(), None);
        assert_eq!(
            EasingFunction::new(CurveType::Linear, Direction::Out, 0).to_index(),
            Some(0)
        );
    }

    #[test]
    fn test_shape_is_clamped() {
        let easing = EasingFunction::new(CurveType::Staircase, Direction::In, 0);
        assert_eq!(easing.shape(), 2);
        let easing = EasingFunction::new(CurveType::Quadratic, Direction::In, 5);
        assert_eq!(easing.shape(), 0);
    }

    #[test]
    fn test_ease_bypasses_direction() {
        for &direction in Direction::all() {
            let linear = EasingFunction::new(CurveType::Linear, direction, 0);
            let first = EasingFunction::new(CurveType::FirstValue, direction, 0);
            let next = EasingFunction::new(CurveType::NextValue, direction, 0);
            assert_eq!(linear.ease(0.3), 0.3);
            assert_eq!(first.ease(0.3), 0.0);
            assert_eq!(next.ease(0.3), 1.0);
        }
    }

    #[test]
    fn test_ease_applies_direction() {
        let quad_out = EasingFunction::new(CurveType::Quadratic, Direction::Out, 0);
        assert_approx_eq!(quad_out.ease(0.5), 0.75);
        assert_approx_eq!(quad_out.interpolate(10.0, 20.0, 0.5), 17.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(EasingFunction::linear().to_string(), "Linear");
        assert_eq!(EasingFunction::from_index(25).to_string(), "Elastic 1 In");
        assert_eq!(EasingFunction::from_index(9).to_string(), "Sine In-Out");
    }

    #[test]
    fn test_serde_round_trip() {
        let easing = EasingFunction::new(CurveType::Bounce, Direction::Out, 3);
        let json = serde_json::to_string(&easing).unwrap();
        let decoded: EasingFunction = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, easing);
    }
}
