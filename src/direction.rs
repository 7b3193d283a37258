//! Easing direction
//!
//! A kernel only describes how a transition eases in. Its ease-out and
//! ease-in-out forms are reflections of that one shape:
//!
//! | Direction | Warped progress |
//! |-----------|-----------------|
//! | In        | `k(t)` |
//! | Out       | `1 - k(1 - t)` |
//! | InOut     | `k(2t) / 2` below the midpoint, `1 - k(2(1 - t)) / 2` from it on |

use serde::{Deserialize, Serialize};

/// An ease-in time warp over `[0, 1]`
pub trait Warp {
    fn ease_in(&self, t: f64) -> f64;
}

impl<F> Warp for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn ease_in(&self, t: f64) -> f64 {
        self(t)
    }
}

/// Which end of a transition the kernel's shape is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    In,
    Out,
    InOut,
}

impl Direction {
    /// Warp `t` through `kernel` in this direction.
    #[must_use]
    #[inline]
    pub fn apply<W: Warp + ?Sized>(self, kernel: &W, t: f64) -> f64 {
        match self {
            Self::In => kernel.ease_in(t),
            Self::Out => 1.0 - kernel.ease_in(1.0 - t),
            Self::InOut => {
                if t < 0.5 {
                    kernel.ease_in(2.0 * t) / 2.0
                } else {
                    1.0 - kernel.ease_in(2.0 * (1.0 - t)) / 2.0
                }
            }
        }
    }

    /// Directions in index order
    #[must_use]
    pub fn all() -> &'static [Direction] {
        &[Self::In, Self::Out, Self::InOut]
    }

    /// Position within [`Direction::all`]
    #[must_use]
    #[inline]
    pub fn ordinal(self) -> usize {
        match self {
            Self::In => 0,
            Self::Out => 1,
            Self::InOut => 2,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::In => "In",
            Self::Out => "Out",
            Self::InOut => "In-Out",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{CurveType, Kernel};
    use assert_approx_eq::assert_approx_eq;

    fn kernels() -> Vec<Kernel> {
        CurveType::all()
            .iter()
            .filter(|curve| !curve.ignores_direction())
            .flat_map(|&curve| {
                curve
                    .shape_range()
                    .unwrap_or(0..=0)
                    .map(move |shape| Kernel::new(curve, shape))
            })
            .collect()
    }

    #[test]
    fn test_closures_are_warps() {
        let square = |t: f64| t * t;
        assert_approx_eq!(Direction::In.apply(&square, 0.5), 0.25);
        assert_approx_eq!(Direction::Out.apply(&square, 0.5), 0.75);
        assert_approx_eq!(Direction::InOut.apply(&square, 0.25), 0.125);
        assert_approx_eq!(Direction::InOut.apply(&square, 0.75), 0.875);
    }

    #[test]
    fn test_out_reflects_in() {
        for kernel in kernels() {
            for i in 0..=20 {
                let t = f64::from(i) / 20.0;
                assert_approx_eq!(
                    Direction::Out.apply(&kernel, t),
                    1.0 - Direction::In.apply(&kernel, 1.0 - t),
                    1e-12
                );
            }
        }
    }

    #[test]
    fn test_in_out_is_point_symmetric() {
        for kernel in kernels() {
            // odd multiples of 1/40 keep 1 - 2 * eps off every stair edge
            for i in 0..10 {
                let eps = f64::from(2 * i + 1) / 40.0;
                assert_approx_eq!(
                    Direction::InOut.apply(&kernel, 0.5 - eps),
                    1.0 - Direction::InOut.apply(&kernel, 0.5 + eps),
                    1e-12
                );
            }
        }
    }

    #[test]
    fn test_in_out_halves() {
        let kernel = Kernel::new(CurveType::Cubic, 0);
        assert_approx_eq!(Direction::InOut.apply(&kernel, 0.0), 0.0);
        assert_approx_eq!(Direction::InOut.apply(&kernel, 0.5), 0.5);
        assert_approx_eq!(Direction::InOut.apply(&kernel, 1.0), 1.0);
    }

    #[test]
    fn test_ordinals_follow_all() {
        for (i, direction) in Direction::all().iter().enumerate() {
            assert_eq!(direction.ordinal(), i);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::InOut.to_string(), "In-Out");
        assert_eq!(Direction::default(), Direction::In);
    }
}
