//! # automation-core
//!
//! Real-time breakpoint envelopes for parameter automation.
//!
//! This crate provides:
//! - **Easing kernels** - Polynomial, sine, pseudo-exponential, circular, elastic, sinc,
//!   staircase and bounce shapes
//! - **Easing directions** - Every kernel as ease-in, ease-out or ease-in-out
//! - **Easing indices** - A stable integer encoding for selecting a shape from a parameter stream
//! - **Envelope evaluation** - Allocation-free lookup and interpolation over borrowed breakpoints
//! - **Duration normalization** - Rescales segment durations to a unit timeline every tick
//!
//! ## Quick Start
//!
//! ```rust
//! use automation_core::{Automation, CurveType, Direction, EasingFunction};
//!
//! // Three breakpoints, two segments
//! let mut automation = Automation::new(3)?
//!     .with_values(&[0.0, 1.0, 0.25])
//!     .with_durations(&[3.0, 1.0])
//!     .with_easing(&[
//!         EasingFunction::new(CurveType::Sine, Direction::InOut, 0),
//!         EasingFunction::from_index(25), // Elastic 1 In
//!     ]);
//!
//! // Durations become [0.75, 0.25]
//! automation.normalize_durations();
//!
//! assert_eq!(automation.value_at(0.0), 0.0);
//! assert!((automation.value_at(0.375) - 0.5).abs() < 1e-9);
//! assert_eq!(automation.value_at(0.75), 1.0);
//! assert_eq!(automation.value_at(2.0), 0.25);
//! # Ok::<(), automation_core::AutomationError>(())
//! ```
//!
//! ## Borrowed Storage
//!
//! Hosts that already own their buffers evaluate them in place:
//!
//! ```rust
//! use automation_core::{normalize_durations, EasingFunction, EnvelopeView};
//!
//! let values = [1.0, 5.0, -3.0];
//! let mut durations = [2.0, 1.0];
//! let easing = [EasingFunction::linear(); 2];
//!
//! normalize_durations(&mut durations);
//! let envelope = EnvelopeView::new(&values, &durations, &easing)?;
//!
//! assert_eq!(envelope.evaluate(-1.0), 1.0);
//! assert!((envelope.evaluate(1.0 / 3.0) - 3.0).abs() < 1e-9);
//! assert_eq!(envelope.evaluate(1.5), -3.0);
//! # Ok::<(), automation_core::AutomationError>(())
//! ```
//!
//! ## Real-Time Safety
//!
//! [`EnvelopeView::evaluate`], [`normalize_durations`],
//! [`EasingFunction::from_index`] and the unchecked [`Automation`] mutators
//! never allocate, lock, log or fail. Malformed input resolves to a defined
//! value: negative durations count as zero, zero-length segments resolve to
//! their end value and unknown easing indices decode to Linear.

pub mod automation;
pub mod curve;
pub mod direction;
pub mod easing;
pub mod envelope;
pub mod error;
pub mod normalize;

pub use automation::Automation;
pub use curve::{CurveType, Kernel};
pub use direction::{Direction, Warp};
pub use easing::EasingFunction;
pub use envelope::{EnvelopeView, Location, SampleIterator};
pub use error::{AutomationError, Result};
pub use normalize::normalize_durations;

/// Prelude for common imports
pub mod prelude {
    pub use crate::automation::Automation;
    pub use crate::curve::CurveType;
    pub use crate::direction::{Direction, Warp};
    pub use crate::easing::EasingFunction;
    pub use crate::envelope::{EnvelopeView, Location};
    pub use crate::normalize::normalize_durations;
}
