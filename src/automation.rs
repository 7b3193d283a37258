//! Host-side automation model
//!
//! [`Automation`] owns the breakpoint storage a host would otherwise
//! allocate itself. The storage is sized once at construction and never
//! resized; every tick the host overwrites it in place, normalizes the
//! durations and evaluates.
//!
//! Mutators taking an index silently ignore indices past the end, so they
//! are safe to drive straight from a parameter stream. The `try_` variants
//! report them instead.

use crate::easing::EasingFunction;
use crate::envelope::{EnvelopeView, SampleIterator};
use crate::error::{AutomationError, Result};
use crate::normalize::normalize_durations;
use serde::{Deserialize, Serialize};

/// Fixed-size breakpoint envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AutomationData")]
pub struct Automation {
    values: Vec<f64>,
    durations: Vec<f64>,
    easing_functions: Vec<EasingFunction>,
}

impl Automation {
    /// Create an envelope with `num_breakpoints` zero values, zero-length
    /// segments and linear easing.
    pub fn new(num_breakpoints: usize) -> Result<Self> {
        if num_breakpoints == 0 {
            return Err(AutomationError::NoBreakpoints);
        }
        let num_segments = num_breakpoints - 1;
        tracing::debug!(num_breakpoints, "allocating automation envelope");

        Ok(Self {
            values: vec![0.0; num_breakpoints],
            durations: vec![0.0; num_segments],
            easing_functions: vec![EasingFunction::linear(); num_segments],
        })
    }

    /// Seed breakpoint values; extra entries are ignored
    #[must_use]
    pub fn with_values(mut self, values: &[f64]) -> Self {
        copy_prefix(&mut self.values, values);
        self
    }

    /// Seed segment durations; extra entries are ignored
    #[must_use]
    pub fn with_durations(mut self, durations: &[f64]) -> Self {
        copy_prefix(&mut self.durations, durations);
        self
    }

    /// Seed per-segment easing; extra entries are ignored
    #[must_use]
    pub fn with_easing(mut self, easing_functions: &[EasingFunction]) -> Self {
        copy_prefix(&mut self.easing_functions, easing_functions);
        self
    }

    pub fn num_breakpoints(&self) -> usize {
        self.values.len()
    }

    pub fn num_segments(&self) -> usize {
        self.durations.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    pub fn easing_functions(&self) -> &[EasingFunction] {
        &self.easing_functions
    }

    #[inline]
    pub fn set_breakpoint_value(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
    }

    #[inline]
    pub fn set_breakpoint_duration(&mut self, index: usize, duration: f64) {
        if let Some(slot) = self.durations.get_mut(index) {
            *slot = duration;
        }
    }

    #[inline]
    pub fn set_easing_function(&mut self, index: usize, easing: EasingFunction) {
        if let Some(slot) = self.easing_functions.get_mut(index) {
            *slot = easing;
        }
    }

    /// Select a segment's easing by its encoded index
    #[inline]
    pub fn set_easing_index(&mut self, index: usize, easing_index: usize) {
        self.set_easing_function(index, EasingFunction::from_index(easing_index));
    }

    pub fn try_set_breakpoint_value(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.values.len();
        let slot = self.values.get_mut(index).ok_or_else(|| {
            tracing::warn!(index, len, "breakpoint value index out of range");
            AutomationError::BreakpointOutOfRange { index, len }
        })?;
        *slot = value;
        Ok(())
    }

    pub fn try_set_breakpoint_duration(&mut self, index: usize, duration: f64) -> Result<()> {
        let len = self.durations.len();
        let slot = self.durations.get_mut(index).ok_or_else(|| {
            tracing::warn!(index, len, "segment duration index out of range");
            AutomationError::BreakpointOutOfRange { index, len }
        })?;
        *slot = duration;
        Ok(())
    }

    pub fn try_set_easing_index(&mut self, index: usize, easing_index: usize) -> Result<()> {
        let easing = EasingFunction::try_from_index(easing_index)?;
        let len = self.easing_functions.len();
        let slot = self.easing_functions.get_mut(index).ok_or_else(|| {
            tracing::warn!(index, len, "segment easing index out of range");
            AutomationError::BreakpointOutOfRange { index, len }
        })?;
        *slot = easing;
        Ok(())
    }

    /// Overwrite values and durations from one tick of host input.
    ///
    /// `frame` holds the breakpoint values followed by the raw segment
    /// durations. A short frame updates what it covers, a long one is cut.
    #[inline]
    pub fn load(&mut self, frame: &[f64]) {
        let split = frame.len().min(self.values.len());
        let (values, durations) = frame.split_at(split);
        copy_prefix(&mut self.values, values);
        copy_prefix(&mut self.durations, durations);
    }

    #[inline]
    pub fn normalize_durations(&mut self) {
        normalize_durations(&mut self.durations);
    }

    /// Load a frame, normalize and evaluate: one host tick.
    #[inline]
    pub fn process(&mut self, frame: &[f64], time: f64) -> f64 {
        self.load(frame);
        self.normalize_durations();
        self.value_at(time)
    }

    pub fn view(&self) -> EnvelopeView<'_> {
        EnvelopeView::from_parts(&self.values, &self.durations, &self.easing_functions)
    }

    #[inline]
    pub fn value_at(&self, time: f64) -> f64 {
        self.view().evaluate(time)
    }

    pub fn total_duration(&self) -> f64 {
        self.view().total_duration()
    }

    /// Evaluate once per entry of `times`; stops at the shorter slice
    pub fn render(&self, times: &[f64], out: &mut [f64]) {
        let envelope = self.view();
        for (sample, &time) in out.iter_mut().zip(times) {
            *sample = envelope.evaluate(time);
        }
    }

    pub fn iter_samples(&self, sample_rate: f64, duration: f64) -> SampleIterator<'_> {
        self.view().iter_samples(sample_rate, duration)
    }
}

#[inline]
fn copy_prefix<T: Copy>(target: &mut [T], source: &[T]) {
    let len = target.len().min(source.len());
    target[..len].copy_from_slice(&source[..len]);
}

/// Unchecked serialized form of [`Automation`]
#[derive(Deserialize)]
struct AutomationData {
    values: Vec<f64>,
    durations: Vec<f64>,
    easing_functions: Vec<EasingFunction>,
}

impl TryFrom<AutomationData> for Automation {
    type Error = AutomationError;

    fn try_from(data: AutomationData) -> Result<Self> {
        EnvelopeView::new(&data.values, &data.durations, &data.easing_functions)?;
        Ok(Self {
            values: data.values,
            durations: data.durations,
            easing_functions: data.easing_functions,
        })
    }
}
