//! Breakpoint envelope evaluation
//!
//! An envelope is `N` breakpoint values joined by `N - 1` segments. Segment
//! `i` runs from `values[i]` to `values[i + 1]` over `durations[i]`, shaped
//! by `easing_functions[i]`. Segments are laid end to end starting at time 0.
//!
//! The storage belongs to the host. [`EnvelopeView`] only borrows the three
//! parallel slices for the length of a call, so evaluating never allocates.

use crate::easing::EasingFunction;
use crate::error::{AutomationError, Result};

/// Where a query time falls within an envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Location {
    /// At or before time 0
    Start,
    /// Inside segment `index`, `progress` of the way through it
    Segment { index: usize, progress: f64 },
    /// Reached segment `index`, which has no length and so is already over
    Jump { index: usize },
    /// Past the last segment
    End,
}

/// Borrowed view over an envelope's breakpoints
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeView<'a> {
    values: &'a [f64],
    durations: &'a [f64],
    easing_functions: &'a [EasingFunction],
}

impl<'a> EnvelopeView<'a> {
    /// Check that the slices describe `values.len() - 1` segments.
    pub fn new(
        values: &'a [f64],
        durations: &'a [f64],
        easing_functions: &'a [EasingFunction],
    ) -> Result<Self> {
        if values.is_empty() {
            return Err(AutomationError::NoBreakpoints);
        }
        let segments = values.len() - 1;
        if durations.len() != segments || easing_functions.len() != segments {
            return Err(AutomationError::SegmentCountMismatch {
                values: values.len(),
                durations: durations.len(),
                easing_functions: easing_functions.len(),
            });
        }
        Ok(Self::from_parts(values, durations, easing_functions))
    }

    /// Caller guarantees the shape checked by [`EnvelopeView::new`].
    pub(crate) fn from_parts(
        values: &'a [f64],
        durations: &'a [f64],
        easing_functions: &'a [EasingFunction],
    ) -> Self {
        debug_assert!(!values.is_empty());
        debug_assert_eq!(durations.len() + 1, values.len());
        debug_assert_eq!(easing_functions.len() + 1, values.len());
        Self {
            values,
            durations,
            easing_functions,
        }
    }

    pub fn values(&self) -> &'a [f64] {
        self.values
    }

    pub fn durations(&self) -> &'a [f64] {
        self.durations
    }

    pub fn easing_functions(&self) -> &'a [EasingFunction] {
        self.easing_functions
    }

    pub fn num_breakpoints(&self) -> usize {
        self.values.len()
    }

    pub fn num_segments(&self) -> usize {
        self.durations.len()
    }

    /// Time at which the last segment ends
    pub fn total_duration(&self) -> f64 {
        self.durations.iter().map(|&d| d.max(0.0)).sum()
    }

    /// Find the segment a query time falls into.
    ///
    /// A segment owns its end point, so a time exactly on a boundary belongs
    /// to the earlier segment. Negative durations count as zero.
    #[inline]
    pub fn locate(&self, time: f64) -> Location {
        if time <= 0.0 {
            return Location::Start;
        }

        let mut elapsed = 0.0;
        for (index, &duration) in self.durations.iter().enumerate() {
            let duration = duration.max(0.0);
            if elapsed + duration >= time {
                if duration == 0.0 {
                    return Location::Jump { index };
                }
                return Location::Segment {
                    index,
                    progress: (time - elapsed) / duration,
                };
            }
            elapsed += duration;
        }

        Location::End
    }

    /// Envelope value at `time`
    ///
    /// Total over every input: times before 0 give the first value, times
    /// past the end (and NaN) give the last.
    #[inline]
    pub fn evaluate(&self, time: f64) -> f64 {
        match self.locate(time) {
            Location::Start => self.values[0],
            Location::Segment { index, progress } => self.easing_functions[index].interpolate(
                self.values[index],
                self.values[index + 1],
                progress,
            ),
            Location::Jump { index } => self.values[index + 1],
            Location::End => self.values[self.values.len() - 1],
        }
    }

    /// Sample the envelope at regular intervals
    pub fn iter_samples(&self, sample_rate: f64, duration: f64) -> SampleIterator<'a> {
        SampleIterator {
            envelope: *self,
            sample_rate,
            current_sample: 0,
            total_samples: (duration * sample_rate) as usize,
        }
    }
}

/// Iterator over sampled envelope values
pub struct SampleIterator<'a> {
    envelope: EnvelopeView<'a>,
    sample_rate: f64,
    current_sample: usize,
    total_samples: usize,
}

impl Iterator for SampleIterator<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_sample >= self.total_samples {
            return None;
        }

        let time = self.current_sample as f64 / self.sample_rate;
        self.current_sample += 1;

        Some(self.envelope.evaluate(time))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleIterator<'_> {
    fn len(&self) -> usize {
        self.total_samples - self.current_sample
    }
}
