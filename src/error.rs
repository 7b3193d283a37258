//! Error types for the non-real-time entry points.
//!
//! The evaluator, the normalizer and the unchecked mutators never fail; they
//! resolve malformed input to a defined value instead. The checked variants
//! below exist for callers that are not inside an audio callback and would
//! rather hear about a bad index than have it silently ignored.

use thiserror::Error;

/// Result type for checked automation operations
pub type Result<T> = std::result::Result<T, AutomationError>;

/// Errors reported by checked constructors and mutators
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomationError {
    /// An envelope needs at least one breakpoint
    #[error("an envelope needs at least one breakpoint")]
    NoBreakpoints,

    /// The parallel slices of an envelope do not describe the same segments
    #[error(
        "{values} values need {expected} durations and easing functions, \
         got {durations} and {easing_functions}",
        expected = .values.saturating_sub(1)
    )]
    SegmentCountMismatch {
        /// Number of breakpoint values
        values: usize,
        /// Number of segment durations
        durations: usize,
        /// Number of per-segment easing functions
        easing_functions: usize,
    },

    /// An easing index outside the encoded range
    #[error("easing index {index} is out of range (0..{count})")]
    EasingIndexOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of valid indices
        count: usize,
    },

    /// A breakpoint or segment index outside the model
    #[error("index {index} is out of range for {len} entries")]
    BreakpointOutOfRange {
        /// Index that was requested
        index: usize,
        /// Number of entries available
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_mismatch_message() {
        let err = AutomationError::SegmentCountMismatch {
            values: 3,
            durations: 1,
            easing_functions: 2,
        };
        assert_eq!(
            err.to_string(),
            "3 values need 2 durations and easing functions, got 1 and 2"
        );
    }

    #[test]
    fn test_easing_index_message() {
        let err = AutomationError::EasingIndexOutOfRange {
            index: 200,
            count: 118,
        };
        assert_eq!(err.to_string(), "easing index 200 is out of range (0..118)");
    }
}
