//! Segment duration normalization

/// Rescale segment durations in place so that they sum to 1.
///
/// Negative (and NaN) durations are clamped to zero first. When nothing is
/// left to scale, either because every duration is zero or because the sum
/// overflowed, the clamped durations are kept as they are.
///
/// Runs in the audio callback: no allocation, no failure.
#[inline]
pub fn normalize_durations(durations: &mut [f64]) {
    let mut sum = 0.0_f64;
    for duration in durations.iter_mut() {
        *duration = (*duration).max(0.0);
        sum += *duration;
    }

    let scale = if sum > 0.0 && sum.is_finite() {
        sum.recip()
    } else {
        1.0
    };

    for duration in durations.iter_mut() {
        *duration *= scale;
    }
}
