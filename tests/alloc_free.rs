//! Allocation-free evaluation tests.
//!
//! These tests verify that the per-sample path (load, normalize, evaluate
//! and index decoding) does not allocate. Storage is set up before the
//! guarded region, exactly as a host would do outside its audio callback.

use assert_no_alloc::{assert_no_alloc, AllocDisabler};
use automation_core::{normalize_durations, Automation, EasingFunction, EnvelopeView};

#[cfg(debug_assertions)]
#[global_allocator]
static A: AllocDisabler = AllocDisabler;

const SAMPLE_RATE: f64 = 48_000.0;

/// Drive `automation` like a host block loop, aborting on any heap allocation.
fn assert_block_alloc_free(automation: &mut Automation, frame: &[f64], num_samples: usize) {
    let mut out = vec![0.0; num_samples];

    assert_no_alloc(|| {
        for (i, sample) in out.iter_mut().enumerate() {
            let time = i as f64 / num_samples as f64;
            *sample = automation.process(frame, time);
        }
    });

    assert!(out.iter().all(|v| v.is_finite()));
}

#[test]
fn every_easing_index_alloc_free() {
    let mut automation = Automation::new(2).unwrap().with_values(&[-1.0, 1.0]);
    let frame = [-1.0, 1.0, 1.0];

    for index in 0..=EasingFunction::COUNT {
        automation.set_easing_index(0, index);
        assert_block_alloc_free(&mut automation, &frame, 512);
    }
}

#[test]
fn multi_segment_block_alloc_free() {
    let mut automation = Automation::new(5).unwrap();
    for (segment, index) in [3, 30, 60, 100].into_iter().enumerate() {
        automation.set_easing_index(segment, index);
    }
    let frame = [0.0, 1.0, 0.2, 0.8, 0.0, 1.0, -2.0, 0.0, 3.0];

    assert_block_alloc_free(&mut automation, &frame, SAMPLE_RATE as usize);
}

#[test]
fn borrowed_view_alloc_free() {
    let values = [0.0, 10.0, 5.0, 5.0];
    let mut durations = [1.0, 0.0, 2.0];
    let easing = [
        EasingFunction::from_index(117),
        EasingFunction::from_index(12),
        EasingFunction::from_parameter(80.0),
    ];
    let mut sum = 0.0_f64;

    assert_no_alloc(|| {
        for i in 0..SAMPLE_RATE as usize {
            normalize_durations(&mut durations);
            // infallible here, the slices have matching lengths
            if let Ok(envelope) = EnvelopeView::new(&values, &durations, &easing) {
                sum += envelope.evaluate(i as f64 / SAMPLE_RATE);
            }
        }
    });

    assert!(sum.is_finite());
}

#[test]
fn sample_iterator_alloc_free() {
    let automation = Automation::new(3)
        .unwrap()
        .with_values(&[0.0, 1.0, 0.0])
        .with_durations(&[0.5, 0.5]);
    let mut peak = f64::MIN;

    assert_no_alloc(|| {
        for value in automation.iter_samples(SAMPLE_RATE, 1.0) {
            peak = peak.max(value);
        }
    });

    assert!((peak - 1.0).abs() < 1e-3);
}
