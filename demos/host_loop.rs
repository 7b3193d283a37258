//! Host workflow: stream per-sample parameters into an envelope and render a block

use automation_core::prelude::*;

const SAMPLE_RATE: f64 = 48_000.0;
const BLOCK_SIZE: usize = 64;
const NUM_BREAKPOINTS: usize = 4;

fn main() -> Result<(), automation_core::AutomationError> {
    println!("Host Workflow\n");

    // Allocation happens here, outside the audio callback
    let mut automation = Automation::new(NUM_BREAKPOINTS)?;
    automation.set_easing_index(0, 8); // Sine Out
    automation.set_easing_index(1, 0); // Linear
    automation.set_easing_index(2, 96); // Bounce 1 In-Out

    process_blocks(&mut automation);
    modulated_durations(&mut automation);

    Ok(())
}

/// Input layout per sample: values then raw durations, as a host would feed them.
fn frame(attack: f64) -> [f64; 2 * NUM_BREAKPOINTS - 1] {
    [0.0, 1.0, 0.6, 0.0, attack, 2.0, 1.0]
}

fn process_blocks(automation: &mut Automation) {
    println!("1. Rendering a ramp over one second\n");

    let total_samples = SAMPLE_RATE as usize;
    let mut out = [0.0; BLOCK_SIZE];

    for block in (0..total_samples).step_by(BLOCK_SIZE * 125) {
        for (i, sample) in out.iter_mut().enumerate() {
            let time = (block + i) as f64 / SAMPLE_RATE;
            *sample = automation.process(&frame(1.0), time);
        }
        println!("   t={:.3}s  first={:+.4}  last={:+.4}", block as f64 / SAMPLE_RATE, out[0], out[BLOCK_SIZE - 1]);
    }
    println!();
}

/// Durations can change every sample; they are renormalized each tick.
fn modulated_durations(automation: &mut Automation) {
    println!("2. Modulating the attack segment\n");

    for attack in [0.25, 1.0, 4.0] {
        let value = automation.process(&frame(attack), 0.2);
        println!(
            "   attack={attack:<4}  durations={:?}  value at t=0.2: {value:.4}",
            automation.durations()
        );
    }

    let rms = {
        let sum_sq: f64 = automation
            .iter_samples(SAMPLE_RATE, 1.0)
            .map(|v| v * v)
            .sum();
        (sum_sq / SAMPLE_RATE).sqrt()
    };
    println!("   RMS over 1 s: {rms:.4}\n");
}
