//! Minimal example showing the essential features

use automation_core::prelude::*;

fn main() -> Result<(), automation_core::AutomationError> {
    println!("🎵 Automation Core - Essential Features\n");

    // 1. Build an envelope and evaluate it
    basic_envelope()?;

    // 2. Select shapes by index
    easing_indices();

    // 3. Evaluate storage you already own
    borrowed_view()?;

    Ok(())
}

fn basic_envelope() -> Result<(), automation_core::AutomationError> {
    println!("1️⃣  Basic Envelope\n");

    let mut automation = Automation::new(3)?
        .with_values(&[0.0, 1.0, 0.0])
        .with_durations(&[1.0, 3.0])
        .with_easing(&[
            EasingFunction::new(CurveType::Sine, Direction::InOut, 0),
            EasingFunction::new(CurveType::Bounce, Direction::Out, 3),
        ]);
    automation.normalize_durations();

    for time in [0.0, 0.125, 0.25, 0.5, 0.75, 1.0] {
        println!("   t={time:.3}: {:.3}", automation.value_at(time));
    }
    println!();
    Ok(())
}

fn easing_indices() {
    println!("2️⃣  Easing Indices\n");

    for index in [0, 2, 25, 73, 117, 500] {
        let easing = EasingFunction::from_index(index);
        println!("   {index:>3} → {easing}");
    }
    println!();
}

fn borrowed_view() -> Result<(), automation_core::AutomationError> {
    println!("3️⃣  Borrowed Storage\n");

    let values = [1.0, 5.0, -3.0];
    let mut durations = [2.0, 1.0];
    let easing = [EasingFunction::linear(); 2];

    normalize_durations(&mut durations);
    let envelope = EnvelopeView::new(&values, &durations, &easing)?;

    println!("   durations after normalizing: {durations:?}");
    println!("   value at t=1/3: {:.2}", envelope.evaluate(1.0 / 3.0));
    println!("   value at t=1:   {:.2}\n", envelope.evaluate(1.0));
    Ok(())
}
