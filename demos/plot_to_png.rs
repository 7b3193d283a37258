//! Generate PNG plots of easing functions and a multi-segment envelope

use automation_core::{Automation, CurveType, Direction, EasingFunction};
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🎨 Generating automation plots...\n");

    std::fs::create_dir_all("plots")?;

    plot_easing_comparison()?;
    println!("  ✓ Generated plots/easings.png");

    plot_envelope()?;
    println!("  ✓ Generated plots/envelope.png");

    println!("\n✅ All plots generated in ./plots/\n");
    Ok(())
}

fn line_style(color: RGBColor, stroke_width: u32) -> ShapeStyle {
    ShapeStyle {
        color: color.to_rgba(),
        filled: false,
        stroke_width,
    }
}

fn plot_easing_comparison() -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("plots/easings.png", (1400, 800)).into_drawing_area();
    root.fill(&RGBColor(28, 28, 32))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(0.0..1.0, -0.35..1.35)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_axes()
        .draw()?;

    let easings = [
        (
            EasingFunction::new(CurveType::Cubic, Direction::InOut, 0),
            RGBColor(100, 180, 255),
        ),
        (
            EasingFunction::new(CurveType::Circular, Direction::Out, 0),
            RGBColor(255, 100, 120),
        ),
        (
            EasingFunction::new(CurveType::Elastic, Direction::Out, 4),
            RGBColor(100, 230, 140),
        ),
        (
            EasingFunction::new(CurveType::Sinc, Direction::In, 3),
            RGBColor(255, 180, 80),
        ),
        (
            EasingFunction::new(CurveType::Bounce, Direction::Out, 4),
            RGBColor(200, 120, 255),
        ),
    ];

    for (easing, color) in easings {
        let samples: Vec<(f64, f64)> = (0..=500)
            .map(|i| {
                let t = f64::from(i) / 500.0;
                (t, easing.ease(t))
            })
            .collect();

        chart
            .draw_series(LineSeries::new(samples, line_style(color, 4)))?
            .label(easing.to_string())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], line_style(color, 4)));
    }

    chart
        .configure_series_labels()
        .background_style(RGBColor(38, 38, 42).mix(0.95))
        .border_style(RGBColor(80, 80, 85))
        .label_font(("sans-serif", 20, &RGBColor(220, 220, 225)))
        .draw()?;

    root.present()?;
    Ok(())
}

fn plot_envelope() -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("plots/envelope.png", (1400, 800)).into_drawing_area();
    root.fill(&RGBColor(28, 28, 32))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(0.0..1.0, 0.0..1100.0)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_axes()
        .draw()?;

    // Filter sweep: the durations are relative, normalizing maps them onto [0, 1]
    let mut automation = Automation::new(5)?
        .with_values(&[200.0, 1000.0, 400.0, 800.0, 200.0])
        .with_durations(&[2.0, 2.0, 2.0, 2.0])
        .with_easing(&[
            EasingFunction::new(CurveType::PseudoExponential, Direction::In, 0),
            EasingFunction::new(CurveType::Bounce, Direction::Out, 3),
            EasingFunction::new(CurveType::Elastic, Direction::Out, 2),
            EasingFunction::new(CurveType::Staircase, Direction::InOut, 6),
        ]);
    automation.normalize_durations();

    let samples: Vec<(f64, f64)> = (0..=2000)
        .map(|i| {
            let t = f64::from(i) / 2000.0;
            (t, automation.value_at(t))
        })
        .collect();

    // Draw filled area
    let mut area_samples = samples.clone();
    area_samples.insert(0, (0.0, 0.0));
    area_samples.push((1.0, 0.0));

    chart.draw_series(AreaSeries::new(
        area_samples,
        0.0,
        RGBColor(100, 200, 255).mix(0.2),
    ))?;

    chart.draw_series(LineSeries::new(
        samples,
        line_style(RGBColor(100, 200, 255), 4),
    ))?;

    // Breakpoints sit at the cumulative segment boundaries
    let mut elapsed = 0.0_f64;
    let mut points = vec![(0.0, automation.values()[0])];
    for (&duration, &value) in automation.durations().iter().zip(&automation.values()[1..]) {
        elapsed += duration;
        points.push((elapsed, value));
    }

    chart.draw_series(PointSeries::of_element(
        points,
        7,
        RGBColor(100, 200, 255),
        &|c, s, st| EmptyElement::at(c) + Circle::new((0, 0), s, st.filled()),
    ))?;

    root.present()?;
    Ok(())
}
