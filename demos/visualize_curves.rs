//! Visualization example - ASCII art plots of easing functions

use automation_core::prelude::*;

const WIDTH: usize = 60;
const HEIGHT: usize = 20;

fn main() {
    println!("\n🎨 Easing Functions\n");

    let easings = [
        EasingFunction::linear(),
        EasingFunction::new(CurveType::Quadratic, Direction::In, 0),
        EasingFunction::new(CurveType::PseudoExponential, Direction::Out, 0),
        EasingFunction::new(CurveType::Sine, Direction::InOut, 0),
        EasingFunction::new(CurveType::Elastic, Direction::In, 3),
        EasingFunction::new(CurveType::Sinc, Direction::Out, 4),
        EasingFunction::new(CurveType::Staircase, Direction::InOut, 5),
        EasingFunction::new(CurveType::Bounce, Direction::Out, 3),
    ];

    for easing in easings {
        plot_easing(easing);
    }

    println!("\n💡 Run: cargo run --example minimal");
}

fn plot_easing(easing: EasingFunction) {
    println!("{easing}");

    let mut grid = vec![vec![' '; WIDTH]; HEIGHT];

    // Draw axes
    for row in grid.iter_mut() {
        row[0] = '│';
    }
    for x in 0..WIDTH {
        grid[HEIGHT - 1][x] = '─';
    }
    grid[HEIGHT - 1][0] = '└';

    // Elastic and sinc overshoot, so leave a margin above and below
    let rows = (HEIGHT - 3) as f64;
    let to_row = |value: f64| {
        let scaled = ((value + 0.25) / 1.5 * rows).round().clamp(0.0, rows) as usize;
        HEIGHT - 2 - scaled
    };

    let samples = WIDTH - 3;
    let mut prev_y = to_row(easing.ease(0.0));

    for i in 0..samples {
        let t = i as f64 / (samples - 1) as f64;
        let y = to_row(easing.ease(t));
        let x = i + 2;

        grid[y][x] = '●';

        // Connect with previous point
        if i > 0 {
            for draw_y in y.min(prev_y)..=y.max(prev_y) {
                if grid[draw_y][x] == ' ' {
                    grid[draw_y][x] = '│';
                }
            }
        }
        prev_y = y;
    }

    // Print grid
    for row in grid {
        println!("  {}", row.into_iter().collect::<String>());
    }

    // Print sample values
    print!("  ");
    for i in [0, 25, 50, 75, 100] {
        let t = f64::from(i) / 100.0;
        print!("{i}%={:.2}  ", easing.ease(t));
    }
    println!("\n");
}
