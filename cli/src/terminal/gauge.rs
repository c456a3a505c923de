//! Terminal rendering of the risk gauge: a bar over `[0, 100]` with the
//! three tier color bands (green up to 30, orange to 70, red above).

use colored::*;

use crate::terminal::print;

const BAR_WIDTH: usize = 50;
const POINTS_PER_CELL: usize = 100 / BAR_WIDTH;

fn band_color(points: usize) -> Color {
    match points {
        0..=30 => Color::Green,
        31..=70 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Renders the gauge line for a score. Filled cells take the color of
/// the band they sit in, so the bar itself shows the thresholds.
pub fn render(score: u8) -> String {
    let filled = usize::from(score).div_ceil(POINTS_PER_CELL).min(BAR_WIDTH);

    let mut bar = String::new();
    for cell in 0..BAR_WIDTH {
        let points = (cell + 1) * POINTS_PER_CELL;
        let glyph = if cell < filled {
            "█".color(band_color(points))
        } else {
            "░".bright_black()
        };
        bar.push_str(&glyph.to_string());
    }

    format!(
        "{}{}{} {}",
        "⦗".bright_black(),
        bar,
        "⦘".bright_black(),
        format!("{score}/100").bold()
    )
}

pub fn print_gauge(score: u8) {
    print::print(&render(score));
}
