//! Bar-chart rendering of ranked scores.

use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::report::styles::ChartTheme;
use crate::types::ScoreMap;

type ChartError = Box<dyn Error + Send + Sync>;

const CHART_WIDTH: u32 = 1024;
const BAR_HEIGHT: u32 = 28;

/// Pixel height that fits one bar per participant.
fn chart_height(participants: usize) -> u32 {
    (participants as u32 * BAR_HEIGHT + 120).max(240)
}

/// Render a horizontal bar chart of participant totals to `path` as a PNG.
///
/// Bars appear in rank order, highest total at the top. An empty score map
/// still produces a valid, empty chart.
pub fn generate_chart(
    scores: &ScoreMap,
    path: &Path,
    theme: &ChartTheme,
) -> Result<(), ChartError> {
    let height = chart_height(scores.len());
    let root = BitMapBackend::new(path, (CHART_WIDTH, height)).into_drawing_area();
    root.fill(&theme.background)?;

    let max_total = scores
        .values()
        .map(|entry| entry.total)
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let rows = scores.len().max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Contribution scores",
            ("sans-serif", 24).into_font().color(&theme.text),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..max_total * 1.1, 0.0..rows)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .bold_line_style(theme.grid)
        .axis_style(theme.text)
        .label_style(("sans-serif", 14).into_font().color(&theme.text))
        .x_desc("total score")
        .draw()?;

    // Row 0 is the bottom of the plot, so invert the index to put the
    // highest-ranked participant on top.
    chart.draw_series(scores.values().enumerate().map(|(index, entry)| {
        let top = rows - index as f64 - 0.15;
        let bottom = rows - index as f64 - 0.85;
        Rectangle::new(
            [(0.0, bottom), (entry.total, top)],
            theme.bar.mix(0.85).filled(),
        )
    }))?;

    // Participant names and totals drawn next to the bars.
    let label_style = ("sans-serif", 14).into_font().color(&theme.text);
    chart.draw_series(scores.iter().enumerate().map(|(index, (name, entry))| {
        let y = rows - index as f64 - 0.6;
        Text::new(
            format!("{name} ({})", entry.total),
            (max_total * 0.01, y),
            label_style.clone(),
        )
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_height_grows_with_participants() {
        assert_eq!(chart_height(0), 240);
        assert!(chart_height(50) > chart_height(10));
    }
}
