//! Chart widgets for the dashboard panels.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// Create the actual-vs-predicted demand line chart.
///
/// Dot markers stand in for the upstream circle markers on the actual
/// line; the predicted line uses braille as the terminal rendering of a
/// dashed cross-marked line. Dataset names double as the legend.
pub fn create_demand_chart<'a>(
    actual: &'a [(f64, f64)],
    predicted: &'a [(f64, f64)],
    dates: &'a [String],
    stock_code: &str,
) -> Chart<'a> {
    let datasets = vec![
        Dataset::default()
            .name("Actual Demand")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(actual),
        Dataset::default()
            .name("Predicted Demand")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(predicted),
    ];

    let all_values: Vec<f64> = actual
        .iter()
        .chain(predicted.iter())
        .map(|&(_, y)| y)
        .collect();
    let y_min = all_values.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = all_values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((y_max - y_min) * 0.05).max(1.0);
    let x_max = (dates.len().saturating_sub(1)).max(1) as f64;

    let x_labels = date_labels(dates);

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Actual vs Predicted Demand for {} ", stock_code)),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Demand")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min - pad, y_max + pad])
                .labels(vec![
                    Span::raw(format!("{:.1}", y_min - pad)),
                    Span::raw(format!("{:.1}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{:.1}", y_max + pad)),
                ]),
        )
}

/// Create one error-distribution panel: count bars with a density
/// overlay, x-axis labeled "Error".
pub fn create_error_chart<'a>(
    bars: &'a [(f64, f64)],
    density: &'a [(f64, f64)],
    title: &str,
    color: Color,
) -> Chart<'a> {
    let datasets = vec![
        Dataset::default()
            .marker(Marker::HalfBlock)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(color))
            .data(bars),
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::White))
            .data(density),
    ];

    let xs: Vec<f64> = bars
        .iter()
        .chain(density.iter())
        .map(|&(x, _)| x)
        .collect();
    let x_min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let half_bin = if bars.len() > 1 {
        (bars[1].0 - bars[0].0) / 2.0
    } else {
        0.5
    };

    let y_max = bars
        .iter()
        .chain(density.iter())
        .map(|&(_, y)| y)
        .fold(0.0f64, f64::max)
        .max(1.0);

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .x_axis(
            Axis::default()
                .title("Error")
                .style(Style::default().fg(Color::Gray))
                .bounds([x_min - half_bin, x_max + half_bin])
                .labels(vec![
                    Span::raw(format!("{:.2}", x_min - half_bin)),
                    Span::raw(format!("{:.2}", (x_min + x_max) / 2.0)),
                    Span::raw(format!("{:.2}", x_max + half_bin)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Count")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, y_max * 1.15])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.1}", y_max * 1.15 / 2.0)),
                    Span::raw(format!("{:.1}", y_max * 1.15)),
                ]),
        )
}

/// First, middle and last date keys as x-axis labels.
fn date_labels(dates: &[String]) -> Vec<Span<'_>> {
    match dates.len() {
        0 => vec![Span::raw("")],
        1 => vec![Span::raw(dates[0].as_str())],
        n => vec![
            Span::raw(dates[0].as_str()),
            Span::raw(dates[n / 2].as_str()),
            Span::raw(dates[n - 1].as_str()),
        ],
    }
}
