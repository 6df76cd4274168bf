//! Per-channel history line charts.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{Channel, ChartSeries};

/// Render the history chart for one channel.
pub fn render(frame: &mut Frame, app: &App, area: Rect, channel: Channel) {
    let series = ChartSeries::from_points(app.state.history(channel));
    let accent = app.theme.channel_color(channel);

    let block = Block::default()
        .title(format!(" {} History ", channel.label()))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    if series.is_empty() {
        let placeholder = Paragraph::new("Waiting for data...")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let points = series.points();
    let [y_min, y_max] = series.value_bounds();
    let x_max = (series.len().saturating_sub(1)).max(1) as f64;

    let x_labels = axis_labels(&series.labels);
    let y_labels = vec![
        Span::styled(format!("{:.1}", y_min), Style::default().fg(app.theme.neutral)),
        Span::styled(format!("{:.1}", y_max), Style::default().fg(app.theme.neutral)),
    ];

    let dataset = Dataset::default()
        .name(format!("{} ({})", channel.label(), channel.unit()))
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(accent))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.neutral))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(app.theme.neutral))
                .bounds([y_min, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// First, middle, and last time labels for the x-axis.
fn axis_labels(labels: &[String]) -> Vec<Span<'static>> {
    let mut picks = Vec::new();
    if let Some(first) = labels.first() {
        picks.push(Span::raw(first.clone()));
    }
    if labels.len() > 2 {
        picks.push(Span::raw(labels[labels.len() / 2].clone()));
    }
    if labels.len() > 1 {
        if let Some(last) = labels.last() {
            picks.push(Span::raw(last.clone()));
        }
    }
    picks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_labels_pick_endpoints_and_midpoint() {
        let labels: Vec<String> = (0..5).map(|i| format!("00:00:0{}", i)).collect();
        let picks = axis_labels(&labels);
        assert_eq!(picks.len(), 3);
        assert_eq!(picks[0].content, "00:00:00");
        assert_eq!(picks[1].content, "00:00:02");
        assert_eq!(picks[2].content, "00:00:04");
    }

    #[test]
    fn test_axis_labels_short_series() {
        assert!(axis_labels(&[]).is_empty());
        assert_eq!(axis_labels(&["a".to_string()]).len(), 1);
        assert_eq!(axis_labels(&["a".to_string(), "b".to_string()]).len(), 2);
    }
}
