//! Current-value tiles.
//!
//! Three side-by-side tiles: temperature, humidity, and last-update time.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::Channel;

/// Render the current readings row.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    tile(
        frame,
        app,
        chunks[0],
        Channel::Temperature.label(),
        &app.state.reading.temperature_display(),
        app.theme.channel_color(Channel::Temperature),
    );
    tile(
        frame,
        app,
        chunks[1],
        Channel::Humidity.label(),
        &app.state.reading.humidity_display(),
        app.theme.channel_color(Channel::Humidity),
    );
    tile(
        frame,
        app,
        chunks[2],
        "Last Update",
        &app.state.reading.last_update_display(),
        app.theme.neutral,
    );
}

fn tile(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    value: &str,
    accent: ratatui::style::Color,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(value.to_string())
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);

    frame.render_widget(paragraph, area);
}
