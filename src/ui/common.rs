//! Common UI components shared across panels.
//!
//! This module contains the header bar, the status bar with the connection
//! badge, and the help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the header bar.
///
/// Displays: title, tagline, and the event source description.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" IOT SENSOR DASHBOARD ", app.theme.header),
        Span::raw("│ Real-time monitoring of IoT sensor data │ "),
        Span::styled(
            app.source_description().to_string(),
            Style::default().add_modifier(Modifier::DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows the connection badge (colored dot, label, description) and the
/// available controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let badge = app.badge();
    let badge_style = app.theme.badge_style(badge.color);

    let mut spans = vec![
        Span::styled(" ● ", badge_style),
        Span::styled(badge.label, badge_style.add_modifier(Modifier::BOLD)),
    ];
    if !badge.description.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            badge.description,
            Style::default().add_modifier(Modifier::DIM),
        ));
    }
    spans.push(Span::styled(
        "  │ ?:help q:quit",
        Style::default().add_modifier(Modifier::DIM),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  ?         Toggle this help"),
        Line::from("  q / Esc   Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "The dashboard updates itself as events arrive;",
            Style::default().add_modifier(Modifier::DIM),
        )]),
        Line::from(vec![Span::styled(
            "reconnection is automatic.",
            Style::default().add_modifier(Modifier::DIM),
        )]),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 52u16.min(area.width.saturating_sub(4));
    let help_height = 12u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
