//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::BadgeColor;
use crate::data::Channel;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for the temperature channel.
    pub temperature: Color,
    /// Accent color for the humidity channel.
    pub humidity: Color,
    /// Color for neutral chrome (the last-update tile, axis labels).
    pub neutral: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for the header bar title.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            temperature: Color::Blue,
            humidity: Color::Cyan,
            neutral: Color::Gray,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            temperature: Color::Blue,
            humidity: Color::LightBlue,
            neutral: Color::DarkGray,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Accent color for a sensor channel
    pub fn channel_color(&self, channel: Channel) -> Color {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
        }
    }

    /// Style for a connection badge color
    pub fn badge_style(&self, color: BadgeColor) -> Style {
        match color {
            BadgeColor::Amber => Style::default().fg(Color::Yellow),
            BadgeColor::Green => Style::default().fg(Color::Green),
            BadgeColor::Red => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }
}
