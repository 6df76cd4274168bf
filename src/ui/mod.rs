//! Terminal rendering using ratatui.
//!
//! - [`common`]: header bar, status bar with the connection badge, help
//!   overlay
//! - [`tiles`]: current-value tiles for both channels plus last update
//! - [`chart`]: per-channel history line charts
//! - [`theme`]: light/dark color themes

pub mod chart;
pub mod common;
pub mod theme;
pub mod tiles;

pub use theme::Theme;
