//! Live state store.
//!
//! Holds the latest reading and both history series, owned by the view's
//! lifecycle scope. There is exactly one writer (the event-application
//! path) and many readers (the presentation layer); every inbound update
//! replaces the whole state at once, so a reader never sees a reading from
//! one event paired with history from another.

use crate::data::series::format_clock;
use crate::source::{HistoryPoint, SensorUpdate};

/// A sensor channel shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Temperature,
    Humidity,
}

impl Channel {
    /// Display label for panel titles.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Temperature => "Temperature",
            Channel::Humidity => "Humidity",
        }
    }

    /// Display unit suffix.
    pub fn unit(&self) -> &'static str {
        match self {
            Channel::Temperature => "°C",
            Channel::Humidity => "%",
        }
    }
}

/// The most recent snapshot values, replaced wholesale on every update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    /// Epoch milliseconds of the latest sample.
    pub last_update: Option<i64>,
}

impl Reading {
    /// Formatted temperature tile value, e.g. `"21.5°C"` or `"--"`.
    pub fn temperature_display(&self) -> String {
        match self.temperature {
            Some(v) => format!("{}°C", v),
            None => "--".to_string(),
        }
    }

    /// Formatted humidity tile value, e.g. `"48%"` or `"--"`.
    pub fn humidity_display(&self) -> String {
        match self.humidity {
            Some(v) => format!("{}%", v),
            None => "--".to_string(),
        }
    }

    /// Formatted last-update wall-clock time, `"--:--:--"` when absent.
    pub fn last_update_display(&self) -> String {
        format_clock(self.last_update)
    }
}

/// In-memory live state: the latest reading plus one history series per
/// channel. Created empty at connection-open time and mutated only by
/// inbound update events.
#[derive(Debug, Clone, Default)]
pub struct LiveState {
    pub reading: Reading,
    temperature: Vec<HistoryPoint>,
    humidity: Vec<HistoryPoint>,
}

impl LiveState {
    /// Create an empty store (no readings, empty charts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an inbound `sensor_update`, replacing the reading and both
    /// history series atomically. Missing series arrive as empty vectors
    /// from the payload layer; no validation of ranges or timestamp order
    /// is performed - the gateway is authoritative.
    pub fn apply_update(&mut self, update: SensorUpdate) {
        self.reading = Reading {
            temperature: update.temperature,
            humidity: update.humidity,
            last_update: update.last_update,
        };
        self.temperature = update.history.temperature;
        self.humidity = update.history.humidity;
    }

    /// The history series for a channel, in gateway order.
    pub fn history(&self, channel: Channel) -> &[HistoryPoint] {
        match channel {
            Channel::Temperature => &self.temperature,
            Channel::Humidity => &self.humidity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::HistoryPayload;

    fn update_with(temp: f64, hum: f64, ts: i64, points: usize) -> SensorUpdate {
        let series: Vec<HistoryPoint> = (0..points)
            .map(|i| HistoryPoint {
                timestamp: Some(ts - (points - i) as i64 * 1_000),
                value: temp,
            })
            .collect();
        SensorUpdate {
            temperature: Some(temp),
            humidity: Some(hum),
            last_update: Some(ts),
            history: HistoryPayload {
                temperature: series.clone(),
                humidity: series,
            },
        }
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = LiveState::new();
        assert_eq!(state.reading.temperature_display(), "--");
        assert_eq!(state.reading.humidity_display(), "--");
        assert_eq!(state.reading.last_update_display(), "--:--:--");
        assert!(state.history(Channel::Temperature).is_empty());
        assert!(state.history(Channel::Humidity).is_empty());
    }

    #[test]
    fn test_apply_update_replaces_everything() {
        let mut state = LiveState::new();
        state.apply_update(update_with(20.0, 40.0, 1_700_000_000_000, 5));
        state.apply_update(update_with(25.0, 55.0, 1_700_000_003_000, 3));

        // Reading and history both reflect the latest event only
        assert_eq!(state.reading.temperature, Some(25.0));
        assert_eq!(state.reading.humidity, Some(55.0));
        assert_eq!(state.reading.last_update, Some(1_700_000_003_000));
        assert_eq!(state.history(Channel::Temperature).len(), 3);
        assert_eq!(state.history(Channel::Humidity).len(), 3);
        assert!(state
            .history(Channel::Temperature)
            .iter()
            .all(|p| p.value == 25.0));
    }

    #[test]
    fn test_update_without_history_empties_both_series() {
        let mut state = LiveState::new();
        state.apply_update(update_with(20.0, 40.0, 1_700_000_000_000, 5));

        // Shaped like {"temperature": 21.0} on the wire - history absent
        let update: SensorUpdate = serde_json::from_str(r#"{"temperature": 21.0}"#).unwrap();
        state.apply_update(update);

        assert_eq!(state.reading.temperature, Some(21.0));
        assert_eq!(state.reading.humidity, None);
        assert!(state.history(Channel::Temperature).is_empty());
        assert!(state.history(Channel::Humidity).is_empty());
    }

    #[test]
    fn test_display_formats() {
        let mut state = LiveState::new();
        let update: SensorUpdate = serde_json::from_str(
            r#"{
                "temperature": 21.5,
                "humidity": 48,
                "last_update": 1700000000000,
                "history": {
                    "temperature": [{"timestamp": 1700000000000, "value": 21.5}],
                    "humidity": []
                }
            }"#,
        )
        .unwrap();
        state.apply_update(update);

        assert_eq!(state.reading.temperature_display(), "21.5°C");
        assert_eq!(state.reading.humidity_display(), "48%");
        assert_eq!(state.history(Channel::Temperature).len(), 1);
        assert!(state.history(Channel::Humidity).is_empty());
    }

    #[test]
    fn test_channel_labels_and_units() {
        assert_eq!(Channel::Temperature.label(), "Temperature");
        assert_eq!(Channel::Temperature.unit(), "°C");
        assert_eq!(Channel::Humidity.label(), "Humidity");
        assert_eq!(Channel::Humidity.unit(), "%");
    }
}
