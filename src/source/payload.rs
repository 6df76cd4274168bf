//! Wire types for the sensor event stream.
//!
//! These types match the JSON emitted by the sensor gateway on its
//! `sensor_update` stream. They are the common format between the feed
//! producer and this dashboard consumer.

use serde::{Deserialize, Serialize};

/// A single time-value sample within a history series.
///
/// Immutable once received. The timestamp is epoch milliseconds; a missing
/// or null timestamp is tolerated and rendered as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Sample time in epoch milliseconds.
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Sample value in the channel's native unit.
    pub value: f64,
}

/// Per-channel history series carried inside a `sensor_update`.
///
/// The gateway is the sole source of truth for ordering and windowing;
/// the dashboard performs no sorting, deduplication, or retention of its
/// own. Absent arrays default to empty, per field, independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryPayload {
    #[serde(default)]
    pub temperature: Vec<HistoryPoint>,
    #[serde(default)]
    pub humidity: Vec<HistoryPoint>,
}

/// A complete `sensor_update` event.
///
/// Every field may be absent; the whole payload replaces the dashboard's
/// current reading and both history series atomically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SensorUpdate {
    /// Latest temperature in °C.
    #[serde(default)]
    pub temperature: Option<f64>,
    /// Latest relative humidity in percent.
    #[serde(default)]
    pub humidity: Option<f64>,
    /// Time of the latest sample, epoch milliseconds.
    #[serde(default)]
    pub last_update: Option<i64>,
    /// Pre-windowed history for both channels.
    #[serde(default)]
    pub history: HistoryPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_update() {
        let json = r#"{
            "temperature": 21.5,
            "humidity": 48,
            "last_update": 1700000000000,
            "history": {
                "temperature": [{"timestamp": 1700000000000, "value": 21.5}],
                "humidity": []
            }
        }"#;

        let update: SensorUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.temperature, Some(21.5));
        assert_eq!(update.humidity, Some(48.0));
        assert_eq!(update.last_update, Some(1700000000000));
        assert_eq!(update.history.temperature.len(), 1);
        assert_eq!(update.history.temperature[0].timestamp, Some(1700000000000));
        assert_eq!(update.history.temperature[0].value, 21.5);
        assert!(update.history.humidity.is_empty());
    }

    #[test]
    fn test_deserialize_missing_history() {
        let json = r#"{"temperature": 22.0, "humidity": 50.0, "last_update": 1700000000000}"#;

        let update: SensorUpdate = serde_json::from_str(json).unwrap();
        assert!(update.history.temperature.is_empty());
        assert!(update.history.humidity.is_empty());
    }

    #[test]
    fn test_deserialize_partial_history() {
        // One channel present, the other absent - defaults apply per field
        let json = r#"{
            "history": {
                "humidity": [{"timestamp": 1700000000000, "value": 48.0}]
            }
        }"#;

        let update: SensorUpdate = serde_json::from_str(json).unwrap();
        assert!(update.temperature.is_none());
        assert!(update.history.temperature.is_empty());
        assert_eq!(update.history.humidity.len(), 1);
    }

    #[test]
    fn test_deserialize_null_fields() {
        let json = r#"{"temperature": null, "humidity": null, "last_update": null}"#;

        let update: SensorUpdate = serde_json::from_str(json).unwrap();
        assert!(update.temperature.is_none());
        assert!(update.humidity.is_none());
        assert!(update.last_update.is_none());
    }

    #[test]
    fn test_deserialize_null_point_timestamp() {
        let json = r#"{"history": {"temperature": [{"timestamp": null, "value": 19.5}]}}"#;

        let update: SensorUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.history.temperature[0].timestamp, None);
        assert_eq!(update.history.temperature[0].value, 19.5);
    }

    #[test]
    fn test_null_payload_is_not_an_update() {
        // A literal null payload must fail to parse so callers can ignore it
        assert!(serde_json::from_str::<SensorUpdate>("null").is_err());
    }
}
