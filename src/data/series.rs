//! Chart-ready series formatting.
//!
//! Converts raw history slices into the index-aligned label/value pairs
//! the line-chart panels render, and formats timestamps as local
//! wall-clock time.

use chrono::{Local, TimeZone};

use crate::source::HistoryPoint;

/// Placeholder shown when a timestamp is absent or unrepresentable.
pub const BLANK_CLOCK: &str = "--:--:--";

/// Format epoch milliseconds as local wall-clock time, seconds precision.
pub fn format_clock(ts_millis: Option<i64>) -> String {
    let Some(ms) = ts_millis else {
        return BLANK_CLOCK.to_string();
    };
    match Local.timestamp_millis_opt(ms) {
        chrono::LocalResult::Single(dt) => dt.format("%H:%M:%S").to_string(),
        _ => BLANK_CLOCK.to_string(),
    }
}

/// A history series projected for chart rendering.
///
/// `labels` and `values` are index-aligned 1:1 with the source points;
/// nothing is dropped, reordered, or interpolated.
#[derive(Debug, Clone, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Project a history slice into display labels and numeric values.
    pub fn from_points(points: &[HistoryPoint]) -> Self {
        Self {
            labels: points.iter().map(|p| format_clock(p.timestamp)).collect(),
            values: points.iter().map(|p| p.value).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as (index, value) points for the line-chart widget.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (i as f64, v))
            .collect()
    }

    /// Y-axis bounds with a little headroom so the line never hugs the
    /// frame. Returns [0.0, 1.0] for an empty series.
    pub fn value_bounds(&self) -> [f64; 2] {
        if self.values.is_empty() {
            return [0.0, 1.0];
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            min = min.min(v);
            max = max.max(v);
        }
        let pad = ((max - min) * 0.1).max(0.5);
        [min - pad, max + pad]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_timestamp_formats_as_placeholder() {
        assert_eq!(format_clock(None), "--:--:--");
    }

    #[test]
    fn test_present_timestamp_formats_as_clock() {
        let formatted = format_clock(Some(1_700_000_000_000));
        // Local-time dependent, but always HH:MM:SS shaped
        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.as_bytes()[2], b':');
        assert_eq!(formatted.as_bytes()[5], b':');
        assert_ne!(formatted, BLANK_CLOCK);
    }

    #[test]
    fn test_series_is_index_aligned() {
        let points: Vec<HistoryPoint> = (0..7)
            .map(|i| HistoryPoint {
                timestamp: Some(1_700_000_000_000 + i * 2_000),
                value: 20.0 + i as f64,
            })
            .collect();

        let series = ChartSeries::from_points(&points);
        assert_eq!(series.labels.len(), 7);
        assert_eq!(series.values.len(), 7);
        assert_eq!(series.values[3], 23.0);
    }

    #[test]
    fn test_series_keeps_placeholder_for_null_timestamps() {
        let points = vec![
            HistoryPoint {
                timestamp: None,
                value: 21.0,
            },
            HistoryPoint {
                timestamp: Some(1_700_000_000_000),
                value: 22.0,
            },
        ];

        let series = ChartSeries::from_points(&points);
        assert_eq!(series.labels[0], BLANK_CLOCK);
        assert_ne!(series.labels[1], BLANK_CLOCK);
        assert_eq!(series.values, vec![21.0, 22.0]);
    }

    #[test]
    fn test_empty_series() {
        let series = ChartSeries::from_points(&[]);
        assert!(series.is_empty());
        assert!(series.points().is_empty());
        assert_eq!(series.value_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_points_are_indexed() {
        let points = vec![
            HistoryPoint {
                timestamp: Some(1),
                value: 21.5,
            },
            HistoryPoint {
                timestamp: Some(2),
                value: 22.5,
            },
        ];
        let series = ChartSeries::from_points(&points);
        assert_eq!(series.points(), vec![(0.0, 21.5), (1.0, 22.5)]);
    }

    #[test]
    fn test_value_bounds_pad_the_range() {
        let points = vec![
            HistoryPoint {
                timestamp: Some(1),
                value: 20.0,
            },
            HistoryPoint {
                timestamp: Some(2),
                value: 30.0,
            },
        ];
        let [lo, hi] = ChartSeries::from_points(&points).value_bounds();
        assert!(lo < 20.0);
        assert!(hi > 30.0);
    }
}
