//! Simulated sensor feed.
//!
//! Generates random temperature and humidity samples on a fixed interval,
//! maintaining the same server-side windowed history a real gateway would.
//! Useful for demos and for exercising the dashboard without hardware.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::sync::mpsc;

use super::{
    EventSource, HistoryPayload, HistoryPoint, LifecycleSignal, SensorUpdate, TransportEvent,
};

/// Number of history points retained per channel, matching the gateway's
/// windowing policy.
const WINDOW: usize = 30;

/// Spacing of the seeded history points, in milliseconds.
const SEED_SPACING_MS: i64 = 2_000;

/// Pure generator behind [`SimSource`].
///
/// Owns the windowed history for both channels and produces complete
/// `sensor_update` payloads, so the emission schedule can live elsewhere
/// and tests stay deterministic in shape.
#[derive(Debug, Clone)]
pub struct SimFeed {
    temperature: Vec<HistoryPoint>,
    humidity: Vec<HistoryPoint>,
}

impl SimFeed {
    /// Create a feed pre-seeded with a full window of history ending just
    /// before `now_millis`, for immediate chart display.
    pub fn seeded(now_millis: i64) -> Self {
        let mut feed = Self {
            temperature: Vec::with_capacity(WINDOW),
            humidity: Vec::with_capacity(WINDOW),
        };
        for i in (1..=WINDOW as i64).rev() {
            let ts = now_millis - i * SEED_SPACING_MS;
            feed.temperature.push(HistoryPoint {
                timestamp: Some(ts),
                value: sample_temperature(),
            });
            feed.humidity.push(HistoryPoint {
                timestamp: Some(ts),
                value: sample_humidity(),
            });
        }
        feed
    }

    /// Sample both channels at `now_millis` and build the resulting
    /// `sensor_update`, windowing history to the latest [`WINDOW`] points.
    pub fn next_update(&mut self, now_millis: i64) -> SensorUpdate {
        let temperature = sample_temperature();
        let humidity = sample_humidity();

        push_windowed(
            &mut self.temperature,
            HistoryPoint {
                timestamp: Some(now_millis),
                value: temperature,
            },
        );
        push_windowed(
            &mut self.humidity,
            HistoryPoint {
                timestamp: Some(now_millis),
                value: humidity,
            },
        );

        SensorUpdate {
            temperature: Some(temperature),
            humidity: Some(humidity),
            last_update: Some(now_millis),
            history: HistoryPayload {
                temperature: self.temperature.clone(),
                humidity: self.humidity.clone(),
            },
        }
    }

    /// Current number of retained temperature points.
    pub fn temperature_len(&self) -> usize {
        self.temperature.len()
    }

    /// Current number of retained humidity points.
    pub fn humidity_len(&self) -> usize {
        self.humidity.len()
    }
}

fn push_windowed(series: &mut Vec<HistoryPoint>, point: HistoryPoint) {
    series.push(point);
    if series.len() > WINDOW {
        series.remove(0);
    }
}

/// Temperature in °C, one decimal place.
fn sample_temperature() -> f64 {
    round1(rand::rng().random_range(20.0..30.0))
}

/// Relative humidity in percent, one decimal place.
fn sample_humidity() -> f64 {
    round1(rand::rng().random_range(40.0..80.0))
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// An event source backed by [`SimFeed`].
///
/// Emits `Connecting` and `Connected`, then a full update immediately
/// (mirroring a gateway that sends initial data on connect) and another
/// on every interval tick.
#[derive(Debug)]
pub struct SimSource {
    receiver: mpsc::Receiver<TransportEvent>,
    description: String,
    handle: Option<tokio::task::JoinHandle<()>>,
    closed: bool,
}

impl SimSource {
    /// Spawn the simulated feed, emitting an update every `interval`.
    ///
    /// Must be called within a tokio runtime.
    pub fn spawn(interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel(64);

        let handle = tokio::spawn(async move {
            if tx
                .send(TransportEvent::Lifecycle(LifecycleSignal::Connecting))
                .await
                .is_err()
            {
                return;
            }
            if tx
                .send(TransportEvent::Lifecycle(LifecycleSignal::Connected))
                .await
                .is_err()
            {
                return;
            }

            let mut feed = SimFeed::seeded(Utc::now().timestamp_millis());
            loop {
                let update = feed.next_update(Utc::now().timestamp_millis());
                if tx.send(TransportEvent::Update(update)).await.is_err() {
                    return;
                }
                tokio::time::sleep(interval).await;
            }
        });

        Self {
            receiver: rx,
            description: "simulated feed".to_string(),
            handle: Some(handle),
            closed: false,
        }
    }
}

impl EventSource for SimSource {
    fn poll(&mut self) -> Option<TransportEvent> {
        if self.closed {
            return None;
        }
        self.receiver.try_recv().ok()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
        self.closed = true;
    }
}

impl Drop for SimSource {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
