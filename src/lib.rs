// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # sensorwatch
//!
//! A terminal dashboard and library for live IoT sensor readings.
//!
//! This crate renders current values and short-term history for two sensor
//! channels (temperature, humidity) from a push-based event stream, and
//! reflects connection health as a three-color status badge. It can receive
//! events from a TCP gateway, an in-process channel, or a built-in
//! simulated feed.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(projection)   │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── StreamSource | ChannelSource | SimSource   │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state and the event pump that drains typed
//!   transport events into projected state
//! - **[`source`]**: Event source abstraction ([`EventSource`] trait) with
//!   implementations for TCP streams, in-process channels, and a simulator
//! - **[`data`]**: The live state store, connection health projection, and
//!   chart-ready series formatting
//! - **[`ui`]**: Terminal rendering using ratatui - value tiles, history
//!   charts, connection badge, and theme support
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Connect to a gateway serving newline-delimited sensor_update JSON
//! sensorwatch --connect localhost:5000
//!
//! # Run against the built-in simulated feed
//! sensorwatch --simulate
//! ```
//!
//! ### As a library with a channel source
//!
//! ```
//! use sensorwatch::{App, ChannelSource, LifecycleSignal, TransportEvent};
//!
//! let (tx, source) = ChannelSource::create("embedded");
//! let mut app = App::new(Box::new(source));
//!
//! tx.send(TransportEvent::Lifecycle(LifecycleSignal::Connected)).unwrap();
//! app.pump();
//! assert_eq!(app.badge().label, "Connected");
//! ```
//!
//! ### As a library with a stream source
//!
//! ```no_run
//! use std::io::Cursor;
//! use sensorwatch::{App, StreamSource};
//!
//! # tokio_test::block_on(async {
//! // Example with a cursor (in practice, use StreamSource::connect)
//! let data = b"{\"temperature\": 21.5}\n";
//! let stream = Cursor::new(data.to_vec());
//! let source = StreamSource::spawn(stream, "example");
//! let app = App::new(Box::new(source));
//! # });
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod settings;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{Badge, BadgeColor, Channel, ChartSeries, ConnectionState, LiveState, Reading};
pub use settings::Settings;
pub use source::{
    ChannelSource, EventSource, HistoryPayload, HistoryPoint, LifecycleSignal, SensorUpdate,
    SimFeed, SimSource, StreamSource, TransportEvent,
};
