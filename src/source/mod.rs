//! Event source abstraction for the sensor feed.
//!
//! This module provides a trait-based abstraction for receiving sensor
//! events from various transports (TCP streams, in-process channels, or a
//! built-in simulator). Each source delivers a single ordered sequence of
//! typed [`TransportEvent`]s: lifecycle signals describing connection
//! status, and `sensor_update` application payloads.

mod channel;
mod payload;
mod sim;
mod stream;

pub use channel::ChannelSource;
pub use payload::{HistoryPayload, HistoryPoint, SensorUpdate};
pub use sim::{SimFeed, SimSource};
pub use stream::StreamSource;

use std::fmt::Debug;

/// A connection lifecycle signal, distinct from application data.
///
/// Connect errors carry their detail only into the log; the signal itself
/// is payload-free so the status projection stays a pure function of
/// signal identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleSignal {
    /// A connection attempt has started.
    Connecting,
    /// The connection is established.
    Connected,
    /// An established connection was lost or closed.
    Disconnected,
    /// A connection attempt failed.
    ConnectError,
}

/// A typed event delivered by an [`EventSource`].
#[derive(Debug, Clone, PartialEq)]
pub enum TransportEvent {
    /// Connection status changed.
    Lifecycle(LifecycleSignal),
    /// A `sensor_update` payload arrived.
    Update(SensorUpdate),
}

/// Trait for receiving sensor events from various transports.
///
/// Implementations deliver events in the order the transport emitted them.
/// `poll` must be non-blocking; the UI thread drains it between render
/// passes.
///
/// # Example
///
/// ```
/// use sensorwatch::{ChannelSource, EventSource, LifecycleSignal, TransportEvent};
///
/// let (tx, mut source) = ChannelSource::create("test");
/// tx.send(TransportEvent::Lifecycle(LifecycleSignal::Connected)).unwrap();
/// assert!(source.poll().is_some());
/// ```
pub trait EventSource: Send + Debug {
    /// Poll for the next event.
    ///
    /// Returns `Some(event)` if an event is queued, `None` otherwise.
    fn poll(&mut self) -> Option<TransportEvent>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the status bar.
    fn description(&self) -> &str;

    /// Release the transport handle and stop further event delivery.
    ///
    /// Idempotent: the underlying handle is released at most once, and
    /// after the first call `poll` returns `None` even if events were
    /// queued before the release.
    fn close(&mut self);
}
