//! Channel-based event source.
//!
//! Receives transport events via a tokio unbounded channel. This is useful
//! for embedding the dashboard behind another event pump (or for tests)
//! where events are pushed rather than read from a network stream.

use tokio::sync::mpsc;

use super::{EventSource, TransportEvent};

/// An event source fed by an in-process channel.
///
/// The producer sends typed [`TransportEvent`]s through the channel and
/// this source hands them to the UI in order.
///
/// # Example
///
/// ```
/// use sensorwatch::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("embedded");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: mpsc::UnboundedReceiver<TransportEvent>,
    description: String,
    closed: bool,
}

impl ChannelSource {
    /// Create a new channel source around an existing receiver.
    pub fn new(
        receiver: mpsc::UnboundedReceiver<TransportEvent>,
        source_description: &str,
    ) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            closed: false,
        }
    }

    /// Create a channel pair for pushing events to a ChannelSource.
    ///
    /// Returns (sender, source) where the sender pushes events and the
    /// source is handed to the dashboard.
    pub fn create(source_description: &str) -> (mpsc::UnboundedSender<TransportEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl EventSource for ChannelSource {
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
        if !self.closed {
            self.receiver.close();
            self.closed = true;
        }
    }
}
