//! Stream-based event source.
//!
//! Receives sensor updates from an async byte stream carrying
//! newline-delimited JSON, and surfaces connection lifecycle signals
//! alongside the parsed payloads. This is the transport used for live
//! gateways reachable over TCP.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::warn;

use super::{EventSource, LifecycleSignal, SensorUpdate, TransportEvent};

/// An event source that reads `sensor_update` payloads from a byte stream.
///
/// A background task owns the connection and pushes typed events onto a
/// bounded channel; the UI drains them via `poll()`. Reconnection is this
/// source's own policy: on connect failure or stream loss it waits a fixed
/// delay and tries again, emitting the corresponding lifecycle signals so
/// the status badge tracks whatever happens next.
///
/// # Example with an in-memory stream
///
/// ```
/// use std::io::Cursor;
/// use sensorwatch::StreamSource;
///
/// # tokio_test::block_on(async {
/// let data = b"{\"temperature\": 21.5}\n";
/// let stream = Cursor::new(data.to_vec());
/// let source = StreamSource::spawn(stream, "example");
/// # });
/// ```
#[derive(Debug)]
pub struct StreamSource {
    receiver: mpsc::Receiver<TransportEvent>,
    description: String,
    handle: Option<tokio::task::JoinHandle<()>>,
    closed: bool,
}

impl StreamSource {
    /// Connect to a TCP endpoint serving newline-delimited `sensor_update`
    /// JSON, reconnecting with a fixed delay whenever the connection fails
    /// or drops.
    ///
    /// Must be called within a tokio runtime.
    pub fn connect(endpoint: &str, retry: Duration) -> Self {
        let (tx, rx) = mpsc::channel(64);
        let addr = endpoint.to_string();
        let task_addr = addr.clone();

        let handle = tokio::spawn(async move {
            loop {
                if send(&tx, TransportEvent::Lifecycle(LifecycleSignal::Connecting))
                    .await
                    .is_err()
                {
                    return;
                }

                match TcpStream::connect(&task_addr).await {
                    Ok(stream) => {
                        if send(&tx, TransportEvent::Lifecycle(LifecycleSignal::Connected))
                            .await
                            .is_err()
                        {
                            return;
                        }
                        if !pump_lines(stream, &tx).await {
                            return;
                        }
                        if send(&tx, TransportEvent::Lifecycle(LifecycleSignal::Disconnected))
                            .await
                            .is_err()
                        {
                            return;
                        }
                    }
                    Err(e) => {
                        warn!(endpoint = %task_addr, error = %e, "connection attempt failed");
                        if send(&tx, TransportEvent::Lifecycle(LifecycleSignal::ConnectError))
                            .await
                            .is_err()
                        {
                            return;
                        }
                    }
                }

                tokio::time::sleep(retry).await;
            }
        });

        Self {
            receiver: rx,
            description: format!("stream: {}", addr),
            handle: Some(handle),
            closed: false,
        }
    }

    /// Spawn a single-connection source over an existing async reader.
    ///
    /// The reader is treated as an already-established connection: the
    /// source emits `Connected`, then each parsed update, then
    /// `Disconnected` at EOF or read error. No reconnection is attempted.
    pub fn spawn<R>(reader: R, description: &str) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(64);

        let handle = tokio::spawn(async move {
            if send(&tx, TransportEvent::Lifecycle(LifecycleSignal::Connected))
                .await
                .is_err()
            {
                return;
            }
            if !pump_lines(reader, &tx).await {
                return;
            }
            let _ = send(&tx, TransportEvent::Lifecycle(LifecycleSignal::Disconnected)).await;
        });

        Self {
            receiver: rx,
            description: format!("stream: {}", description),
            handle: Some(handle),
            closed: false,
        }
    }
}

/// Read newline-delimited JSON updates until EOF or a read error.
///
/// Unparseable lines are logged and skipped; the connection stays up.
/// Returns false if the receiver side is gone and the task should exit.
async fn pump_lines<R>(reader: R, tx: &mpsc::Sender<TransportEvent>) -> bool
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => return true, // EOF
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match serde_json::from_str::<SensorUpdate>(trimmed) {
                    Ok(update) => {
                        if send(tx, TransportEvent::Update(update)).await.is_err() {
                            return false;
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "skipping malformed sensor_update payload");
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "stream read failed");
                return true;
            }
        }
    }
}

async fn send(
    tx: &mpsc::Sender<TransportEvent>,
    event: TransportEvent,
) -> Result<(), mpsc::error::SendError<TransportEvent>> {
    tx.send(event).await
}

impl EventSource for StreamSource {
    fn poll(&mut self) -> Option<TransportEvent> {
        if self.closed {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => None,
        }
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

impl Drop for StreamSource {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_json() -> &'static str {
        r#"{"temperature":21.5,"humidity":48,"last_update":1700000000000,"history":{"temperature":[{"timestamp":1700000000000,"value":21.5}],"humidity":[]}}"#
    }

    async fn drain(source: &mut StreamSource) -> Vec<TransportEvent> {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let mut events = Vec::new();
        while let Some(event) = source.poll() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_spawn_emits_lifecycle_around_updates() {
        let data = format!("{}\n", sample_json());
        let mut source = StreamSource::spawn(Cursor::new(data), "test");

        let events = drain(&mut source).await;
        assert_eq!(
            events.first(),
            Some(&TransportEvent::Lifecycle(LifecycleSignal::Connected))
        );
        assert!(matches!(events.get(1), Some(TransportEvent::Update(_))));
        assert_eq!(
            events.last(),
            Some(&TransportEvent::Lifecycle(LifecycleSignal::Disconnected))
        );
    }

    #[tokio::test]
    async fn test_spawn_parses_update_payload() {
        let data = format!("{}\n", sample_json());
        let mut source = StreamSource::spawn(Cursor::new(data), "test");

        let events = drain(&mut source).await;
        let update = events
            .iter()
            .find_map(|e| match e {
                TransportEvent::Update(u) => Some(u.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(update.temperature, Some(21.5));
        assert_eq!(update.history.temperature.len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_lines_are_skipped() {
        let data = format!("not valid json\nnull\n{}\n", sample_json());
        let mut source = StreamSource::spawn(Cursor::new(data), "test");

        let events = drain(&mut source).await;
        let updates: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, TransportEvent::Update(_)))
            .collect();
        assert_eq!(updates.len(), 1);
    }

    #[tokio::test]
    async fn test_multiple_updates_in_order() {
        let data = format!(
            "{}\n{}\n",
            r#"{"temperature":20.0}"#,
            r#"{"temperature":21.0}"#
        );
        let mut source = StreamSource::spawn(Cursor::new(data), "test");

        let events = drain(&mut source).await;
        let temps: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                TransportEvent::Update(u) => u.temperature,
                _ => None,
            })
            .collect();
        assert_eq!(temps, vec![20.0, 21.0]);
    }

    #[tokio::test]
    async fn test_close_stops_delivery_of_queued_events() {
        let data = format!("{}\n", sample_json());
        let mut source = StreamSource::spawn(Cursor::new(data), "test");

        // Let the task queue events, then release the handle before draining
        tokio::time::sleep(Duration::from_millis(50)).await;
        source.close();

        assert!(source.poll().is_none());

        // Second close is a no-op
        source.close();
        assert!(source.poll().is_none());
    }

    #[tokio::test]
    async fn test_description() {
        let source = StreamSource::spawn(Cursor::new(""), "tcp://localhost:5000");
        assert_eq!(source.description(), "stream: tcp://localhost:5000");
    }

    #[tokio::test]
    async fn test_connect_emits_connecting_then_error_for_dead_endpoint() {
        // Port 1 on localhost should refuse immediately
        let mut source = StreamSource::connect("127.0.0.1:1", Duration::from_secs(60));

        tokio::time::sleep(Duration::from_millis(200)).await;
        let mut events = Vec::new();
        while let Some(event) = source.poll() {
            events.push(event);
        }

        assert_eq!(
            events.first(),
            Some(&TransportEvent::Lifecycle(LifecycleSignal::Connecting))
        );
        assert!(events.contains(&TransportEvent::Lifecycle(LifecycleSignal::ConnectError)));
    }
}
