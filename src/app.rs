//! Application state and event pump.

use crate::data::{Badge, ConnectionState, LiveState};
use crate::source::{EventSource, LifecycleSignal, TransportEvent};
use crate::ui::Theme;

/// Main application state.
///
/// Owns the event source for the lifetime of the view: the transport
/// handle is acquired at construction and released exactly once by
/// [`App::shutdown`], regardless of connection state at that time.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Event source and projected state
    source: Box<dyn EventSource>,
    pub state: LiveState,
    pub connection: ConnectionState,

    // UI
    pub theme: Theme,

    released: bool,
}

impl App {
    /// Create a new App around the given event source.
    ///
    /// Constructing the app initiates the session, so the connection state
    /// moves straight from uninitialized to connecting.
    pub fn new(source: Box<dyn EventSource>) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            state: LiveState::new(),
            connection: ConnectionState::default().observe(LifecycleSignal::Connecting),
            theme: Theme::auto_detect(),
            released: false,
        }
    }

    /// Returns a description of the current event source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Drain all queued transport events, in order.
    ///
    /// Lifecycle signals drive the connection state; each update replaces
    /// the live state wholesale. Returns the number of updates applied,
    /// which callers can use to skip redundant render work.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.source.poll() {
            match event {
                TransportEvent::Lifecycle(signal) => {
                    self.connection = self.connection.observe(signal);
                }
                TransportEvent::Update(update) => {
                    self.state.apply_update(update);
                    applied += 1;
                }
            }
        }
        applied
    }

    /// The current connection badge.
    pub fn badge(&self) -> Badge {
        self.connection.badge()
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Release the transport handle. Safe to call more than once; the
    /// handle is released on the first call only, and no state mutation
    /// happens afterwards even if events were queued.
    pub fn shutdown(&mut self) {
        if !self.released {
            self.source.close();
            self.released = true;
        }
    }
}
