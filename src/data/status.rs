//! Connection health projection.
//!
//! Maps raw transport lifecycle signals to the three-color status badge.
//! The state machine is flat: the most recent signal wins, with no guard
//! conditions and no terminal state - the transport's own reconnect policy
//! decides what signal arrives next.

use crate::source::LifecycleSignal;

/// Connection state derived from the most recent lifecycle signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No connection attempt has been initiated yet.
    #[default]
    Uninitialized,
    /// A connection attempt is in flight.
    Connecting,
    /// The stream is live.
    Connected,
    /// An established connection was lost or closed.
    Disconnected,
    /// The last connection attempt failed.
    Error,
}

/// Badge color for the connection status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Amber,
    Green,
    Red,
}

/// The visual connection-status indicator: color, label, description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub color: BadgeColor,
    pub label: &'static str,
    pub description: &'static str,
}

impl ConnectionState {
    /// Transition on a lifecycle signal. Total over all (state, signal)
    /// pairs; the previous state never constrains the next.
    pub fn observe(self, signal: LifecycleSignal) -> Self {
        match signal {
            LifecycleSignal::Connecting => ConnectionState::Connecting,
            LifecycleSignal::Connected => ConnectionState::Connected,
            LifecycleSignal::Disconnected => ConnectionState::Disconnected,
            LifecycleSignal::ConnectError => ConnectionState::Error,
        }
    }

    /// Project this state into its display badge.
    pub fn badge(self) -> Badge {
        match self {
            ConnectionState::Connecting => Badge {
                color: BadgeColor::Amber,
                label: "Connecting",
                description: "Attempting to connect...",
            },
            ConnectionState::Connected => Badge {
                color: BadgeColor::Green,
                label: "Connected",
                description: "",
            },
            ConnectionState::Uninitialized
            | ConnectionState::Disconnected
            | ConnectionState::Error => Badge {
                color: BadgeColor::Red,
                label: "Disconnected",
                description: "Connection error",
            },
        }
    }
}
