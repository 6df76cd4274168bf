//! Data models and projection for the live dashboard.
//!
//! This module turns raw transport events into the state the UI renders.
//!
//! ## Submodules
//!
//! - [`store`]: the live state store ([`LiveState`]) - latest reading plus
//!   per-channel history, replaced wholesale on every update
//! - [`status`]: connection health projection ([`ConnectionState`] and its
//!   [`Badge`])
//! - [`series`]: chart-ready series formatting ([`ChartSeries`]) and
//!   wall-clock timestamp display
//!
//! ## Data flow
//!
//! ```text
//! TransportEvent
//!     │
//!     ├── Lifecycle(signal) ──▶ ConnectionState::observe() ──▶ Badge
//!     │
//!     └── Update(payload) ────▶ LiveState::apply_update()
//!                                   │
//!                                   └──▶ ChartSeries::from_points() (per channel)
//! ```

pub mod series;
pub mod status;
pub mod store;

pub use series::{format_clock, ChartSeries, BLANK_CLOCK};
pub use status::{Badge, BadgeColor, ConnectionState};
pub use store::{Channel, LiveState, Reading};
