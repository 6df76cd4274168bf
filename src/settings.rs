//! Runtime settings for the dashboard.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `SENSORWATCH_*` environment variables. CLI flags override all of
//! these in `main`.
//!
//! ```toml
//! endpoint = "sensors.local:5000"
//! retry_secs = 3
//! update_secs = 3
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use config::{Config, Environment, File};

/// Default gateway endpoint (the local development gateway).
pub const DEFAULT_ENDPOINT: &str = "127.0.0.1:5000";

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Gateway endpoint, `host:port`.
    pub endpoint: String,
    /// Delay between reconnection attempts.
    pub retry_secs: u64,
    /// Emission interval for the simulated feed.
    pub update_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            retry_secs: 3,
            update_secs: 3,
        }
    }
}

impl Settings {
    /// Load settings from an optional TOML file with environment overlay.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("retry_secs", 3)?
            .set_default("update_secs", 3)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(Environment::with_prefix("SENSORWATCH"));

        let config = builder.build()?;
        Ok(Self {
            endpoint: config.get_string("endpoint")?,
            retry_secs: config.get_int("retry_secs")?.max(1) as u64,
            update_secs: config.get_int("update_secs")?.max(1) as u64,
        })
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_secs)
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_secs(self.update_secs)
    }
}
