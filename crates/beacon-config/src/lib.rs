#![allow(clippy::must_use_candidate)]

mod classify;
mod loader;
pub mod telemetry;

use serde::Deserialize;

pub use classify::ClassifyConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level Beacon configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Classification defaults
    #[serde(default)]
    pub classify: ClassifyConfig,
}
