use beacon_core::Subsystem;
use serde::Deserialize;

/// Defaults for offline classification
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassifyConfig {
    /// Classifier used when none is given on the command line
    #[serde(default)]
    pub subsystem: Subsystem,
}
