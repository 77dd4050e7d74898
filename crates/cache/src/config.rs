//! Aggregator configuration with environment and file sources
use hitrate_core::{
    Error, Result, DEFAULT_CACHE_LABEL, DEFAULT_REPORT_INTERVAL_SECS, HITRATE_CACHE_LABEL_VAR,
    HITRATE_REPORT_INTERVAL_VAR,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Settings for a hit-rate aggregator and its reporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Cache instance or directory named in every report
    pub cache_label: String,
    /// Length of a reporting cycle; zero disables the reporter
    #[serde(rename = "report_interval_secs", with = "duration_secs")]
    pub report_interval: Duration,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            cache_label: DEFAULT_CACHE_LABEL.to_string(),
            report_interval: Duration::from_secs(DEFAULT_REPORT_INTERVAL_SECS),
        }
    }
}

impl AggregatorConfig {
    /// Start a builder from defaults
    pub fn builder() -> AggregatorConfigBuilder {
        AggregatorConfigBuilder::new()
    }

    /// Defaults overridden by `HITRATE_CACHE_LABEL` and
    /// `HITRATE_REPORT_INTERVAL_SECS`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| Error::file_system(path, "read", e))?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Apply environment overrides on top of the current values
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(label) = std::env::var(HITRATE_CACHE_LABEL_VAR) {
            self.cache_label = label;
        }

        if let Ok(raw) = std::env::var(HITRATE_REPORT_INTERVAL_VAR) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                Error::configuration(format!(
                    "invalid {HITRATE_REPORT_INTERVAL_VAR} value '{raw}': {e}"
                ))
            })?;
            self.report_interval = Duration::from_secs(secs);
        }

        Ok(())
    }
}

/// Builder for aggregator configurations
pub struct AggregatorConfigBuilder {
    config: AggregatorConfig,
}

impl AggregatorConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: AggregatorConfig::default(),
        }
    }

    /// Set the cache label
    pub fn cache_label(mut self, cache_label: impl Into<String>) -> Self {
        self.config.cache_label = cache_label.into();
        self
    }

    /// Set the reporting interval
    pub fn report_interval(mut self, interval: Duration) -> Self {
        self.config.report_interval = interval;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> AggregatorConfig {
        self.config
    }
}

impl Default for AggregatorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(
        duration: &Duration,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
