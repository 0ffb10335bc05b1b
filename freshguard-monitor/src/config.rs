//! Monitor configuration
//!
//! Built in code with the builder methods, deserialized with serde, or read
//! from the environment:
//!
//! ```text
//! FRESHGUARD_READING_DELAY_MS   sensor latency in milliseconds (default 800)
//! FRESHGUARD_PROFILE            profile selected at startup (default fruit)
//! ```

use std::time::Duration;

use freshguard_core::constants::time::READING_DELAY_MS;
use freshguard_core::{ProfileKey, SynthesizerConfig};
use serde::{Deserialize, Serialize};

use crate::error::{MonitorError, MonitorResult};

/// Environment variable for the reading delay
pub const ENV_READING_DELAY_MS: &str = "FRESHGUARD_READING_DELAY_MS";

/// Environment variable for the startup profile
pub const ENV_PROFILE: &str = "FRESHGUARD_PROFILE";

/// Monitor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Simulated sensor latency per reading
    pub reading_delay_ms: u64,
    /// Profile key selected at startup
    pub initial_profile: String,
    /// Reading synthesis tuning
    pub synthesizer: SynthesizerConfig,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            reading_delay_ms: READING_DELAY_MS,
            initial_profile: ProfileKey::Fruit.as_str().to_string(),
            synthesizer: SynthesizerConfig::default(),
        }
    }
}

impl MonitorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `FRESHGUARD_*` environment variables
    pub fn from_env() -> MonitorResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> MonitorResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_READING_DELAY_MS) {
            config.reading_delay_ms = raw.trim().parse().map_err(|_| {
                MonitorError::Config(format!("{ENV_READING_DELAY_MS} must be milliseconds, got '{raw}'"))
            })?;
        }

        if let Some(raw) = lookup(ENV_PROFILE) {
            let key: ProfileKey = raw.parse()?;
            config.initial_profile = key.as_str().to_string();
        }

        Ok(config)
    }

    /// Set the reading delay in milliseconds
    pub fn reading_delay_ms(mut self, ms: u64) -> Self {
        self.reading_delay_ms = ms;
        self
    }

    /// Set the startup profile
    pub fn initial_profile(mut self, key: impl Into<String>) -> Self {
        self.initial_profile = key.into();
        self
    }

    /// Set the synthesizer tuning
    pub fn synthesizer(mut self, synthesizer: SynthesizerConfig) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// Reading delay as a `Duration`
    pub fn reading_delay(&self) -> Duration {
        Duration::from_millis(self.reading_delay_ms)
    }
}
