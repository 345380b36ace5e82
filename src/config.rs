//! # Configuration Management
//!
//! Centralized configuration for the RCON client.
//!
//! This module provides structured configuration for a session: timeout
//! bounds and reassembly ceilings.
//!
//! ## Configuration Sources
//! - TOML files via `from_file()`
//! - Environment variables via `from_env()` (`RCON_CLIENT_*`)
//! - Direct instantiation with defaults
//!
//! ## Robustness Considerations
//! - Every socket operation carries a bounded timeout; a server that
//!   stops responding surfaces as an error, never a hang
//! - Reassembly ceilings bound memory held for a single response

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{RconError, Result};
use crate::utils::timeout;

/// Default ceiling on fragments accumulated for one response.
pub const DEFAULT_MAX_FRAGMENTS: usize = 256;

/// Default ceiling on total payload bytes accumulated for one response.
pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 1024 * 1024;

/// Per-session configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Bound on establishing the TCP connection.
    #[serde(with = "duration_serde")]
    pub connect_timeout: Duration,

    /// Bound on each individual frame read.
    #[serde(with = "duration_serde")]
    pub read_timeout: Duration,

    /// Bound on a whole command exchange, reassembly included.
    #[serde(with = "duration_serde")]
    pub command_timeout: Duration,

    /// Maximum fragments accumulated for one response before the
    /// exchange is abandoned as too large.
    pub max_fragments: usize,

    /// Maximum total payload bytes accumulated for one response.
    pub max_response_bytes: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: timeout::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: timeout::DEFAULT_READ_TIMEOUT,
            command_timeout: timeout::DEFAULT_COMMAND_TIMEOUT,
            max_fragments: DEFAULT_MAX_FRAGMENTS,
            max_response_bytes: DEFAULT_MAX_RESPONSE_BYTES,
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| RconError::Config(format!("failed to read config file: {e}")))?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str::<Self>(content)
            .map_err(|e| RconError::Config(format!("failed to parse TOML: {e}")))
    }

    /// Load configuration from environment variables, starting from the
    /// defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(ms) = std::env::var("RCON_CLIENT_CONNECT_TIMEOUT_MS") {
            if let Ok(val) = ms.parse::<u64>() {
                config.connect_timeout = Duration::from_millis(val);
            }
        }

        if let Ok(ms) = std::env::var("RCON_CLIENT_READ_TIMEOUT_MS") {
            if let Ok(val) = ms.parse::<u64>() {
                config.read_timeout = Duration::from_millis(val);
            }
        }

        if let Ok(ms) = std::env::var("RCON_CLIENT_COMMAND_TIMEOUT_MS") {
            if let Ok(val) = ms.parse::<u64>() {
                config.command_timeout = Duration::from_millis(val);
            }
        }

        if let Ok(bytes) = std::env::var("RCON_CLIENT_MAX_RESPONSE_BYTES") {
            if let Ok(val) = bytes.parse::<usize>() {
                config.max_response_bytes = val;
            }
        }

        Ok(config)
    }

    /// Apply overrides to the default configuration.
    pub fn default_with_overrides<F>(mutator: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut config = Self::default();
        mutator(&mut config);
        config
    }

    /// Validate the configuration for common misconfigurations.
    ///
    /// Returns a list of validation errors. Empty list means the
    /// configuration is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.connect_timeout.as_millis() < 100 {
            errors.push("Connect timeout too short (minimum: 100ms)".to_string());
        } else if self.connect_timeout.as_secs() > 300 {
            errors.push("Connect timeout too long (maximum: 300s)".to_string());
        }

        if self.read_timeout.as_millis() < 10 {
            errors.push("Read timeout too short (minimum: 10ms)".to_string());
        }

        if self.command_timeout < self.read_timeout {
            errors.push("Command timeout shorter than the read timeout".to_string());
        }

        if self.max_fragments == 0 {
            errors.push("Max fragments must be greater than 0".to_string());
        }

        if self.max_response_bytes == 0 {
            errors.push("Max response bytes must be greater than 0".to_string());
        } else if self.max_response_bytes > 64 * 1024 * 1024 {
            errors.push(format!(
                "Max response bytes very high: {} (maximum recommended: 64 MB)",
                self.max_response_bytes
            ));
        }

        errors
    }

    /// Validate and return Result - convenience method
    pub fn validate_strict(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(RconError::Config(format!(
                "configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

/// Helper module for Duration serialization/deserialization
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis = duration.as_millis() as u64;
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
