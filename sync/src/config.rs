//! Processor configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use cairn_types::{Height, ProcessorParams};

use crate::SyncError;

/// Configuration for a sync session.
///
/// Can be loaded from a TOML file via [`SyncConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so a
/// partial file is valid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Window size and quorum threshold of the processor.
    #[serde(default)]
    pub params: ProcessorParams,

    /// Height the window starts at.
    #[serde(default)]
    pub start_height: Height,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl SyncConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SyncError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Out-of-range parameters are clamped here, since deserialization
    /// bypasses [`ProcessorParams::new`].
    pub fn from_toml_str(s: &str) -> Result<Self, SyncError> {
        let mut config: SyncConfig =
            toml::from_str(s).map_err(|e| SyncError::Config(e.to_string()))?;
        config.params = config.params.clamped();
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("SyncConfig is always serializable to TOML")
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            params: ProcessorParams::default(),
            start_height: 0,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}
