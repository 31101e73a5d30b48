//! Engine configuration, parsed from TOML text.
//!
//! ```toml
//! custom_prefix = "rejected"
//! log_failures = false
//! abort_message = "fixture is broken"
//! ```
//!
//! TOML has no null, so `custom_prefix = ""` is how a file asks for
//! custom validator messages to be reported verbatim.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ConfigError;

/// Knobs shared by every builder created from the same registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Prefix prepended to custom validator messages. `None` keeps them verbatim.
    #[serde(default = "default_custom_prefix")]
    pub custom_prefix: Option<String>,
    /// Emit a warn-level event for every failed validation.
    #[serde(default = "default_log_failures")]
    pub log_failures: bool,
    /// Leading text of the panic raised by strict extraction.
    #[serde(default = "default_abort_message")]
    pub abort_message: String,
}

fn default_custom_prefix() -> Option<String> {
    Some("custom validation failed".to_string())
}

fn default_log_failures() -> bool {
    true
}

fn default_abort_message() -> String {
    "invalid draft".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            custom_prefix: default_custom_prefix(),
            log_failures: default_log_failures(),
            abort_message: default_abort_message(),
        }
    }
}

impl EngineConfig {
    /// Parses configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Like [`from_toml_str`](Self::from_toml_str) but falls back to the
    /// defaults with a warning on parse errors.
    pub fn from_toml_or_default(text: &str) -> Self {
        match Self::from_toml_str(text) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to parse engine config: {}. Falling back to defaults.", e);
                Self::default()
            }
        }
    }

    /// Config that reports custom validator messages verbatim.
    #[must_use]
    pub fn verbatim() -> Self {
        Self {
            custom_prefix: None,
            ..Self::default()
        }
    }
}
