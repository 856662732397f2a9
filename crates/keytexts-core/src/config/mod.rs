mod defaults;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::KeyTextsError;
use defaults::*;

/// Top-level keytexts configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keytexts: GeneralConfig,
    #[serde(default)]
    pub overrides: OverridesConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Locale to bind when none is given on the command line.
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            log_level: default_log_level(),
        }
    }
}

/// Where dynamically localized strings come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverridesConfig {
    /// Optional string-resource file (`[strings.<locale>]` tables).
    /// When unset the bundled resources are used.
    #[serde(default)]
    pub resources: Option<String>,
    /// Locale asked for when binding the no-language layout.
    #[serde(default = "default_system_locale")]
    pub system_locale: String,
    /// Inline strings per locale, layered over the resource file.
    #[serde(default)]
    pub strings: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for OverridesConfig {
    fn default() -> Self {
        Self {
            resources: None,
            system_locale: default_system_locale(),
            strings: BTreeMap::new(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, KeyTextsError> {
    toml::from_str(content)
        .map_err(|e| KeyTextsError::Config(format!("failed to parse config: {e}")))
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, KeyTextsError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| KeyTextsError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    parse(&content)
}
