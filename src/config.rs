// Demo configuration loaded from an optional `patterns.toml`.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Settings shared by the demo binaries. Every field has a default, so an
/// empty file (or no file at all) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Width of the dashed rule printed between demo sections.
    pub separator_width: usize,
    /// Colorize section banners on stdout.
    pub color: bool,
    /// Fallback filter for diagnostics when `RUST_LOG` is unset.
    pub log_level: String,
    /// Bound on the undo stack of the command demo.
    pub history_limit: Option<usize>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            separator_width: 30,
            color: true,
            log_level: "warn".to_string(),
            history_limit: None,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Like [`DemoConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.separator_width == 0 {
            return Err(ConfigError::invalid(
                "separator_width",
                "must be greater than 0",
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "log_level",
                format!("expected one of {}", LOG_LEVELS.join(", ")),
            ));
        }
        Ok(())
    }
}
