//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `lightpanel.toml` in the working directory unless another path
//! is given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values.

use std::path::Path;

use lightpanel_adapter_http_ureq::{HttpConfig, HttpConfigError};
use serde::Deserialize;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_PATH: &str = "lightpanel.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Light controller connection.
    pub controller: HttpConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or [`DEFAULT_PATH`]) then apply
    /// environment-variable overrides.
    ///
    /// A missing default file is not an error; a missing explicit file is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or the
    /// resulting configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path, true)?,
            None => Self::from_file(Path::new(DEFAULT_PATH), false)?,
        };
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("LIGHTPANEL_URL") {
            self.controller.base_url = val;
        }
        if let Some(val) = var("LIGHTPANEL_TIMEOUT_SECS") {
            let secs = val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnv {
                name: "LIGHTPANEL_TIMEOUT_SECS",
                value: val.clone(),
            })?;
            self.controller.timeout_secs = Some(secs);
        }
        if let Some(val) = var("LIGHTPANEL_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    /// Check the controller settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Controller`] when the base URL or timeout is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller.validate()?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lightctl=info,lightpanel=info,warn".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Environment variable holding a value of the wrong type.
    #[error("invalid value {value:?} for {name}")]
    InvalidEnv { name: &'static str, value: String },
    /// Semantic validation failure.
    #[error("invalid controller configuration")]
    Controller(#[from] HttpConfigError),
}
