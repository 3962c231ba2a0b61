//! Light controller connection settings.

use std::time::Duration;

use serde::Deserialize;

use crate::error::HttpConfigError;

/// Where the light controller lives and how long to wait for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL of the controller, without a trailing path (e.g. `http://lightctl.local`).
    pub base_url: String,
    /// Overall per-request timeout in seconds. Unset means no timeout beyond
    /// what the OS imposes.
    pub timeout_secs: Option<u64>,
}

impl HttpConfig {
    /// Check that the base URL is usable.
    ///
    /// # Errors
    ///
    /// Returns an [`HttpConfigError`] for an empty or non-HTTP URL, or a zero timeout.
    pub fn validate(&self) -> Result<(), HttpConfigError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(HttpConfigError::EmptyBaseUrl);
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(HttpConfigError::UnsupportedScheme(url.to_string()));
        }
        if self.timeout_secs == Some(0) {
            return Err(HttpConfigError::ZeroTimeout);
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://lightctl.local".to_string(),
            timeout_secs: None,
        }
    }
}
