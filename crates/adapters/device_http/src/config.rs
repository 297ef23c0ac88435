//! HTTP device client configuration.

use serde::Deserialize;

/// Address of the board's web server used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "http://192.168.1.100";

/// Configuration for the HTTP device client.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeviceHttpConfig {
    /// Base URL of the device, e.g. `http://192.168.1.100`.
    ///
    /// Endpoints are resolved as `{base_url}/data`, `{base_url}/fanOn`, …
    pub base_url: String,
}

impl Default for DeviceHttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl DeviceHttpConfig {
    /// Base URL without surrounding whitespace or trailing slashes.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
