//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `climadash.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use climadash_adapter_device_http::DeviceHttpConfig;
use climadash_app::scheduler::DEFAULT_POLL_INTERVAL;
use climadash_domain::history::DEFAULT_CAPACITY;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Which device to talk to.
    pub device: DeviceConfig,
    /// Poll timing and chart length.
    pub poll: PollConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Device selection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub kind: DeviceKind,
    /// Settings for [`DeviceKind::Http`]; `base_url` sits directly under `[device]`.
    #[serde(flatten)]
    pub http: DeviceHttpConfig,
}

/// Backend behind the dashboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// The real board, over HTTP.
    #[default]
    Http,
    /// The in-process simulated board.
    Virtual,
}

impl FromStr for DeviceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Self::Http),
            "virtual" => Ok(Self::Virtual),
            other => Err(ConfigError::Validation(format!(
                "unknown device kind `{other}`, expected `http` or `virtual`"
            ))),
        }
    }
}

/// Poll scheduler configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    /// Delay between two poll ticks, in milliseconds.
    pub interval_ms: u64,
    /// Number of samples kept for the chart.
    pub history_capacity: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `climadash.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("climadash.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Apply overrides read through `var`. Unparsable numbers are ignored.
    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("CLIMADASH_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("CLIMADASH_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("CLIMADASH_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("CLIMADASH_DEVICE_URL") {
            self.device.http.base_url = val;
        }
        if let Some(val) = var("CLIMADASH_DEVICE_KIND") {
            self.device.kind = val.parse()?;
        }
        if let Some(ms) = var("CLIMADASH_POLL_INTERVAL_MS").and_then(|val| val.parse().ok()) {
            self.poll.interval_ms = ms;
        }
        if let Some(val) = var("CLIMADASH_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.device.kind == DeviceKind::Http && self.device.http.normalized_base_url().is_empty()
        {
            return Err(ConfigError::Validation(
                "device base URL must not be empty".to_string(),
            ));
        }
        if self.poll.interval_ms == 0 {
            return Err(ConfigError::Validation(
                "poll interval must be non-zero".to_string(),
            ));
        }
        if self.poll.history_capacity == 0 {
            return Err(ConfigError::Validation(
                "history capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl PollConfig {
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: u64::try_from(DEFAULT_POLL_INTERVAL.as_millis()).unwrap_or(2000),
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "climadashd=info,climadash=info,tower_http=debug".to_string(),
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
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.device.kind, DeviceKind::Http);
        assert_eq!(config.device.http.base_url, "http://192.168.1.100");
        assert_eq!(config.poll.interval(), Duration::from_millis(2000));
        assert_eq!(config.poll.history_capacity, 20);
        assert_eq!(
            config.logging.filter,
            "climadashd=info,climadash=info,tower_http=debug"
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.poll.interval_ms, 2000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [device]
            kind = 'virtual'
            base_url = 'http://10.0.0.42'

            [poll]
            interval_ms = 500
            history_capacity = 60

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.device.kind, DeviceKind::Virtual);
        assert_eq!(config.device.http.base_url, "http://10.0.0.42");
        assert_eq!(config.poll.interval(), Duration::from_millis(500));
        assert_eq!(config.poll.history_capacity, 60);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [device]
            base_url = 'http://esp32.local'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.device.http.base_url, "http://esp32.local");
        assert_eq!(config.device.kind, DeviceKind::Http);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.poll.history_capacity, 20);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_unknown_device_kind_in_toml() {
        let result: Result<Config, _> = toml::from_str("[device]\nkind = 'serial'");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("CLIMADASH_HOST", "127.0.0.1"),
                ("CLIMADASH_PORT", "8080"),
                ("CLIMADASH_DEVICE_URL", "http://10.1.1.1/"),
                ("CLIMADASH_DEVICE_KIND", "virtual"),
                ("CLIMADASH_POLL_INTERVAL_MS", "750"),
                ("CLIMADASH_LOG", "trace"),
            ]))
            .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.device.http.base_url, "http://10.1.1.1/");
        assert_eq!(config.device.kind, DeviceKind::Virtual);
        assert_eq!(config.poll.interval_ms, 750);
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_prefer_bind_over_host_and_port() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("CLIMADASH_HOST", "10.0.0.1"),
                ("CLIMADASH_PORT", "1111"),
                ("CLIMADASH_BIND", "127.0.0.1:4000"),
            ]))
            .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:4000");
    }

    #[test]
    fn should_prefer_rust_log_over_climadash_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("CLIMADASH_LOG", "debug"), ("RUST_LOG", "warn")]))
            .unwrap();
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn should_ignore_unparsable_numbers() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("CLIMADASH_PORT", "http"),
                ("CLIMADASH_POLL_INTERVAL_MS", "fast"),
            ]))
            .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.poll.interval_ms, 2000);
    }

    #[test]
    fn should_reject_unknown_device_kind_in_env() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("CLIMADASH_DEVICE_KIND", "serial")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_base_url_for_http_device() {
        let mut config = Config::default();
        config.device.http.base_url = " / ".to_string();
        assert!(config.validate().is_err());

        config.device.kind = DeviceKind::Virtual;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_zero_interval() {
        let mut config = Config::default();
        config.poll.interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_capacity() {
        let mut config = Config::default();
        config.poll.history_capacity = 0;
        assert!(config.validate().is_err());
    }
}
