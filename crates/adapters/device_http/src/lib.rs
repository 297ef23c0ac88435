//! # climadash-adapter-device-http
//!
//! [`DeviceClient`] implementation that talks to the board's built-in web
//! server with plain `GET` requests via [reqwest](https://docs.rs/reqwest).
//!
//! ## Endpoints
//!
//! | Request | Meaning |
//! |---------|---------|
//! | `GET {base}/data` | JSON status: `{"temp": …, "hum": …, "fan": …, "lamp": …}` |
//! | `GET {base}/fanOn`, `{base}/fanOff` | Switch the fan |
//! | `GET {base}/lampOn`, `{base}/lampOff` | Switch the lamp |
//!
//! No timeout or retry is configured; the poll scheduler's next tick is the retry.
//!
//! ## Dependency rule
//!
//! Depends on `climadash-app` (port traits) and `climadash-domain` only.

pub mod config;
pub mod error;
pub mod payload;

use climadash_app::ports::DeviceClient;
use climadash_domain::actuator::Command;
use climadash_domain::error::{ClimadashError, ValidationError};
use climadash_domain::reading::StatusReading;

pub use config::DeviceHttpConfig;
pub use error::DeviceHttpError;

use payload::StatusPayload;

/// HTTP client for one device.
#[derive(Debug, Clone)]
pub struct HttpDeviceClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDeviceClient {
    /// Build a client for the configured device.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceHttpError::Domain`] when the base URL is empty and
    /// [`DeviceHttpError::Request`] when the TLS backend fails to initialise.
    pub fn new(config: &DeviceHttpConfig) -> Result<Self, DeviceHttpError> {
        let base_url = config.normalized_base_url();
        if base_url.is_empty() {
            return Err(DeviceHttpError::Domain(ValidationError::EmptyBaseUrl.into()));
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(DeviceHttpError::Request)?;
        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn fetch(&self) -> Result<StatusReading, DeviceHttpError> {
        let response = self
            .client
            .get(self.endpoint("data"))
            .send()
            .await
            .map_err(DeviceHttpError::Request)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeviceHttpError::Status(status));
        }
        let body = response.bytes().await.map_err(DeviceHttpError::Request)?;
        let payload: StatusPayload =
            serde_json::from_slice(&body).map_err(DeviceHttpError::Decode)?;
        payload
            .into_reading()
            .map_err(|err| DeviceHttpError::Domain(err.into()))
    }

    async fn command(&self, command: Command) -> Result<(), DeviceHttpError> {
        let url = self.endpoint(command.path());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(DeviceHttpError::Request)?;
        tracing::trace!(%url, status = %response.status(), "command delivered");
        Ok(())
    }
}

impl DeviceClient for HttpDeviceClient {
    async fn fetch_status(&self) -> Result<StatusReading, ClimadashError> {
        self.fetch().await.map_err(ClimadashError::from)
    }

    async fn send_command(&self, command: Command) -> Result<(), ClimadashError> {
        self.command(command).await.map_err(ClimadashError::from)
    }
}
