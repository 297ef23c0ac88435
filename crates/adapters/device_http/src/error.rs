//! Device HTTP adapter error types.

use climadash_domain::error::ClimadashError;

/// Errors specific to the HTTP device client.
#[derive(Debug, thiserror::Error)]
pub enum DeviceHttpError {
    /// The request could not be sent or the body could not be read.
    #[error("device request failed")]
    Request(#[source] reqwest::Error),

    /// The device answered with a non-success status code.
    #[error("device answered with HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the expected JSON status object.
    #[error("failed to decode device status payload")]
    Decode(#[source] serde_json::Error),

    /// A domain-level error (validation, etc.).
    #[error("domain error")]
    Domain(#[source] ClimadashError),
}

impl DeviceHttpError {
    /// Convert into a [`ClimadashError`] for propagation across port
    /// boundaries. Transport and status failures become
    /// [`ClimadashError::Device`]; decoding failures become
    /// [`ClimadashError::Payload`].
    pub fn into_domain(self) -> ClimadashError {
        match self {
            Self::Domain(err) => err,
            decode @ Self::Decode(_) => ClimadashError::Payload(Box::new(decode)),
            other => ClimadashError::Device(Box::new(other)),
        }
    }
}

impl From<DeviceHttpError> for ClimadashError {
    fn from(err: DeviceHttpError) -> Self {
        err.into_domain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climadash_domain::error::ValidationError;

    #[test]
    fn should_display_status_error_with_code() {
        let err = DeviceHttpError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "device answered with HTTP 503 Service Unavailable"
        );
    }

    #[test]
    fn should_convert_status_error_to_device_error() {
        let err: ClimadashError =
            DeviceHttpError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR).into();
        assert!(matches!(err, ClimadashError::Device(_)));
    }

    #[test]
    fn should_convert_decode_error_to_payload_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad").unwrap_err();
        let err: ClimadashError = DeviceHttpError::Decode(json_err).into();
        assert!(matches!(err, ClimadashError::Payload(_)));
    }

    #[test]
    fn should_convert_domain_error_back_to_domain() {
        let domain_err = ClimadashError::Validation(ValidationError::NonFiniteReading);
        let back: ClimadashError = DeviceHttpError::Domain(domain_err).into();
        assert!(matches!(
            back,
            ClimadashError::Validation(ValidationError::NonFiniteReading)
        ));
    }
}
