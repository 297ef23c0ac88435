//! Status reading: one sample of the device's sensors and actuators.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Discrete state of an actuator as last reported by the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchState {
    On,
    Off,
    #[default]
    Unknown,
}

impl SwitchState {
    /// Whether the device reported this actuator as running.
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Text shown in the dashboard status field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::On => "ON",
            Self::Off => "OFF",
            Self::Unknown => "--",
        }
    }
}

impl From<bool> for SwitchState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl std::fmt::Display for SwitchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Temperature, humidity and actuator states received in one poll.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusReading {
    /// Degrees Celsius.
    pub temperature: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    pub fan_on: bool,
    pub lamp_on: bool,
}

impl StatusReading {
    /// Build a reading, rejecting non-finite sensor values.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteReading`] if either value is NaN or infinite.
    pub fn new(
        temperature: f64,
        humidity: f64,
        fan_on: bool,
        lamp_on: bool,
    ) -> Result<Self, ValidationError> {
        if !temperature.is_finite() || !humidity.is_finite() {
            return Err(ValidationError::NonFiniteReading);
        }
        Ok(Self {
            temperature,
            humidity,
            fan_on,
            lamp_on,
        })
    }

    #[must_use]
    pub fn fan(&self) -> SwitchState {
        self.fan_on.into()
    }

    #[must_use]
    pub fn lamp(&self) -> SwitchState {
        self.lamp_on.into()
    }
}
