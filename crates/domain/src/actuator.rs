//! Actuators and the on/off commands the device accepts for them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A controllable output on the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actuator {
    Fan,
    Lamp,
}

impl Actuator {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fan => "fan",
            Self::Lamp => "lamp",
        }
    }
}

impl std::fmt::Display for Actuator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a path segment names no known actuator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown actuator `{0}`")]
pub struct UnknownActuator(pub String);

impl FromStr for Actuator {
    type Err = UnknownActuator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fan" => Ok(Self::Fan),
            "lamp" => Ok(Self::Lamp),
            other => Err(UnknownActuator(other.to_string())),
        }
    }
}

/// Switch one actuator on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub actuator: Actuator,
    pub on: bool,
}

impl Command {
    #[must_use]
    pub fn new(actuator: Actuator, on: bool) -> Self {
        Self { actuator, on }
    }

    /// Endpoint path on the device, relative to its base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match (self.actuator, self.on) {
            (Actuator::Fan, true) => "fanOn",
            (Actuator::Fan, false) => "fanOff",
            (Actuator::Lamp, true) => "lampOn",
            (Actuator::Lamp, false) => "lampOff",
        }
    }
}
