//! Dashboard: the explicit application state behind every view.
//!
//! Holds the text shown in the status fields, the rolling sample buffer fed
//! into the chart, and the flag gating whether polls reach the device.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::history::{Sample, SampleBuffer};
use crate::reading::{StatusReading, SwitchState};
use crate::time::{Timestamp, clock_label};

/// Values rendered in the dashboard's text fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayFields {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub fan: SwitchState,
    pub lamp: SwitchState,
    pub sensors_enabled: bool,
}

impl Default for DisplayFields {
    fn default() -> Self {
        Self {
            temperature: None,
            humidity: None,
            fan: SwitchState::Unknown,
            lamp: SwitchState::Unknown,
            sensors_enabled: true,
        }
    }
}

impl DisplayFields {
    #[must_use]
    pub fn temperature_text(&self) -> String {
        number_text(self.temperature)
    }

    #[must_use]
    pub fn humidity_text(&self) -> String {
        number_text(self.humidity)
    }

    #[must_use]
    pub fn sensors_text(&self) -> &'static str {
        if self.sensors_enabled { "ON" } else { "OFF" }
    }
}

fn number_text(value: Option<f64>) -> String {
    value.map_or_else(|| "--".to_string(), |v| v.to_string())
}

/// Display fields plus chart series, copied out for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub fields: DisplayFields,
    pub history_capacity: usize,
    pub samples: Vec<Sample>,
}

/// Mutable dashboard state.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    fields: DisplayFields,
    history: SampleBuffer,
}

impl Dashboard {
    /// Create a dashboard whose chart keeps `capacity` samples.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, ValidationError> {
        Ok(Self {
            fields: DisplayFields::default(),
            history: SampleBuffer::with_capacity(capacity)?,
        })
    }

    #[must_use]
    pub fn sensors_enabled(&self) -> bool {
        self.fields.sensors_enabled
    }

    /// Flip the sensor flag, returning the new value.
    pub fn toggle_sensors(&mut self) -> bool {
        self.fields.sensors_enabled = !self.fields.sensors_enabled;
        self.fields.sensors_enabled
    }

    /// Update the four status fields and append a chart point taken at `at`.
    pub fn apply_reading(&mut self, reading: &StatusReading, at: Timestamp) {
        self.fields.temperature = Some(reading.temperature);
        self.fields.humidity = Some(reading.humidity);
        self.fields.fan = reading.fan();
        self.fields.lamp = reading.lamp();
        self.history.push(Sample {
            label: clock_label(at),
            recorded_at: at,
            temperature: reading.temperature,
            humidity: reading.humidity,
        });
    }

    #[must_use]
    pub fn fields(&self) -> &DisplayFields {
        &self.fields
    }

    #[must_use]
    pub fn history(&self) -> &SampleBuffer {
        &self.history
    }

    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            fields: self.fields,
            history_capacity: self.history.capacity(),
            samples: self.history.to_vec(),
        }
    }
}
