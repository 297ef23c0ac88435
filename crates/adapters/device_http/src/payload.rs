//! Wire format of the device's `/data` response.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use climadash_domain::error::ValidationError;
use climadash_domain::reading::StatusReading;

/// JSON body returned by `GET {base}/data`.
///
/// `fan` and `lamp` follow loose truthiness since firmware variants send
/// booleans, `0`/`1`, or strings. A missing or `null` flag counts as off.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusPayload {
    pub temp: f64,
    pub hum: f64,
    #[serde(default, deserialize_with = "truthy")]
    pub fan: bool,
    #[serde(default, deserialize_with = "truthy")]
    pub lamp: bool,
}

impl StatusPayload {
    /// Convert into a validated domain reading.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteReading`] for NaN or infinite values.
    pub fn into_reading(self) -> Result<StatusReading, ValidationError> {
        StatusReading::new(self.temp, self.hum, self.fan, self.lamp)
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

/// `false`, `null`, `0`, and `""` are off; everything else is on.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
