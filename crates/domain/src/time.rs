//! Time and timestamp helpers.

use chrono::{DateTime, Local, Utc};

/// UTC timestamp used for `recorded_at` on samples.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Wall-clock label shown on the chart's time axis (`HH:MM:SS`, local time).
#[must_use]
pub fn clock_label(at: Timestamp) -> String {
    at.with_timezone(&Local).format("%H:%M:%S").to_string()
}
