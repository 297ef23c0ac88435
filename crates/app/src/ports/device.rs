//! Device port: the request/response interface of the remote board.

use std::future::Future;
use std::sync::Arc;

use climadash_domain::actuator::Command;
use climadash_domain::error::ClimadashError;
use climadash_domain::reading::StatusReading;

/// Talks to the microcontroller that owns the sensors and actuators.
///
/// Implementations live in adapter crates (`climadash-adapter-device-http`,
/// `climadash-adapter-virtual`). No timeout or retry is expected at this level.
pub trait DeviceClient {
    /// Fetch the current readings and actuator states.
    fn fetch_status(
        &self,
    ) -> impl Future<Output = Result<StatusReading, ClimadashError>> + Send;

    /// Ask the device to switch an actuator. The response body is ignored.
    fn send_command(
        &self,
        command: Command,
    ) -> impl Future<Output = Result<(), ClimadashError>> + Send;
}

impl<T: DeviceClient + Send + Sync> DeviceClient for Arc<T> {
    fn fetch_status(
        &self,
    ) -> impl Future<Output = Result<StatusReading, ClimadashError>> + Send {
        (**self).fetch_status()
    }

    fn send_command(
        &self,
        command: Command,
    ) -> impl Future<Output = Result<(), ClimadashError>> + Send {
        (**self).send_command(command)
    }
}
