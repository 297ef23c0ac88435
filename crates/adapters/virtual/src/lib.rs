//! # climadash-adapter-virtual
//!
//! Simulated board implementing [`DeviceClient`] in-process, for running the
//! dashboard without hardware and for end-to-end tests.
//!
//! ## Behaviour
//!
//! | Output | Value |
//! |--------|-------|
//! | Temperature | Saw-tooth between 21.0 and 22.8 °C, 1.0 °C lower while the fan runs |
//! | Humidity | Saw-tooth between 44 and 48.5 %, 3 % lower while the fan runs |
//! | Fan / Lamp | Whatever the last command set; both start off |
//!
//! The simulation advances one step per [`fetch_status`](DeviceClient::fetch_status).
//!
//! ## Dependency rule
//!
//! Depends on `climadash-app` (port traits) and `climadash-domain` only.

use std::sync::{Mutex, MutexGuard, PoisonError};

use climadash_app::ports::DeviceClient;
use climadash_domain::actuator::{Actuator, Command};
use climadash_domain::error::ClimadashError;
use climadash_domain::reading::StatusReading;

const STEPS: u32 = 10;

#[derive(Debug, Default)]
struct BoardState {
    step: u32,
    fan_on: bool,
    lamp_on: bool,
    unreachable: bool,
}

/// In-memory stand-in for the real board.
#[derive(Debug, Default)]
pub struct VirtualDevice {
    state: Mutex<BoardState>,
}

impl VirtualDevice {
    /// Simulate the board dropping off (or rejoining) the network.
    pub fn set_reachable(&self, reachable: bool) {
        self.lock().unreachable = !reachable;
    }

    /// Current actuator state as the board sees it.
    #[must_use]
    pub fn actuator(&self, actuator: Actuator) -> bool {
        let state = self.lock();
        match actuator {
            Actuator::Fan => state.fan_on,
            Actuator::Lamp => state.lamp_on,
        }
    }

    fn lock(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> Result<StatusReading, ClimadashError> {
        let mut state = self.lock();
        if state.unreachable {
            return Err(unreachable());
        }
        let phase = f64::from(state.step % STEPS);
        state.step = state.step.wrapping_add(1);

        let cooling = if state.fan_on { 1.0 } else { 0.0 };
        let drying = if state.fan_on { 3.0 } else { 0.0 };
        let temperature = 21.0 + phase * 0.2 - cooling;
        let humidity = 44.0 + phase * 0.5 - drying;
        StatusReading::new(temperature, humidity, state.fan_on, state.lamp_on)
            .map_err(ClimadashError::from)
    }

    fn apply(&self, command: Command) -> Result<(), ClimadashError> {
        let mut state = self.lock();
        if state.unreachable {
            return Err(unreachable());
        }
        match command.actuator {
            Actuator::Fan => state.fan_on = command.on,
            Actuator::Lamp => state.lamp_on = command.on,
        }
        tracing::debug!(actuator = %command.actuator, on = command.on, "virtual board switched");
        Ok(())
    }
}

fn unreachable() -> ClimadashError {
    ClimadashError::Device(Box::new(std::io::Error::new(
        std::io::ErrorKind::NotConnected,
        "virtual device unreachable",
    )))
}

impl DeviceClient for VirtualDevice {
    async fn fetch_status(&self) -> Result<StatusReading, ClimadashError> {
        self.read()
    }

    async fn send_command(&self, command: Command) -> Result<(), ClimadashError> {
        self.apply(command)
    }
}
