//! In-memory fakes shared by the handler tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use climadash_app::ports::DeviceClient;
use climadash_app::services::actuator_service::ActuatorService;
use climadash_app::services::dashboard_service::DashboardService;
use climadash_app::snapshot_bus::InProcessSnapshotBus;
use climadash_domain::actuator::Command;
use climadash_domain::dashboard::Dashboard;
use climadash_domain::error::ClimadashError;
use climadash_domain::reading::StatusReading;

use crate::state::AppState;

/// Always answers with the same reading and records every command.
#[derive(Default)]
pub struct StubDevice {
    pub commands: Mutex<Vec<Command>>,
}

impl DeviceClient for StubDevice {
    async fn fetch_status(&self) -> Result<StatusReading, ClimadashError> {
        Ok(StatusReading::new(23.5, 41.0, true, false)?)
    }

    async fn send_command(&self, command: Command) -> Result<(), ClimadashError> {
        self.commands.lock().unwrap().push(command);
        Ok(())
    }
}

impl StubDevice {
    /// Yield until the spawned command tasks have recorded `count` commands.
    pub async fn wait_for_commands(&self, count: usize) -> Vec<Command> {
        for _ in 0..1000 {
            if self.commands.lock().unwrap().len() >= count {
                break;
            }
            tokio::task::yield_now().await;
        }
        self.commands.lock().unwrap().clone()
    }
}

pub type TestState = AppState<StubDevice, Arc<InProcessSnapshotBus>>;

pub fn test_state() -> (TestState, Arc<StubDevice>, Arc<InProcessSnapshotBus>) {
    let device = Arc::new(StubDevice::default());
    let bus = Arc::new(InProcessSnapshotBus::new(16));
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&device),
        Arc::clone(&bus),
        Dashboard::default(),
    ));
    let state = AppState::new(
        dashboard_service,
        ActuatorService::new(Arc::clone(&device)),
        Arc::clone(&bus),
        Duration::from_millis(2000),
    );
    (state, device, bus)
}
