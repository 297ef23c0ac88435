//! Shared application state for axum handlers.

use std::sync::Arc;
use std::time::Duration;

use climadash_app::ports::{DeviceClient, SnapshotPublisher};
use climadash_app::services::actuator_service::ActuatorService;
use climadash_app::services::dashboard_service::DashboardService;
use climadash_app::snapshot_bus::InProcessSnapshotBus;

/// Application state shared across all axum handlers.
///
/// Generic over the device client and the snapshot publisher to avoid
/// dynamic dispatch. Both services share one `Arc<C>` client. `Clone` is
/// implemented manually so the underlying types themselves do not need to
/// be `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<C, P> {
    /// Owner of the dashboard aggregate, shared with the poll scheduler.
    pub dashboard_service: Arc<DashboardService<Arc<C>, P>>,
    /// Fire-and-forget fan and lamp commands.
    pub actuator_service: ActuatorService<C>,
    /// Snapshot bus for SSE streaming.
    pub snapshot_bus: Arc<InProcessSnapshotBus>,
    /// How often the HTML page reloads itself.
    pub refresh: Duration,
}

impl<C, P> Clone for AppState<C, P> {
    fn clone(&self) -> Self {
        Self {
            dashboard_service: Arc::clone(&self.dashboard_service),
            actuator_service: self.actuator_service.clone(),
            snapshot_bus: Arc::clone(&self.snapshot_bus),
            refresh: self.refresh,
        }
    }
}

impl<C, P> AppState<C, P>
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    /// Create the state from services already shared with background tasks.
    pub fn new(
        dashboard_service: Arc<DashboardService<Arc<C>, P>>,
        actuator_service: ActuatorService<C>,
        snapshot_bus: Arc<InProcessSnapshotBus>,
        refresh: Duration,
    ) -> Self {
        Self {
            dashboard_service,
            actuator_service,
            snapshot_bus,
            refresh,
        }
    }

    /// Page reload period in whole seconds, rounded up and never zero.
    #[must_use]
    pub fn refresh_seconds(&self) -> u64 {
        let whole = self.refresh.as_secs() + u64::from(self.refresh.subsec_nanos() > 0);
        whole.max(1)
    }
}
