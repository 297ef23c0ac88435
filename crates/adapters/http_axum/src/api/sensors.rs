//! Sensor toggle endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use climadash_app::ports::{DeviceClient, SnapshotPublisher};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SensorsResponse {
    pub sensors_enabled: bool,
}

/// `POST /api/sensors/toggle`: flip the sensor flag.
pub async fn toggle<C, P>(State(state): State<AppState<C, P>>) -> Json<SensorsResponse>
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    let sensors_enabled = state.dashboard_service.toggle_sensors().await;
    Json(SensorsResponse { sensors_enabled })
}
