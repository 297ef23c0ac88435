//! Dashboard snapshot as JSON.

use axum::Json;
use axum::extract::State;

use climadash_app::ports::{DeviceClient, SnapshotPublisher};
use climadash_domain::dashboard::DashboardSnapshot;

use crate::state::AppState;

/// `GET /api/dashboard`: display fields and chart series.
pub async fn get<C, P>(State(state): State<AppState<C, P>>) -> Json<DashboardSnapshot>
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    Json(state.dashboard_service.snapshot())
}
