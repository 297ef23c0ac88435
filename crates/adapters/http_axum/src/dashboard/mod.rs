//! Server-side rendered HTML dashboard (no JavaScript).

pub mod chart;
#[allow(clippy::missing_errors_doc)]
pub mod controls;
pub mod home;

use axum::Router;
use axum::routing::{get, post};

use climadash_app::ports::{DeviceClient, SnapshotPublisher};

use crate::state::AppState;

/// Build the dashboard sub-router for SSR HTML pages and their form targets.
pub fn routes<C, P>() -> Router<AppState<C, P>>
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home::index::<C, P>))
        .route("/fan/{state}", post(controls::fan::<C, P>))
        .route("/lamp/{state}", post(controls::lamp::<C, P>))
        .route("/sensors/toggle", post(controls::toggle_sensors::<C, P>))
}
