//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod actuators;
pub mod dashboard;
pub mod sensors;
pub mod sse;

use axum::Router;
use axum::routing::{get, post};

use climadash_app::ports::{DeviceClient, SnapshotPublisher};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<C, P>() -> Router<AppState<C, P>>
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    Router::new()
        .route("/dashboard", get(dashboard::get::<C, P>))
        .route(
            "/actuators/{actuator}/{state}",
            post(actuators::send::<C, P>),
        )
        .route("/sensors/toggle", post(sensors::toggle::<C, P>))
        .route("/stream", get(sse::stream::<C, P>))
}
