//! Form targets behind the dashboard buttons (POST, then redirect to `/`).

use axum::extract::{Path, State};
use axum::response::Redirect;

use climadash_app::ports::{DeviceClient, SnapshotPublisher};

use crate::error::{ApiError, parse_switch};
use crate::state::AppState;

/// `POST /fan/{state}`: switch the fan, then back to the page.
pub async fn fan<C, P>(
    State(state): State<AppState<C, P>>,
    Path(switch): Path<String>,
) -> Result<Redirect, ApiError>
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    drop(state.actuator_service.set_fan(parse_switch(&switch)?));
    Ok(Redirect::to("/"))
}

/// `POST /lamp/{state}`: switch the lamp, then back to the page.
pub async fn lamp<C, P>(
    State(state): State<AppState<C, P>>,
    Path(switch): Path<String>,
) -> Result<Redirect, ApiError>
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    drop(state.actuator_service.set_lamp(parse_switch(&switch)?));
    Ok(Redirect::to("/"))
}

/// `POST /sensors/toggle`
pub async fn toggle_sensors<C, P>(State(state): State<AppState<C, P>>) -> Redirect
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    state.dashboard_service.toggle_sensors().await;
    Redirect::to("/")
}
