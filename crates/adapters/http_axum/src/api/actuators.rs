//! Actuator command handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

use climadash_app::ports::{DeviceClient, SnapshotPublisher};
use climadash_domain::actuator::{Actuator, Command};

use crate::error::{ApiError, parse_switch};
use crate::state::AppState;

/// Echo of an accepted command.
#[derive(Debug, Serialize)]
pub struct CommandAccepted {
    pub actuator: Actuator,
    pub state: &'static str,
}

/// `POST /api/actuators/{actuator}/{state}`: send a command without waiting.
///
/// The device's answer is never awaited; the new state shows up on the next
/// successful poll.
pub async fn send<C, P>(
    State(state): State<AppState<C, P>>,
    Path((actuator, switch)): Path<(String, String)>,
) -> Result<(StatusCode, Json<CommandAccepted>), ApiError>
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    let command = Command::new(actuator.parse()?, parse_switch(&switch)?);
    drop(state.actuator_service.send(command));

    Ok((
        StatusCode::ACCEPTED,
        Json(CommandAccepted {
            actuator: command.actuator,
            state: if command.on { "on" } else { "off" },
        }),
    ))
}
