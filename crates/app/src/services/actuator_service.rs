//! Actuator service: fire-and-forget fan and lamp commands.

use std::sync::Arc;

use tokio::task::JoinHandle;

use climadash_domain::actuator::{Actuator, Command};

use crate::ports::DeviceClient;

/// Sends on/off commands to the device without waiting for confirmation.
///
/// The actual actuator state only shows up on the next successful poll.
pub struct ActuatorService<C> {
    client: Arc<C>,
}

impl<C> Clone for ActuatorService<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C> ActuatorService<C>
where
    C: DeviceClient + Send + Sync + 'static,
{
    /// Create a new service sharing `client` with the poller.
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub fn set_fan(&self, on: bool) -> JoinHandle<()> {
        self.send(Command::new(Actuator::Fan, on))
    }

    pub fn set_lamp(&self, on: bool) -> JoinHandle<()> {
        self.send(Command::new(Actuator::Lamp, on))
    }

    /// Spawn the request and return immediately.
    ///
    /// Failures are logged at `debug` and dropped; there is no retry.
    /// Must be called from within a tokio runtime.
    pub fn send(&self, command: Command) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            tracing::debug!(actuator = %command.actuator, on = command.on, "sending command");
            if let Err(err) = client.send_command(command).await {
                tracing::debug!(
                    error = ?err,
                    actuator = %command.actuator,
                    on = command.on,
                    "command not delivered, dropping"
                );
            }
        })
    }
}
