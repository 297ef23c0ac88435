//! Dashboard service: the poll tick and the sensor toggle.
//!
//! A poll fetches one [`StatusReading`] from the device, writes it into the
//! display fields and the rolling buffer, then publishes a snapshot so every
//! view redraws. Failures are logged and leave the dashboard untouched; the
//! next scheduled tick is the only retry.
//!
//! Every change and its snapshot publication happen under one async lock, so
//! views receive snapshots in the order the dashboard changed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use climadash_domain::dashboard::{Dashboard, DashboardSnapshot};
use climadash_domain::error::ClimadashError;
use climadash_domain::reading::StatusReading;
use climadash_domain::time::now;

use crate::ports::{DeviceClient, SnapshotPublisher};

/// What a single [`DashboardService::poll`] call did.
#[derive(Debug)]
pub enum PollOutcome {
    /// Sensors are switched off; no request was made.
    Disabled,
    /// A previous poll is still waiting on the device; no request was made.
    InFlight,
    /// The device answered and the dashboard was updated.
    Updated(StatusReading),
    /// The request or the payload failed; the dashboard kept its previous values.
    Failed(ClimadashError),
}

/// Application service owning the dashboard state.
pub struct DashboardService<C, P> {
    client: C,
    publisher: P,
    dashboard: Mutex<Dashboard>,
    redraw: tokio::sync::Mutex<()>,
    in_flight: AtomicBool,
}

impl<C, P> DashboardService<C, P>
where
    C: DeviceClient,
    P: SnapshotPublisher,
{
    /// Create a new service polling `client` and redrawing through `publisher`.
    pub fn new(client: C, publisher: P, dashboard: Dashboard) -> Self {
        Self {
            client,
            publisher,
            dashboard: Mutex::new(dashboard),
            redraw: tokio::sync::Mutex::new(()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run one poll tick.
    ///
    /// Skips all network I/O when sensors are disabled or when another poll
    /// has not finished yet.
    pub async fn poll(&self) -> PollOutcome {
        let enabled = self.lock().sensors_enabled();
        if !enabled {
            tracing::trace!("sensors disabled, skipping poll");
            return PollOutcome::Disabled;
        }

        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            tracing::debug!("previous poll still in flight, skipping tick");
            return PollOutcome::InFlight;
        };

        match self.client.fetch_status().await {
            Ok(reading) => {
                self.update(|dashboard| dashboard.apply_reading(&reading, now())).await;
                tracing::debug!(
                    temperature = reading.temperature,
                    humidity = reading.humidity,
                    fan = reading.fan_on,
                    lamp = reading.lamp_on,
                    "dashboard updated"
                );
                PollOutcome::Updated(reading)
            }
            Err(err) => {
                tracing::error!(error = ?err, "failed to fetch device status, keeping previous values");
                PollOutcome::Failed(err)
            }
        }
    }

    /// Flip the sensor flag and redraw, returning the new value.
    ///
    /// A poll already in flight is not cancelled; only later ticks are skipped.
    pub async fn toggle_sensors(&self) -> bool {
        let enabled = self.update(Dashboard::toggle_sensors).await;
        tracing::info!(enabled, "sensors toggled");
        enabled
    }

    /// Copy the current dashboard out for rendering.
    pub fn snapshot(&self) -> DashboardSnapshot {
        self.lock().snapshot()
    }

    /// Apply `change` and publish the resulting snapshot before any other
    /// change can start.
    async fn update<R>(&self, change: impl FnOnce(&mut Dashboard) -> R) -> R {
        let _redraw = self.redraw.lock().await;
        let (result, snapshot) = {
            let mut dashboard = self.lock();
            let result = change(&mut dashboard);
            (result, dashboard.snapshot())
        };
        if let Err(err) = self.publisher.publish(snapshot).await {
            tracing::warn!(error = ?err, "failed to publish dashboard snapshot");
        }
        result
    }

    fn lock(&self) -> MutexGuard<'_, Dashboard> {
        self.dashboard.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Holds the re-entrancy flag for the duration of one poll.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
