//! Poll scheduler: fires a poll tick on a fixed interval.
//!
//! Every tick spawns its own poll task so a slow device never delays the
//! timer. Overlapping polls are rejected by the service's in-flight guard.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::ports::{DeviceClient, SnapshotPublisher};
use crate::services::dashboard_service::{DashboardService, PollOutcome};

/// Default delay between two poll ticks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Background task driving [`DashboardService::poll`].
pub struct PollScheduler;

impl PollScheduler {
    /// Spawn the tick loop. The first tick fires one `interval` after start.
    ///
    /// The loop runs until the returned handle is aborted.
    pub fn start<C, P>(service: Arc<DashboardService<C, P>>, interval: Duration) -> JoinHandle<()>
    where
        C: DeviceClient + Send + Sync + 'static,
        P: SnapshotPublisher + Send + Sync + 'static,
    {
        tracing::info!(?interval, "starting poll scheduler");
        tokio::spawn(run(service, interval))
    }
}

async fn run<C, P>(service: Arc<DashboardService<C, P>>, interval: Duration)
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            match service.poll().await {
                PollOutcome::InFlight => {
                    tracing::debug!("tick skipped, device still answering previous poll");
                }
                PollOutcome::Disabled | PollOutcome::Updated(_) | PollOutcome::Failed(_) => {}
            }
        });
    }
}
