//! In-process snapshot bus backed by a tokio broadcast channel.

use std::future::Future;

use tokio::sync::broadcast;

use climadash_domain::dashboard::DashboardSnapshot;
use climadash_domain::error::ClimadashError;

use crate::ports::SnapshotPublisher;

/// In-process snapshot bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the snapshot is simply dropped).
pub struct InProcessSnapshotBus {
    sender: broadcast::Sender<DashboardSnapshot>,
}

impl InProcessSnapshotBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to snapshots on this bus.
    ///
    /// Returns a receiver that will get all snapshots published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardSnapshot> {
        self.sender.subscribe()
    }
}

impl SnapshotPublisher for InProcessSnapshotBus {
    fn publish(
        &self,
        snapshot: DashboardSnapshot,
    ) -> impl Future<Output = Result<(), ClimadashError>> + Send {
        // broadcast::send only fails with zero receivers; nobody is watching.
        let _ = self.sender.send(snapshot);
        async { Ok(()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use climadash_domain::dashboard::Dashboard;

    fn snapshot_with_sensors(enabled: bool) -> DashboardSnapshot {
        let mut dashboard = Dashboard::default();
        if !enabled {
            dashboard.toggle_sensors();
        }
        dashboard.snapshot()
    }

    #[tokio::test]
    async fn should_deliver_snapshot_to_subscriber() {
        let bus = InProcessSnapshotBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(snapshot_with_sensors(false)).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert!(!received.fields.sensors_enabled);
    }

    #[tokio::test]
    async fn should_deliver_snapshot_to_multiple_subscribers() {
        let bus = InProcessSnapshotBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(snapshot_with_sensors(true)).await.unwrap();

        assert!(rx1.recv().await.unwrap().fields.sensors_enabled);
        assert!(rx2.recv().await.unwrap().fields.sensors_enabled);
    }

    #[tokio::test]
    async fn should_succeed_when_no_subscribers() {
        let bus = InProcessSnapshotBus::new(16);
        let result = bus.publish(snapshot_with_sensors(true)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_not_deliver_snapshots_published_before_subscription() {
        let bus = InProcessSnapshotBus::new(16);
        bus.publish(snapshot_with_sensors(true)).await.unwrap();

        let mut rx = bus.subscribe();
        bus.publish(snapshot_with_sensors(false)).await.unwrap();

        let received = rx.recv().await.unwrap();
        assert!(!received.fields.sensors_enabled);
    }
}
