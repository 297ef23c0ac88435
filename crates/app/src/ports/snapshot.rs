//! Snapshot port: push a fresh dashboard to every view (the "redraw").

use std::future::Future;

use climadash_domain::dashboard::DashboardSnapshot;
use climadash_domain::error::ClimadashError;

/// Publishes dashboard snapshots to interested views.
pub trait SnapshotPublisher {
    /// Publish a snapshot to all current subscribers.
    fn publish(
        &self,
        snapshot: DashboardSnapshot,
    ) -> impl Future<Output = Result<(), ClimadashError>> + Send;
}

impl<T: SnapshotPublisher + Send + Sync> SnapshotPublisher for std::sync::Arc<T> {
    fn publish(
        &self,
        snapshot: DashboardSnapshot,
    ) -> impl Future<Output = Result<(), ClimadashError>> + Send {
        (**self).publish(snapshot)
    }
}
