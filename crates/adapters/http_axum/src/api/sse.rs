//! Server-Sent Events (SSE) stream of dashboard redraws.

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use climadash_app::ports::{DeviceClient, SnapshotPublisher};

use crate::state::AppState;

/// `GET /api/stream`: one JSON snapshot per redraw.
///
/// Subscribes to the snapshot bus and sends each snapshot as an SSE `data:`
/// frame until the client disconnects. Lagging subscribers skip the
/// snapshots they missed; the next frame carries the full state anyway.
pub async fn stream<C, P>(
    State(state): State<AppState<C, P>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>>
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    let snapshot_rx = state.snapshot_bus.subscribe();
    let snapshot_stream = BroadcastStream::new(snapshot_rx).filter_map(|result| match result {
        Ok(snapshot) => match serde_json::to_string(&snapshot) {
            Ok(json) => Some(Ok(Event::default().data(json))),
            Err(err) => {
                tracing::warn!(%err, "failed to serialize snapshot for SSE stream");
                None
            }
        },
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(n)) => {
            tracing::warn!(skipped = n, "SSE subscriber lagged, some snapshots were dropped");
            None
        }
    });

    Sse::new(snapshot_stream).keep_alive(KeepAlive::default())
}
