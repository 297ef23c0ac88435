//! Dashboard home page: status fields, chart and controls.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use climadash_app::ports::{DeviceClient, SnapshotPublisher};
use climadash_domain::dashboard::{DashboardSnapshot, DisplayFields};

use super::chart;
use crate::state::AppState;

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    refresh_seconds: u64,
    fields: DisplayFields,
    chart: String,
    count: usize,
    capacity: usize,
}

impl HomeTemplate {
    /// Build the page for `snapshot`, asking the browser to reload every
    /// `refresh_seconds`.
    #[must_use]
    pub fn from_snapshot(snapshot: &DashboardSnapshot, refresh_seconds: u64) -> Self {
        Self {
            refresh_seconds,
            fields: snapshot.fields,
            chart: chart::render(&snapshot.samples),
            count: snapshot.samples.len(),
            capacity: snapshot.history_capacity,
        }
    }
}

impl IntoResponse for HomeTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /`: the whole dashboard.
pub async fn index<C, P>(State(state): State<AppState<C, P>>) -> HomeTemplate
where
    C: DeviceClient + Send + Sync + 'static,
    P: SnapshotPublisher + Send + Sync + 'static,
{
    let snapshot = state.dashboard_service.snapshot();
    HomeTemplate::from_snapshot(&snapshot, state.refresh_seconds())
}
