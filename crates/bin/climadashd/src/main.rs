//! # climadashd: climadash daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise `tracing` logging
//! - Construct the device client chosen by `device.kind`
//! - Construct application services around one shared dashboard
//! - Start the poll scheduler
//! - Build the axum router, bind to a TCP port and serve
//! - Handle graceful shutdown (Ctrl-C)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use climadash_adapter_device_http::HttpDeviceClient;
use climadash_adapter_http_axum::router;
use climadash_adapter_http_axum::state::AppState;
use climadash_adapter_virtual::VirtualDevice;
use climadash_app::ports::DeviceClient;
use climadash_app::scheduler::PollScheduler;
use climadash_app::services::actuator_service::ActuatorService;
use climadash_app::services::dashboard_service::DashboardService;
use climadash_app::snapshot_bus::InProcessSnapshotBus;
use climadash_domain::dashboard::Dashboard;

use config::{Config, DeviceKind};

const SNAPSHOT_BUS_CAPACITY: usize = 64;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).context("invalid logging filter")?,
        )
        .init();

    match config.device.kind {
        DeviceKind::Http => {
            let device =
                HttpDeviceClient::new(&config.device.http).context("failed to build device client")?;
            tracing::info!(base_url = device.base_url(), "using HTTP device");
            serve(device, &config).await
        }
        DeviceKind::Virtual => {
            tracing::info!("using virtual device");
            serve(VirtualDevice::default(), &config).await
        }
    }
}

async fn serve<C>(device: C, config: &Config) -> anyhow::Result<()>
where
    C: DeviceClient + Send + Sync + 'static,
{
    let device = Arc::new(device);
    let snapshot_bus = Arc::new(InProcessSnapshotBus::new(SNAPSHOT_BUS_CAPACITY));
    let dashboard = Dashboard::with_capacity(config.poll.history_capacity)
        .context("invalid history capacity")?;

    // Services
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&device),
        Arc::clone(&snapshot_bus),
        dashboard,
    ));
    let actuator_service = ActuatorService::new(device);

    // Background polling
    let poller = PollScheduler::start(Arc::clone(&dashboard_service), config.poll.interval());

    // HTTP
    let state = AppState::new(
        dashboard_service,
        actuator_service,
        snapshot_bus,
        config.poll.interval(),
    );
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "climadashd listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    poller.abort();
    tracing::info!("climadashd stopped");
    served.context("HTTP server failed")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
