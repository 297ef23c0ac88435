//! # climadash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DeviceClient`: fetch a status reading, send an actuator command
//!   - `SnapshotPublisher`: redraw every view with a fresh dashboard snapshot
//! - Define **driving/inbound** use-case structs:
//!   - `DashboardService`: poll the device, toggle sensors, read the dashboard
//!   - `ActuatorService`: fire-and-forget fan/lamp commands
//!   - `PollScheduler`: run polls on a fixed interval
//! - Provide **in-process infrastructure** (snapshot bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `climadash-domain` only (plus `tokio` for channels, timers and tasks).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod scheduler;
pub mod services;
pub mod snapshot_bus;
